use crate::app::use_language;
use crate::components::spotlight_card::SpotlightCard;
use crate::components::tilt_card::TiltCard;
use crate::fx::pointer::Spotlight;
use yew::prelude::*;

const PILLAR_ICONS: [&str; 4] = ["⚿", "⌖", "⛫", "⧉"];
const STEP_ICONS: [&str; 3] = ["⛉", "⌘", "◉"];

fn connector() -> Html {
    html! { <div class="flow-connector"><div class="flow-pulse"></div></div> }
}

#[function_component(SecurityPerimeterSection)]
pub fn security_perimeter_section() -> Html {
    let language = use_language();
    let t = &language.store.t().security_perimeter;

    html! {
        <div class="perimeter section-inner">
            <div class="perimeter-header">
                <h3>{t.title}</h3>
                <p>{t.subtitle}</p>
            </div>

            <div class="pillar-grid">
                { for t.pillars.iter().zip(PILLAR_ICONS).map(|(pillar, icon)| html! {
                    <SpotlightCard class="pillar-card" spotlight={Spotlight::BLUE.with_radius(600)}>
                        <div class="card-icon">{icon}</div>
                        <h4 class="mono">{pillar.code}</h4>
                        <p>{pillar.desc}</p>
                    </SpotlightCard>
                }) }
            </div>

            <TiltCard class="flow-card">
                <div class="flow-title mono">{t.flow.title}</div>
                <div class="flow-steps">
                    <div class="flow-step">
                        <div class="flow-icon">{"◯"}</div>
                        <span>{t.flow.user}</span>
                    </div>
                    { for t.flow.steps.iter().zip(STEP_ICONS).map(|(step, icon)| html! {
                        <>
                            {connector()}
                            <div class="flow-step boxed">
                                <div class="flow-icon">{icon}</div>
                                <span>{step.label}</span>
                                <span class="flow-sublabel mono">{step.sublabel}</span>
                            </div>
                        </>
                    }) }
                    {connector()}
                    <div class="flow-model">
                        <span>{t.flow.model}</span>
                        <div class="model-orb">{"✦"}</div>
                    </div>
                </div>
            </TiltCard>
        </div>
    }
}
