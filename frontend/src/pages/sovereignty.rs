use crate::app::use_language;
use crate::components::tilt_card::TiltCard;
use yew::prelude::*;

const GLOBE_IMAGE: &str = "https://images.unsplash.com/photo-1684610527413-66eec7828690?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

#[function_component(SovereigntySection)]
pub fn sovereignty_section() -> Html {
    let language = use_language();
    let t = &language.store.t().sovereignty;

    html! {
        <section class="sovereignty">
            <div class="section-inner sovereignty-layout">
                <div class="sovereignty-copy">
                    <h2>
                        {t.title}<br />
                        <span class="text-gradient">{t.title_highlight}</span>
                    </h2>
                    <div class="sovereignty-options">
                        <div class="sovereignty-option">
                            <div class="option-bar"></div>
                            <div>
                                <h3>{t.saas.title}</h3>
                                <p>{t.saas.desc}</p>
                            </div>
                        </div>
                        <div class="sovereignty-option">
                            <div class="option-bar option-bar-deep"></div>
                            <div>
                                <h3>{t.vpc.title}</h3>
                                <p>{t.vpc.desc}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <TiltCard class="globe-card cursor-pointer">
                    <div class="globe-backdrop">
                        <img src={GLOBE_IMAGE} alt="Digital Sovereignty Network" />
                    </div>
                    <div class="globe-rings depth-50">
                        <div class="ring ring-outer"></div>
                        <div class="ring ring-inner"></div>
                    </div>
                    <div class="globe-pin depth-100">
                        <div class="pin-label"><span class="status-dot"></span>{"Jakarta"}</div>
                        <div class="pin-stem"></div>
                        <div class="pin-point"></div>
                    </div>
                    <div class="globe-chip chip-top mono depth-70">
                        <div>{"STATUS: SECURE"}</div>
                        <div class="text-ok">{"ENCRYPTION: AES-256"}</div>
                    </div>
                    <div class="globe-chip chip-bottom mono depth-60">
                        <div>{"LATENCY: 2ms"}</div>
                        <div class="text-info">{"NODE: JKT-01"}</div>
                    </div>
                </TiltCard>
            </div>
        </section>
    }
}
