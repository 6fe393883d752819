use crate::app::{use_language, use_view};
use crate::components::spotlight_card::SpotlightCard;
use crate::fx::pointer::Spotlight;
use crate::pages::modals::{
    ComplianceModal, DiscoveryModal, HarmonizationModal, RepositoryModal, RiskModal, SmartDraftingModal,
};
use crate::pages::security_perimeter::SecurityPerimeterSection;
use crate::state::{Anchor, BodyScrollLock, FeatureTab, ModalController, ModalId, ViewAction};
use std::rc::Rc;
use yew::prelude::*;

/// Bar heights for the compliance card's mini chart; the third is the flagged one.
const COMPLIANCE_BARS: [u8; 6] = [48, 72, 36, 64, 28, 56];

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let language = use_language();
    let view = use_view();
    let modals = use_mut_ref(|| ModalController::new(Rc::new(BodyScrollLock::default())));
    let rerender = use_force_update();
    let t = language.store.t();
    let cards = &t.features.cards;

    // Leaving the section with a modal open must not leave the page frozen.
    {
        let modals = modals.clone();
        use_effect_with_deps(move |_| move || modals.borrow_mut().close(), ());
    }

    let open = |id: ModalId| {
        let modals = modals.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            modals.borrow_mut().open(id);
            rerender.force_update();
        })
    };
    let onclose = {
        let modals = modals.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            modals.borrow_mut().close();
            rerender.force_update();
        })
    };

    let active_modal = modals.borrow().active();
    let modal = match active_modal {
        None => html! {},
        Some(ModalId::Discovery) => html! { <DiscoveryModal {onclose} /> },
        Some(ModalId::Harmonization) => html! { <HarmonizationModal {onclose} /> },
        Some(ModalId::Drafting) => html! { <SmartDraftingModal {onclose} /> },
        Some(ModalId::Compliance) => html! { <ComplianceModal {onclose} /> },
        Some(ModalId::Risk) => html! { <RiskModal {onclose} /> },
        Some(ModalId::Repository) => html! { <RepositoryModal {onclose} /> },
    };

    let tab = view.state.tab();
    let tab_button = |target: FeatureTab, label: &'static str| {
        html! {
            <button
                class={classes!("tab", (tab == target).then_some("active"))}
                onclick={view.on(ViewAction::SelectTab(target))}
            >
                {label}
            </button>
        }
    };

    let grid = html! {
        <div class="feature-grid">
            <SpotlightCard
                class="feature-card card-wide"
                spotlight={Spotlight::BLUE.with_radius(1000)}
                onclick={open(ModalId::Discovery)}
            >
                <div class="card-top">
                    <div class="card-icon">{"⌕"}</div>
                    <span class="card-tag mono">{cards.discovery.module}</span>
                </div>
                <div class="discovery-visual">
                    <div class="scan-ring"></div>
                    <div class="scan-label mono">{cards.discovery.scanning}</div>
                    <div class="scan-bar"><div class="scan-bar-fill"></div></div>
                    <div class="scan-packets mono">
                        <div>{"DAT_PKT_01: Verified"}</div>
                        <div>{"DAT_PKT_02: Verified"}</div>
                        <div>{"DAT_PKT_03: Parsing..."}</div>
                    </div>
                </div>
                <h3 class="card-title-lg">{cards.discovery.title}</h3>
                <p>{cards.discovery.desc}</p>
            </SpotlightCard>

            <SpotlightCard class="feature-card" onclick={open(ModalId::Harmonization)}>
                <div class="card-top">
                    <div class="card-icon">{"⚖"}</div>
                </div>
                <div class="card-stats">
                    { for cards.harmonization.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-row mono">
                                <span>{stat.label}</span>
                                <span class="text-accent">{stat.value}</span>
                            </div>
                            <div class="stat-track">
                                <div class="stat-fill" style={format!("width: {};", stat.value)}></div>
                            </div>
                        </div>
                    }) }
                </div>
                <h3>{cards.harmonization.title}</h3>
                <p>{cards.harmonization.desc}</p>
            </SpotlightCard>

            <SpotlightCard class="feature-card" onclick={open(ModalId::Drafting)}>
                <div class="card-top">
                    <div class="card-icon">{"⚡"}</div>
                </div>
                <h3>{cards.drafting.title}</h3>
                <p>{cards.drafting.desc}</p>
            </SpotlightCard>

            <SpotlightCard class="feature-card" onclick={open(ModalId::Compliance)}>
                <div class="card-top">
                    <div class="card-icon">{"▤"}</div>
                </div>
                <div class="mini-chart">
                    { for COMPLIANCE_BARS.iter().enumerate().map(|(i, height)| html! {
                        <div
                            class={classes!("mini-bar", (i == 2).then_some("flagged"))}
                            style={format!("height: {}%;", height)}
                        ></div>
                    }) }
                </div>
                <h3>{cards.compliance.title}</h3>
                <p>{cards.compliance.desc}</p>
            </SpotlightCard>

            <SpotlightCard class="feature-card" spotlight={Spotlight::RED} onclick={open(ModalId::Risk)}>
                <div class="card-top">
                    <div class="card-icon danger">{"⛨"}</div>
                </div>
                <div class="risk-metric">
                    <div class="metric-value mono">{"99.9"}<span>{"%"}</span></div>
                    <div class="metric-label">{cards.risk.metric}</div>
                </div>
                <h3>{cards.risk.title}</h3>
                <p>{cards.risk.desc}</p>
            </SpotlightCard>

            <SpotlightCard class="feature-card" onclick={open(ModalId::Repository)}>
                <div class="card-top">
                    <div class="card-icon">{"⛁"}</div>
                </div>
                <div class="vault-rows">
                    <div class="vault-row">
                        <span class="status-dot"></span>
                        <span class="vault-line short"></span>
                        <span class="mono">{cards.repository.encrypted}</span>
                    </div>
                    <div class="vault-row">
                        <span class="status-dot"></span>
                        <span class="vault-line"></span>
                        <span class="mono">{cards.repository.secure}</span>
                    </div>
                </div>
                <h3>{cards.repository.title}</h3>
                <p>{cards.repository.desc}</p>
            </SpotlightCard>
        </div>
    };

    let anchor_id = Anchor::SystemModules.element_id().unwrap_or_default();
    html! {
        <>
            {modal}
            <section id={anchor_id} class="features">
                <div class="features-glow"></div>
                <div class="section-inner features-header">
                    <div>
                        <h2>
                            {t.features.title}{" "}
                            <span class="text-muted">{t.features.title_highlight}</span>
                        </h2>
                        <p class="pre-line">{t.features.description}</p>
                    </div>
                    <div class="features-controls">
                        <div class="status-pill mono">
                            <span class="status-dot"></span>
                            {t.features.status}
                        </div>
                        <div class="tabs">
                            {tab_button(FeatureTab::Modules, t.features.tab_modules)}
                            {tab_button(FeatureTab::Security, t.features.tab_security)}
                        </div>
                    </div>
                </div>
                {
                    match tab {
                        FeatureTab::Modules => grid,
                        FeatureTab::Security => html! { <SecurityPerimeterSection /> },
                    }
                }
            </section>
        </>
    }
}
