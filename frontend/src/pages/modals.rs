//! Detail overlays for the six feature cards. Each one is rendered inside
//! [`ModalShell`] and ends with a call to action that opens registration.

use crate::app::{use_language, use_view};
use crate::components::modal::ModalShell;
use crate::i18n::{Callout, Item, ModalFooter};
use crate::state::ViewAction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub onclose: Callback<()>,
}

#[hook]
fn use_request_protocol() -> Callback<MouseEvent> {
    let view = use_view();
    view.on(ViewAction::OpenRegistration)
}

fn intro(badge: &str, headline: Html, subheadline: &str, cta: &str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <header class="modal-intro">
            <div class="modal-badge mono">{badge.to_string()}</div>
            <h2 class="modal-headline pre-line">{headline}</h2>
            <p class="modal-subheadline">{subheadline.to_string()}</p>
            <button class="button-primary" {onclick}>{cta.to_string()}</button>
        </header>
    }
}

fn item_card(icon: &'static str, item: &Item) -> Html {
    html! {
        <div class="modal-card">
            <div class="card-icon">{icon}</div>
            <h4>{item.title}</h4>
            <p>{item.desc}</p>
        </div>
    }
}

fn callout(class: &'static str, callout: &Callout) -> Html {
    html! {
        <div class={classes!("modal-callout", class)}>
            <div class="callout-badge mono">{callout.badge}</div>
            <h3>{callout.title}</h3>
            <p>{callout.description}</p>
        </div>
    }
}

fn footer_cta(footer: &ModalFooter, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <footer class="modal-footer">
            <h3>{footer.title}</h3>
            <p>{footer.subtitle}</p>
            <button class="button-primary" {onclick}>{footer.cta}</button>
        </footer>
    }
}

fn plain_footer(title: &'static str, cta: &'static str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <footer class="modal-footer">
            <h3>{title}</h3>
            <button class="button-primary" {onclick}>{cta}</button>
        </footer>
    }
}

#[function_component(DiscoveryModal)]
pub fn discovery_modal(props: &ModalProps) -> Html {
    let language = use_language();
    let request = use_request_protocol();
    let t = &language.store.t().discovery_modal;

    let headline = html! {
        <>{t.headline_start}<span class="text-gradient">{t.headline_highlight}</span></>
    };
    html! {
        <ModalShell onclose={props.onclose.clone()}>
            {intro(t.badge, headline, t.subheadline, t.cta, request.clone())}

            <section class="modal-section">
                <h3>{t.static_archive.title}</h3>
                <p class="section-sub">{t.static_archive.subtitle}</p>
                <div class="modal-grid two">
                    {item_card("⚰", &t.static_archive.card1)}
                    {item_card("⚠", &t.static_archive.card2)}
                </div>
            </section>

            <section class="modal-section">
                <h3>{t.features_title}</h3>
                <div class="modal-grid three">
                    {item_card("▦", &t.library)}
                    {item_card("⌬", &t.vectorization)}
                    {item_card("⇄", &t.bridge)}
                </div>
            </section>

            {plain_footer(t.footer, t.cta, request)}
        </ModalShell>
    }
}

#[function_component(HarmonizationModal)]
pub fn harmonization_modal(props: &ModalProps) -> Html {
    let language = use_language();
    let request = use_request_protocol();
    let t = &language.store.t().harmonization_modal;
    let stack = &t.logic_stack;
    let cmp = &t.comparison;

    let headline = html! {
        <>{t.headline_start}<span class="text-gradient">{t.headline_highlight}</span></>
    };
    let shield = |class: &'static str, shield: &crate::i18n::Shield| {
        html! {
            <div class={classes!("shield", class)}>
                <div class="shield-head">
                    <h4>{shield.title}</h4>
                    <span class="shield-tag mono">{shield.tag}</span>
                </div>
                <ul>
                    { for shield.items.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
            </div>
        }
    };
    let verdict = |class: &'static str, v: &crate::i18n::Verdict| {
        html! {
            <div class={classes!("verdict", class)}>
                <div class="verdict-head">
                    <h4>{v.title}</h4>
                    <span class="verdict-status mono">{v.status}</span>
                </div>
                <p>{v.description}</p>
                <div class="verdict-result">{v.result}</div>
            </div>
        }
    };

    html! {
        <ModalShell onclose={props.onclose.clone()}>
            {intro(t.badge, headline, t.subheadline, t.cta, request.clone())}

            <section class="modal-section">
                <h3>{stack.title}</h3>
                <p class="section-sub">{stack.subtitle}</p>
                <div class="modal-grid two">
                    {shield("public", &stack.public_shield)}
                    {shield("corporate", &stack.corporate_shield)}
                </div>
                <p class="protocol-note">
                    {stack.protocol_prefix}
                    <strong class="text-accent">{stack.protocol_highlight}</strong>
                    {stack.protocol_suffix}
                </p>
            </section>

            <section class="modal-section">
                <div class="callout-badge mono">{cmp.badge}</div>
                <h3>{cmp.title}</h3>
                <div class="scenario">
                    <span class="mono">{cmp.scenario}</span>
                    <span>{cmp.scenario_title}</span>
                </div>
                <div class="modal-grid two">
                    {verdict("generic", &cmp.generic)}
                    {verdict("lexia", &cmp.lexia)}
                </div>
            </section>

            {plain_footer(t.footer, t.cta, request)}
        </ModalShell>
    }
}

#[function_component(SmartDraftingModal)]
pub fn smart_drafting_modal(props: &ModalProps) -> Html {
    let language = use_language();
    let request = use_request_protocol();
    let t = &language.store.t().smart_drafting_modal;

    let headline = html! {
        <>
            {t.headline_start}
            <span class="text-gradient">{t.headline_highlight}</span>
            {t.headline_end}
        </>
    };
    html! {
        <ModalShell onclose={props.onclose.clone()}>
            {intro(t.badge, headline, t.subheadline, t.cta, request.clone())}

            <section class="modal-section">
                {callout("danger", &t.risk)}
                <div class="modal-grid two">
                    {item_card("≠", &t.format)}
                    {item_card("☠", &t.zombie)}
                </div>
            </section>

            <section class="modal-section">
                <h3>{t.features_title}</h3>
                <p class="section-sub">{t.features_subtitle}</p>
                <div class="modal-grid two">
                    {item_card("☰", &t.inputs)}
                    {item_card("⇆", &t.bilingual)}
                    {item_card("⎘", &t.template)}
                    {item_card("✎", &t.refinement)}
                </div>
                <div class="prompt-chip mono">{t.refinement_visual}</div>
            </section>

            {footer_cta(&t.footer, request)}
        </ModalShell>
    }
}

#[function_component(ComplianceModal)]
pub fn compliance_modal(props: &ModalProps) -> Html {
    let language = use_language();
    let request = use_request_protocol();
    let t = &language.store.t().compliance_modal;

    let headline = html! {
        <>{t.headline_start}<span class="text-gradient">{t.headline_highlight}</span></>
    };
    let tier = |tier: &crate::i18n::Tier| {
        html! {
            <div class="tier">
                <div class="tier-head">
                    <span class="mono">{tier.title}</span>
                    <h4>{tier.subtitle}</h4>
                </div>
                <ul>
                    { for tier.items.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
            </div>
        }
    };

    html! {
        <ModalShell onclose={props.onclose.clone()}>
            {intro(t.badge, headline, t.subheadline, t.cta, request.clone())}

            <section class="modal-section">
                {callout("warning", &t.blind_spot)}
            </section>

            <section class="modal-section">
                <h3>{t.tiers_title}</h3>
                <p class="section-sub">{t.tiers_subtitle}</p>
                <div class="modal-grid two">
                    {tier(&t.tier1)}
                    {tier(&t.tier2)}
                </div>
            </section>

            <section class="modal-section">
                {callout("accent", &t.fixer)}
                <div class="match-meter mono">{t.fixer_match}</div>
            </section>

            {footer_cta(&t.footer, request)}
        </ModalShell>
    }
}

#[function_component(RiskModal)]
pub fn risk_modal(props: &ModalProps) -> Html {
    let language = use_language();
    let request = use_request_protocol();
    let t = &language.store.t().risk_modal;

    html! {
        <ModalShell onclose={props.onclose.clone()} class="modal-danger">
            {intro(t.badge, html! { {t.headline} }, t.subheadline, t.cta, request.clone())}

            <section class="modal-section">
                {callout("danger", &t.problem)}
                <div class="alert-stack">
                    <div class="alert pre-line">{t.authority_alert}</div>
                    <div class="alert pre-line">{t.tkdn_alert}</div>
                </div>
            </section>

            <section class="modal-section">
                <h3>{t.features_title}</h3>
                <p class="section-sub">{t.features_subtitle}</p>
                <div class="modal-grid three">
                    { for t.checks.iter().map(|check| html! {
                        <div class="modal-card">
                            <h4>{check.title}</h4>
                            <p>{check.desc}</p>
                            <div class="check-line mono">{"✓ "}{check.check}</div>
                        </div>
                    }) }
                </div>
            </section>

            {footer_cta(&t.footer, request)}
        </ModalShell>
    }
}

#[function_component(RepositoryModal)]
pub fn repository_modal(props: &ModalProps) -> Html {
    let language = use_language();
    let request = use_request_protocol();
    let t = &language.store.t().repository_modal;

    html! {
        <ModalShell onclose={props.onclose.clone()}>
            {intro(t.badge, html! { {t.headline} }, t.subheadline, t.cta, request.clone())}

            <section class="modal-section">
                {callout("muted", &t.problem)}
            </section>

            <section class="modal-section">
                <h3>{t.features_title}</h3>
                <p class="section-sub">{t.features_subtitle}</p>
                <div class="modal-grid three">
                    <div class="modal-card">
                        <h4>{t.tagging.title}</h4>
                        <p>{t.tagging.desc}</p>
                        <div class="tag-row">
                            { for t.tags.iter().map(|tag| html! { <span class="tag mono">{*tag}</span> }) }
                        </div>
                    </div>
                    <div class="modal-card">
                        <h4>{t.expiry.title}</h4>
                        <p>{t.expiry.desc}</p>
                        <div class="alert mono">{t.expiry_alert}</div>
                    </div>
                    <div class="modal-card">
                        <h4>{t.obligation.title}</h4>
                        <p>{t.obligation.desc}</p>
                        <div class="obligation mono">
                            <span>{t.obligation_task}</span>
                            <span class="text-warning">{t.obligation_status}</span>
                        </div>
                    </div>
                </div>
            </section>

            {footer_cta(&t.footer, request)}
        </ModalShell>
    }
}
