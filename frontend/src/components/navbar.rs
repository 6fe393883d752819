use crate::app::{use_language, use_view};
use crate::i18n::LanguageAction;
use crate::state::ViewAction;
use yew::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let language = use_language();
    let view = use_view();
    let menu_open = use_state(|| false);
    let t = language.store.t();

    // Links are anchors for semantics; navigation is state-driven, so the
    // default jump is suppressed.
    let nav_link = |action: ViewAction, close_menu: bool| {
        let view = view.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            view.dispatch(action);
            if close_menu {
                menu_open.set(false);
            }
        })
    };
    let toggle_language = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| language.dispatch(LanguageAction::Toggle))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class="navbar">
            <div class="navbar-brand">
                <a href="#" class="cursor-pointer" onclick={nav_link(ViewAction::GoHome, true)}>
                    <img src="/assets/lexia-logo.svg" alt="Lexia Logo" class="navbar-logo" />
                </a>
            </div>

            <div class="navbar-links desktop-only">
                <a href="#" onclick={nav_link(ViewAction::GoHome, false)}>{t.navbar.home}</a>
                <a href="#" onclick={nav_link(ViewAction::GoToModules, false)}>{t.navbar.manifesto}</a>
                <a href="#" onclick={nav_link(ViewAction::GoToSecurity, false)}>{t.navbar.security}</a>
            </div>

            <div class="navbar-actions desktop-only">
                <button class="language-toggle" onclick={toggle_language.clone()}>
                    <span class="globe">{"◍"}</span>
                    <span>{t.navbar.toggle_short}</span>
                </button>
                <button class="button-primary" onclick={view.on(ViewAction::OpenRegistration)}>
                    {t.navbar.request_protocol}
                </button>
            </div>

            <button class="menu-toggle mobile-only" aria-label="Menu" onclick={toggle_menu}>
                { if *menu_open { "✕" } else { "☰" } }
            </button>

            if *menu_open {
                <div class="mobile-menu">
                    <div class="mobile-menu-links">
                        <a href="#" onclick={nav_link(ViewAction::GoHome, true)}>{t.navbar.home}</a>
                        <a href="#" onclick={nav_link(ViewAction::GoToModules, true)}>{t.navbar.manifesto}</a>
                        <a href="#" onclick={nav_link(ViewAction::GoToSecurity, true)}>{t.navbar.security}</a>
                    </div>
                    <div class="mobile-menu-divider"></div>
                    <div class="mobile-menu-actions">
                        <button class="language-toggle" onclick={toggle_language}>
                            <span class="globe">{"◍"}</span>
                            <span>{t.navbar.toggle_long}</span>
                        </button>
                        <button class="button-primary" onclick={nav_link(ViewAction::OpenRegistration, true)}>
                            {t.navbar.request_protocol}
                        </button>
                    </div>
                </div>
            }
        </nav>
    }
}
