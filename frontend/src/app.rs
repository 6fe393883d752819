use crate::components::custom_cursor::CustomCursor;
use crate::components::navbar::Navbar;
use crate::i18n::{LanguageAction, LanguageStore};
use crate::pages::features::FeaturesSection;
use crate::pages::footer::Footer;
use crate::pages::hero::Hero;
use crate::pages::problem::ProblemSection;
use crate::pages::registration::RegistrationPage;
use crate::pages::sovereignty::SovereigntySection;
use crate::state::{Anchor, View, ViewAction, ViewState};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;

/// Pause between switching back to home and applying a parked tab, so the
/// feature section is mounted and laid out before it is scrolled to.
const NAV_SETTLE_MS: u32 = 100;

/// Shared language selection. Components read `store` and write through
/// [`dispatch`](Self::dispatch) only.
#[derive(Clone, Default, PartialEq)]
pub struct LanguageContext {
    pub store: LanguageStore,
    dispatcher: Option<UseReducerDispatcher<LanguageStore>>,
}

impl LanguageContext {
    pub fn dispatch(&self, action: LanguageAction) {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(action),
            None => log::warn!("language change outside of App"),
        }
    }
}

#[derive(Clone, Default, PartialEq)]
pub struct ViewContext {
    pub state: ViewState,
    dispatcher: Option<UseReducerDispatcher<ViewState>>,
}

impl ViewContext {
    pub fn dispatch(&self, action: ViewAction) {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(action),
            None => log::warn!("navigation {:?} outside of App", action),
        }
    }

    /// Callback form for `onclick` and friends.
    pub fn on<E: 'static>(&self, action: ViewAction) -> Callback<E> {
        let ctx = self.clone();
        Callback::from(move |_: E| ctx.dispatch(action))
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_default()
}

#[hook]
pub fn use_view() -> ViewContext {
    use_context::<ViewContext>().unwrap_or_default()
}

fn scroll_to(anchor: Anchor) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match anchor.element_id() {
        None => {
            let mut options = ScrollToOptions::new();
            options.top(0.0).behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        Some(id) => {
            let target = window.document().and_then(|d| d.get_element_by_id(id));
            match target {
                Some(element) => {
                    let mut options = ScrollIntoViewOptions::new();
                    options
                        .behavior(ScrollBehavior::Smooth)
                        .block(ScrollLogicalPosition::Start);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
                None => log::warn!("scroll target #{} is not mounted", id),
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let language = use_reducer(LanguageStore::default);
    let view = use_reducer(ViewState::default);

    // Perform whatever scroll the last transition asked for.
    {
        let request = view.scroll_request();
        use_effect_with_deps(
            move |request| {
                if let Some(request) = request {
                    scroll_to(request.anchor);
                }
                || ()
            },
            request,
        );
    }

    // Second phase of cross-view navigation.
    {
        let dispatcher = view.dispatcher();
        use_effect_with_deps(
            move |pending| {
                if pending.is_some() {
                    spawn_local(async move {
                        TimeoutFuture::new(NAV_SETTLE_MS).await;
                        dispatcher.dispatch(ViewAction::CompletePending);
                    });
                }
                || ()
            },
            view.pending_tab(),
        );
    }

    let language_ctx = LanguageContext {
        store: (*language).clone(),
        dispatcher: Some(language.dispatcher()),
    };
    let view_ctx = ViewContext {
        state: (*view).clone(),
        dispatcher: Some(view.dispatcher()),
    };

    html! {
        <ContextProvider<LanguageContext> context={language_ctx}>
            <ContextProvider<ViewContext> context={view_ctx}>
                <div class="app-root" lang={language.language().code()}>
                    <CustomCursor />
                    <div class="noise-overlay"></div>
                    <Navbar />
                    {
                        match view.view() {
                            View::Home => html! {
                                <main>
                                    <Hero />
                                    <ProblemSection />
                                    <FeaturesSection />
                                    <SovereigntySection />
                                </main>
                            },
                            View::Registration => html! { <RegistrationPage /> },
                        }
                    }
                    <Footer />
                </div>
            </ContextProvider<ViewContext>>
        </ContextProvider<LanguageContext>>
    }
}
