use crate::app::{use_language, use_view};
use crate::components::star_field::StarFieldCanvas;
use crate::fx::pointer::{hero_parallax, Parallax};
use crate::state::ViewAction;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const HERO_VIDEO: &str = "https://www.youtube.com/embed/TA9TVxuRV2g?autoplay=1&mute=1&controls=0&loop=1&playlist=TA9TVxuRV2g&showinfo=0&modestbranding=1&rel=0";

fn current_parallax() -> Parallax {
    let scroll_y = web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    hero_parallax(scroll_y)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let language = use_language();
    let view = use_view();
    let parallax = use_state_eq(current_parallax);
    let t = language.store.t();

    // Scroll-linked drift of the headline block
    {
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let parallax = parallax.clone();
                        move || parallax.set(current_parallax())
                    });
                    if let Err(e) =
                        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("hero: scroll listener not attached: {:?}", e);
                    }
                    parallax.set(current_parallax());
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let drift = format!(
        "transform: translateY({:.1}px); opacity: {:.3};",
        parallax.translate_y, parallax.opacity
    );

    html! {
        <section class="hero">
            <StarFieldCanvas />
            <div class="hero-glow"></div>

            <div class="hero-content">
                <div class="hero-copy" style={drift}>
                    <div class="hero-badge">{t.hero.badge}</div>
                    <h1 class="hero-title">
                        <div>{t.hero.title_part1}</div>
                        <span class="hero-title-shimmer">{t.hero.title_part2}</span>
                        <br />
                        <div>{t.hero.title_part3}</div>
                    </h1>
                    <p class="hero-subtitle">{t.hero.subtitle}</p>
                    <button class="button-primary hero-cta" onclick={view.on(ViewAction::OpenRegistration)}>
                        {t.hero.cta}
                    </button>
                </div>

                <div class="hero-dashboard">
                    <div class="dashboard-frame">
                        <iframe
                            class="dashboard-video"
                            src={HERO_VIDEO}
                            title="Hero Video"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        ></iframe>
                        <div class="dashboard-scanline"></div>
                        <div class="corner corner-tl"></div>
                        <div class="corner corner-tr"></div>
                        <div class="corner corner-bl"></div>
                        <div class="corner corner-br"></div>
                        <div class="dashboard-status">
                            <span class="live-dot"></span>
                            <span class="mono">{"LIVE_FEED // ENCRYPTED"}</span>
                        </div>
                    </div>
                    <div class="dashboard-float float-left">
                        <div class="float-title">{t.hero.dashboard.zero_hallucinations}</div>
                        <div class="float-body mono">{t.hero.dashboard.probabilistic_truth}</div>
                    </div>
                    <div class="dashboard-float float-right">
                        <span class="status-dot"></span>
                        <div class="float-title">{t.hero.dashboard.system_operational}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
