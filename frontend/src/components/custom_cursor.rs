use crate::fx::frame_loop::{AnimationFrames, FrameLoop};
use crate::fx::spring::{Spring, SpringConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

const CURSOR_SPRING: SpringConfig = SpringConfig::new(700.0, 25.0);
const CLICKABLE: &str = "button, a, .cursor-pointer";
/// Dot starts parked off-screen until the first pointer move.
const OFFSCREEN: f64 = -100.0;

fn is_clickable(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(CLICKABLE).ok().flatten())
        .is_some()
}

fn set_body_cursor(value: Option<&str>) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = match value {
        Some(value) => style.set_property("cursor", value),
        None => style.remove_property("cursor").map(|_| ()),
    };
    if let Err(e) = result {
        log::warn!("cursor: could not update body cursor: {:?}", e);
    }
}

/// Replaces the native pointer with a spring-following dot that grows over
/// clickable elements.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let dot_ref = use_node_ref();
    let hovered = use_state_eq(|| false);

    {
        let dot_ref = dot_ref.clone();
        let hovered = hovered.clone();
        use_effect_with_deps(
            move |_| {
                let springs = Rc::new(RefCell::new((
                    Spring::new(CURSOR_SPRING, OFFSCREEN),
                    Spring::new(CURSOR_SPRING, OFFSCREEN),
                )));
                let last_frame = Rc::new(Cell::new(None::<f64>));

                let frame_loop = {
                    let springs = springs.clone();
                    FrameLoop::new(AnimationFrames, move |timestamp| {
                        let dt = last_frame
                            .replace(Some(timestamp))
                            .map_or(0.0, |prev| (timestamp - prev) / 1000.0);
                        let (x, y) = {
                            let mut springs = springs.borrow_mut();
                            (springs.0.step(dt), springs.1.step(dt))
                        };
                        if let Some(dot) = dot_ref.cast::<HtmlElement>() {
                            if let Err(e) = dot
                                .style()
                                .set_property("transform", &format!("translate3d({:.1}px, {:.1}px, 0)", x, y))
                            {
                                log::warn!("cursor: transform not applied: {:?}", e);
                            }
                        }
                    })
                };
                frame_loop.start();

                let on_move = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                    {
                        let mut springs = springs.borrow_mut();
                        springs.0.set_target(e.client_x() as f64);
                        springs.1.set_target(e.client_y() as f64);
                    }
                    hovered.set(is_clickable(&e));
                });
                let window = web_sys::window();
                if let Some(window) = &window {
                    if let Err(e) =
                        window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                    {
                        log::warn!("cursor: mousemove listener not attached: {:?}", e);
                    }
                }
                set_body_cursor(Some("none"));

                move || {
                    frame_loop.stop();
                    if let Some(window) = window {
                        let _ = window
                            .remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                    }
                    set_body_cursor(None);
                }
            },
            (),
        );
    }

    let dot_class = classes!("cursor-dot", hovered.then_some("hovered"));
    html! {
        <div class="cursor-layer" aria-hidden="true">
            <div ref={dot_ref} class="cursor-anchor">
                <div class={dot_class}></div>
            </div>
            <style>
                {r#"
.cursor-layer { position: fixed; inset: 0; pointer-events: none; z-index: 100; }
.cursor-anchor { position: absolute; top: 0; left: 0; will-change: transform; }
.cursor-dot {
  width: 12px; height: 12px; margin: -6px 0 0 -6px; border-radius: 50%;
  background: #fff; mix-blend-mode: difference; transition: transform 0.15s ease;
}
.cursor-dot.hovered { transform: scale(2.5); }
"#}
            </style>
        </div>
    }
}
