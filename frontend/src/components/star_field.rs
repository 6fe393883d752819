use crate::fx::frame_loop::{AnimationFrames, FrameLoop};
use crate::fx::starfield::{Sprite, StarField, StarFieldConfig, StarSurface, Viewport};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    fn fit(&self, viewport: Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }
}

impl StarSurface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style(&"rgb(0, 0, 0)".into());
        self.ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
        self.ctx.set_fill_style(&"white".into());
    }

    fn draw(&mut self, sprite: Sprite) {
        self.ctx.set_global_alpha(sprite.alpha);
        self.ctx.begin_path();
        // arc() throws on a negative radius; project() never yields one.
        if self.ctx.arc(sprite.x, sprite.y, sprite.radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
    }
}

fn window_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

/// Full-bleed animated background for the hero.
#[function_component(StarFieldCanvas)]
pub fn star_field_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(CanvasSurface::new)
                {
                    Some(surface) => {
                        let viewport = window_viewport();
                        surface.fit(viewport);
                        let field = Rc::new(RefCell::new(StarField::new(
                            StarFieldConfig::default(),
                            viewport,
                            SmallRng::from_entropy(),
                        )));
                        let surface = Rc::new(RefCell::new(surface));

                        let frame_loop = {
                            let field = field.clone();
                            let surface = surface.clone();
                            FrameLoop::new(AnimationFrames, move |_| {
                                field.borrow_mut().advance(&mut *surface.borrow_mut());
                            })
                        };
                        frame_loop.start();

                        let on_resize = Closure::<dyn Fn()>::new(move || {
                            let viewport = window_viewport();
                            surface.borrow().fit(viewport);
                            field.borrow_mut().resize(viewport);
                        });
                        let window = web_sys::window();
                        if let Some(window) = &window {
                            if let Err(e) = window
                                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                            {
                                log::warn!("star field: resize listener not attached: {:?}", e);
                            }
                        }

                        Box::new(move || {
                            frame_loop.stop();
                            if let Some(window) = window {
                                let _ = window.remove_event_listener_with_callback(
                                    "resize",
                                    on_resize.as_ref().unchecked_ref(),
                                );
                            }
                            log::debug!("star field: torn down");
                        })
                    }
                    None => {
                        log::warn!("star field: 2d canvas unavailable, background disabled");
                        Box::new(|| ())
                    }
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="star-field" aria-hidden="true"></canvas>
    }
}
