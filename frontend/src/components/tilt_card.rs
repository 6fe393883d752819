use super::pointer::sample_region;
use crate::fx::frame_loop::{AnimationFrames, FrameLoop};
use crate::fx::pointer::tilt;
use crate::fx::spring::{Spring, SpringConfig};
use std::cell::Cell;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

const TILT_SPRING: SpringConfig = SpringConfig::new(150.0, 15.0);

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Rotates toward the pointer. The springs ease the normalized offset and the
/// transform is written straight to the element each frame, so pointer moves
/// never re-render the card.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let card_ref = use_node_ref();
    let springs = use_mut_ref(|| (Spring::new(TILT_SPRING, 0.0), Spring::new(TILT_SPRING, 0.0)));

    {
        let card_ref = card_ref.clone();
        let springs = springs.clone();
        use_effect_with_deps(
            move |_| {
                let last_frame = Rc::new(Cell::new(None::<f64>));
                let frame_loop = FrameLoop::new(AnimationFrames, move |timestamp| {
                    let dt = last_frame
                        .replace(Some(timestamp))
                        .map_or(0.0, |prev| (timestamp - prev) / 1000.0);
                    let normalized = {
                        let mut springs = springs.borrow_mut();
                        (springs.0.step(dt), springs.1.step(dt))
                    };
                    let (rotate_x, rotate_y) = tilt(normalized);
                    if let Some(card) = card_ref.cast::<HtmlElement>() {
                        if let Err(e) = card.style().set_property(
                            "transform",
                            &format!("rotateX({:.2}deg) rotateY({:.2}deg)", rotate_x, rotate_y),
                        ) {
                            log::warn!("tilt card: transform not applied: {:?}", e);
                        }
                    }
                });
                frame_loop.start();
                move || frame_loop.stop()
            },
            (),
        );
    }

    let onmousemove = {
        let card_ref = card_ref.clone();
        let springs = springs.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(region) = sample_region(&card_ref) {
                let (x, y) = region.normalized(e.client_x() as f64, e.client_y() as f64);
                let mut springs = springs.borrow_mut();
                springs.0.set_target(x);
                springs.1.set_target(y);
            }
        })
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| {
        let mut springs = springs.borrow_mut();
        springs.0.set_target(0.0);
        springs.1.set_target(0.0);
    });

    html! {
        <div class="tilt-stage">
            <div
                ref={card_ref}
                class={classes!("tilt-card", props.class.clone())}
                {onmousemove}
                {onmouseleave}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}
