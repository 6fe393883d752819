use crate::fx::pointer::Region;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

/// Last pointer sample over a target, `None` once the pointer has left.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    region: Region,
    client_x: f64,
    client_y: f64,
}

pub struct RelativePointer {
    /// Pixels from the target's top-left corner.
    pub position: Option<(f64, f64)>,
    /// Offset from the centre in `[-0.5, 0.5]`, `(0, 0)` when outside.
    pub normalized: (f64, f64),
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

/// Reads the target's bounding box on every move, so the position stays
/// right while the page scrolls or the element resizes.
pub fn sample_region(target: &NodeRef) -> Option<Region> {
    target
        .cast::<Element>()
        .map(|el| Region::from_rect(&el.get_bounding_client_rect()))
}

#[hook]
pub fn use_relative_pointer(target: NodeRef) -> RelativePointer {
    let sample = use_state_eq(|| None::<Sample>);

    let onmousemove = {
        let sample = sample.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(region) = sample_region(&target) {
                sample.set(Some(Sample {
                    region,
                    client_x: e.client_x() as f64,
                    client_y: e.client_y() as f64,
                }));
            }
        })
    };
    let onmouseleave = {
        let sample = sample.clone();
        Callback::from(move |_: MouseEvent| sample.set(None))
    };

    let current = *sample;
    RelativePointer {
        position: current.map(|s| s.region.relative(s.client_x, s.client_y)),
        normalized: current.map_or((0.0, 0.0), |s| s.region.normalized(s.client_x, s.client_y)),
        onmousemove,
        onmouseleave,
    }
}
