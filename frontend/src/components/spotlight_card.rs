use super::pointer::use_relative_pointer;
use crate::fx::pointer::Spotlight;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpotlightCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Spotlight::BLUE)]
    pub spotlight: Spotlight,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Card with a soft light under the pointer.
#[function_component(SpotlightCard)]
pub fn spotlight_card(props: &SpotlightCardProps) -> Html {
    let card_ref = use_node_ref();
    let pointer = use_relative_pointer(card_ref.clone());

    let glow = match pointer.position {
        Some((x, y)) => format!("opacity: 1; background: {};", props.spotlight.gradient(x, y)),
        None => "opacity: 0;".to_string(),
    };
    let clickable = props.onclick.is_some();
    let onclick = props.onclick.clone().unwrap_or_default();

    html! {
        <div
            ref={card_ref}
            class={classes!("spotlight-card", clickable.then_some("cursor-pointer"), props.class.clone())}
            onmousemove={pointer.onmousemove}
            onmouseleave={pointer.onmouseleave}
            {onclick}
        >
            <div class="spotlight-glow" style={glow}></div>
            <div class="spotlight-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}
