use yew::prelude::*;

use crate::motion::variants::{Stagger, Variant};
use crate::motion::viewport::use_viewport_entry;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub variant: Variant,
    /// Extra delay before the transition starts, in seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Holds its children in the variant's hidden pose until the wrapper first
/// scrolls into view, then transitions them to the visible pose for good.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_viewport_entry(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("is-visible"), props.class.clone())}
            style={props.variant.style(visible, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerItemProps {
    pub variant: Variant,
    pub index: usize,
    #[prop_or_default]
    pub stagger: Stagger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// One child of a staggered group: a `Reveal` delayed by its position.
#[function_component(StaggerItem)]
pub fn stagger_item(props: &StaggerItemProps) -> Html {
    html! {
        <Reveal
            variant={props.variant}
            delay={props.stagger.delay_for(props.index)}
            class={props.class.clone()}
        >
            { for props.children.iter() }
        </Reveal>
    }
}
