use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::ui::Badge;
use crate::motion::variants::RISE_IN;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub badge: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub lead: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <Reveal variant={RISE_IN} class={classes!("section-header")}>
            <Badge>{props.badge.clone()}</Badge>
            <h2 class="section-title">{props.title.clone()}</h2>
            if let Some(lead) = &props.lead {
                <p class="section-lead">{lead.clone()}</p>
            }
        </Reveal>
    }
}
