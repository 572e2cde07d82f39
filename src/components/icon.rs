use yew::prelude::*;

/// Line icons, drawn on a 24x24 grid with the current text colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Leaf,
    Zap,
    Palette,
    Globe,
    Package,
    Share,
    ArrowRight,
    Star,
    CheckCircle,
    Menu,
    Close,
    ChevronDown,
    Play,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Leaf => "leaf",
            Icon::Zap => "zap",
            Icon::Palette => "palette",
            Icon::Globe => "globe",
            Icon::Package => "package",
            Icon::Share => "share-2",
            Icon::ArrowRight => "arrow-right",
            Icon::Star => "star",
            Icon::CheckCircle => "check-circle",
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::ChevronDown => "chevron-down",
            Icon::Play => "play",
        }
    }

    fn paths(&self) -> Html {
        match self {
            Icon::Leaf => html! {
                <>
                    <path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z" />
                    <path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12" />
                </>
            },
            Icon::Zap => html! { <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" /> },
            Icon::Palette => html! {
                <>
                    <circle cx="13.5" cy="6.5" r="0.5" />
                    <circle cx="17.5" cy="10.5" r="0.5" />
                    <circle cx="8.5" cy="7.5" r="0.5" />
                    <circle cx="6.5" cy="12.5" r="0.5" />
                    <path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.65-.75 1.65-1.69 0-.44-.18-.84-.44-1.13-.29-.29-.44-.65-.44-1.13a1.64 1.64 0 0 1 1.67-1.67h2c3.05 0 5.55-2.5 5.55-5.55C21.97 6.01 17.46 2 12 2z" />
                </>
            },
            Icon::Globe => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" />
                    <path d="M2 12h20" />
                </>
            },
            Icon::Package => html! {
                <>
                    <path d="m7.5 4.27 9 5.15" />
                    <path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z" />
                    <path d="m3.3 7 8.7 5 8.7-5" />
                    <path d="M12 22V12" />
                </>
            },
            Icon::Share => html! {
                <>
                    <circle cx="18" cy="5" r="3" />
                    <circle cx="6" cy="12" r="3" />
                    <circle cx="18" cy="19" r="3" />
                    <line x1="8.59" y1="13.51" x2="15.42" y2="17.49" />
                    <line x1="15.41" y1="6.51" x2="8.59" y2="10.49" />
                </>
            },
            Icon::ArrowRight => html! {
                <>
                    <path d="M5 12h14" />
                    <path d="m12 5 7 7-7 7" />
                </>
            },
            Icon::Star => html! {
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            },
            Icon::CheckCircle => html! {
                <>
                    <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                    <polyline points="22 4 12 14.01 9 11.01" />
                </>
            },
            Icon::Menu => html! {
                <>
                    <line x1="4" y1="6" x2="20" y2="6" />
                    <line x1="4" y1="12" x2="20" y2="12" />
                    <line x1="4" y1="18" x2="20" y2="18" />
                </>
            },
            Icon::Close => html! {
                <>
                    <path d="M18 6 6 18" />
                    <path d="m6 6 12 12" />
                </>
            },
            Icon::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
            Icon::Play => html! { <polygon points="6 3 20 12 6 21 6 3" /> },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    /// Fill the shape as well as stroking it (rating stars).
    #[prop_or(false)]
    pub filled: bool,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={classes!("icon", format!("icon-{}", props.icon.name()), props.class.clone())}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { props.icon.paths() }
        </svg>
    }
}
