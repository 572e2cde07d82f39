use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::ui::Button;
use crate::config;
use crate::content::{BRAND_NAME, NAV_LINKS};
use crate::motion::presence::{use_presence, Presence};
use crate::motion::transform::progress_bar_width;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scroll_progress: f64,
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scroll_progress, menu_open, on_toggle, on_close } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        height: 4px;
                        background: #3FA96B;
                        z-index: 50;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        background: rgba(244, 247, 245, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(160, 240, 209, 0.2);
                        z-index: 40;
                        animation: nav-drop 0.8s ease-out both;
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding-top: 1rem;
                        padding-bottom: 1rem;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        transition: transform 0.2s ease;
                    }
                    .nav-logo:hover {
                        transform: scale(1.05);
                    }
                    .logo-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: linear-gradient(135deg, #3FA96B, #A0F0D1);
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        transition: transform 0.2s ease;
                    }
                    .nav-link:hover {
                        transform: translateY(-2px);
                    }
                    .nav-link::after {
                        content: "";
                        position: absolute;
                        left: 0;
                        bottom: -2px;
                        width: 0;
                        height: 2px;
                        background: #3FA96B;
                        transition: width 0.3s ease;
                    }
                    .nav-link:hover::after {
                        width: 100%;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        transition: transform 0.1s ease;
                    }
                    .burger-menu:active {
                        transform: scale(0.95);
                    }
                    .mobile-menu {
                        overflow: hidden;
                        background: #F4F7F5;
                        border-top: 1px solid rgba(160, 240, 209, 0.2);
                        animation: menu-enter 0.3s ease-out both;
                    }
                    .mobile-menu.exiting {
                        animation: menu-exit 0.3s ease-in both;
                    }
                    .mobile-menu-inner {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding-top: 1rem;
                        padding-bottom: 1rem;
                    }
                    .mobile-link {
                        display: block;
                        padding: 0.5rem 0;
                        animation: link-slide 0.3s ease-out both;
                    }
                    .full-width {
                        width: 100%;
                    }
                    @keyframes nav-drop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    @keyframes menu-enter {
                        from { max-height: 0; opacity: 0; }
                        to { max-height: 24rem; opacity: 1; }
                    }
                    @keyframes menu-exit {
                        from { max-height: 24rem; opacity: 1; }
                        to { max-height: 0; opacity: 0; }
                    }
                    @keyframes link-slide {
                        from { transform: translateX(-20px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @media (max-width: 767px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (min-width: 768px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="scroll-progress" style={format!("width: {}%;", progress_bar_width(*scroll_progress))}></div>
            <nav class="top-nav">
                <div class="container nav-content">
                    <a href="#" class="nav-logo">
                        <span class="logo-mark"><IconView icon={Icon::Leaf} /></span>
                        <span>{BRAND_NAME}</span>
                    </a>

                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.anchor} href={link.href()} class="nav-link">{link.label}</a>
                        }) }
                        <Button>{"Get Started"}</Button>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} size={24} />
                    </button>
                </div>
                <MobileMenu open={*menu_open} on_select={on_close.clone()} />
            </nav>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct MobileMenuProps {
    open: bool,
    on_select: Callback<()>,
}

/// Collapsible link panel. Stays mounted while its exit animation plays.
#[function_component(MobileMenu)]
fn mobile_menu(props: &MobileMenuProps) -> Html {
    let presence = use_presence(props.open, config::MENU_EXIT_MS);

    if !presence.is_mounted() {
        return html! {};
    }

    let close_menu = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(()))
    };

    html! {
        <div class={classes!("mobile-menu", (presence == Presence::Exiting).then_some("exiting"))}>
            <div class="container mobile-menu-inner">
                { for NAV_LINKS.iter().map(|link| html! {
                    <a key={link.anchor} href={link.href()} class="mobile-link" onclick={close_menu.clone()}>
                        {link.label}
                    </a>
                }) }
                <Button class={classes!("full-width")}>{"Get Started"}</Button>
            </div>
        </div>
    }
}
