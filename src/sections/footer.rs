use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::reveal::Reveal;
use crate::components::ui::{Button, TextInput};
use crate::content::{BRAND_NAME, COPYRIGHT_YEAR, FOOTER_COMPANY, FOOTER_SERVICES, SOCIAL_NETWORKS, STUDIO_NAME};
use crate::motion::variants::{Easing, Pose, Transition, Variant, RISE_IN};

/// Plain fade used for the copyright line.
const FADE_IN_LATE: Variant = Variant {
    hidden: Pose { opacity: 0.0, ..Pose::REST },
    visible: Pose::REST,
    transition: Transition::new(0.4, Easing::Smooth),
};

fn link_column(title: &'static str, items: &'static [&'static str]) -> Html {
    html! {
        <div>
            <h4 class="footer-heading">{title}</h4>
            <ul class="footer-list">
                { for items.iter().map(|item| html! {
                    <li key={*item}><a href="#" class="footer-link">{*item}</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #333840;
                        color: #fff;
                        padding: 4rem 0;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .footer-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .footer-copy {
                        color: rgba(255, 255, 255, 0.8);
                        margin: 0 0 1.5rem;
                    }
                    .socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .social {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.1);
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .social:hover {
                        transform: scale(1.2) translateY(-2px);
                        background: #3FA96B;
                    }
                    .social-dot {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 0.25rem;
                        background: rgba(255, 255, 255, 0.6);
                    }
                    .footer-heading {
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .footer-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .footer-link {
                        display: inline-block;
                        transition: transform 0.2s ease, color 0.2s ease;
                    }
                    .footer-link:hover {
                        transform: translateX(5px);
                        color: #A0F0D1;
                    }
                    .newsletter {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        margin-top: 3rem;
                        padding-top: 2rem;
                        text-align: center;
                        color: rgba(255, 255, 255, 0.6);
                    }
                "#}
            </style>
            <div class="container">
                <Reveal variant={RISE_IN} class={classes!("footer-grid")}>
                    <div>
                        <div class="footer-brand">
                            <span class="logo-mark"><IconView icon={Icon::Leaf} /></span>
                            <span>{BRAND_NAME}</span>
                        </div>
                        <p class="footer-copy">
                            {"Creating beautiful, sustainable brand identities for eco-tech startups worldwide."}
                        </p>
                        <div class="socials">
                            { for SOCIAL_NETWORKS.iter().map(|name| html! {
                                <a key={*name} href="#" class="social">
                                    <span class="sr-only">{*name}</span>
                                    <div class="social-dot"></div>
                                </a>
                            }) }
                        </div>
                    </div>

                    { link_column("Services", FOOTER_SERVICES) }
                    { link_column("Company", FOOTER_COMPANY) }

                    <div>
                        <h4 class="footer-heading">{"Newsletter"}</h4>
                        <p class="footer-copy">{"Get design tips and eco-tech insights delivered to your inbox."}</p>
                        // Inert like the contact form: nothing is subscribed
                        <div class="newsletter">
                            <TextInput placeholder="Your email" class={classes!("on-dark")} />
                            <Button>
                                <IconView icon={Icon::ArrowRight} size={16} />
                            </Button>
                        </div>
                    </div>
                </Reveal>

                <Reveal variant={FADE_IN_LATE} delay={0.5} class={classes!("footer-bottom")}>
                    <p>{format!("© {} {}. All rights reserved. Made with 💚 for a sustainable future.", COPYRIGHT_YEAR, STUDIO_NAME)}</p>
                </Reveal>
            </div>
        </footer>
    }
}
