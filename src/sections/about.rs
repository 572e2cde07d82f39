use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::reveal::{Reveal, StaggerItem};
use crate::components::ui::Badge;
use crate::content::{ABOUT_HIGHLIGHTS, ABOUT_IMAGE, STUDIO_NAME};
use crate::motion::variants::{Stagger, FADE_IN_UP, SLIDE_IN_LEFT, SLIDE_IN_RIGHT};

#[function_component(About)]
pub fn about() -> Html {
    let stagger = Stagger::default();

    html! {
        <section id="about" class="section about">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .about-copy p {
                        font-size: 1.125rem;
                        margin-bottom: 1.5rem;
                        color: rgba(51, 56, 64, 0.8);
                    }
                    .about-highlights {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .highlight {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .highlight .icon {
                        color: #3FA96B;
                    }
                    .about-visual {
                        position: relative;
                        transition: transform 0.3s ease;
                    }
                    .about-visual:hover {
                        transform: scale(1.05) perspective(800px) rotateY(5deg);
                    }
                    .about-visual img {
                        width: 100%;
                        height: 500px;
                        object-fit: cover;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .leaf-badge {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: linear-gradient(90deg, #3FA96B, #A0F0D1);
                        animation: leaf-spin 20s linear infinite;
                    }
                    @keyframes leaf-spin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>
            <div class="container about-grid">
                <StaggerItem variant={SLIDE_IN_LEFT} index={0} class={classes!("about-copy")}>
                    <Badge>{"About ByteBloom"}</Badge>
                    <h2 class="section-title">{"Growing Green Brands in the Digital Ecosystem"}</h2>
                    <p>
                        {format!("At {}, we believe that sustainable businesses deserve exceptional design. \
                            We specialize in creating modern, tech-forward brand identities that help \
                            eco-conscious startups stand out in the digital landscape.", STUDIO_NAME)}
                    </p>
                    <div class="about-highlights">
                        { for ABOUT_HIGHLIGHTS.iter().enumerate().map(|(index, item)| html! {
                            <Reveal key={*item} variant={FADE_IN_UP} delay={stagger.delay_for(index)}>
                                <div class="highlight">
                                    <IconView icon={Icon::CheckCircle} />
                                    <span>{*item}</span>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </StaggerItem>

                <StaggerItem variant={SLIDE_IN_RIGHT} index={1}>
                    <div class="about-visual">
                        <img src={ABOUT_IMAGE} alt={format!("{} Team", STUDIO_NAME)} />
                        <div class="leaf-badge">
                            <IconView icon={Icon::Leaf} size={32} />
                        </div>
                    </div>
                </StaggerItem>
            </div>
        </section>
    }
}
