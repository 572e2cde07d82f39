use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::config;
use crate::content::BRAND_NAME;
use crate::motion::orbit::{use_loop_clock, Orbit};
use crate::motion::transform::{hero_offset_y, hero_opacity};
use crate::state::UiHandle;

#[derive(Properties, PartialEq)]
struct OrbitShapeProps {
    orbit: Orbit,
    class: &'static str,
}

/// Decorative blurred disc, looping for as long as it is mounted.
#[function_component(OrbitShape)]
fn orbit_shape(props: &OrbitShapeProps) -> Html {
    let elapsed = use_loop_clock(config::LOOP_TICK_MS);
    let pose = props.orbit.pose_at(elapsed);

    html! {
        <div class={classes!("orbit-shape", props.class)} style={pose.to_css()}></div>
    }
}

/// Static hero rules. Has no props, so it renders once while `Hero`
/// re-renders on every scroll update.
#[function_component(HeroStyles)]
fn hero_styles() -> Html {
    html! {
        <style>
            {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding-top: 5rem;
                    overflow: hidden;
                }
                .orbit-shape {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                }
                .orbit-primary {
                    top: 25%;
                    left: 25%;
                    width: 16rem;
                    height: 16rem;
                    background: linear-gradient(90deg, rgba(63, 169, 107, 0.1), rgba(160, 240, 209, 0.1));
                }
                .orbit-secondary {
                    bottom: 25%;
                    right: 25%;
                    width: 24rem;
                    height: 24rem;
                    background: linear-gradient(90deg, rgba(160, 240, 209, 0.1), rgba(63, 169, 107, 0.1));
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(160, 240, 209, 0.2);
                    color: #3FA96B;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 2rem;
                    animation: hero-pop 1s ease-out 0.2s both;
                }
                .hero-badge span {
                    color: #333840;
                }
                .hero-title {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                    animation: hero-rise-50 1s ease-out 0.4s both;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #3FA96B, #A0F0D1);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-title-tail {
                    animation: hero-fade 0.4s ease-out 0.8s both;
                }
                .hero-subtitle {
                    font-size: clamp(1.25rem, 3vw, 1.5rem);
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                    color: rgba(51, 56, 64, 0.8);
                    animation: hero-rise-30 0.8s ease-out 0.6s both;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    animation: hero-rise-30 0.8s ease-out 0.8s both;
                }
                .scroll-hint {
                    margin-top: 4rem;
                    color: #3FA96B;
                    animation: hero-fade 0.4s ease-out 1.2s both;
                }
                .scroll-hint .icon {
                    animation: hint-bob 2s ease-in-out infinite;
                }
                @keyframes hero-pop {
                    from { transform: scale(0); }
                    to { transform: scale(1); }
                }
                @keyframes hero-rise-50 {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes hero-rise-30 {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes hero-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes hint-bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }
            "#}
        </style>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let progress = use_context::<UiHandle>()
        .map(|ui| ui.scroll_progress)
        .unwrap_or(0.0);

    let parallax = format!(
        "transform: translateY({}px); opacity: {};",
        hero_offset_y(progress),
        hero_opacity(progress)
    );

    html! {
        <section class="hero">
            <HeroStyles />
            <div class="hero-background">
                <OrbitShape orbit={Orbit::PRIMARY} class="orbit-primary" />
                <OrbitShape orbit={Orbit::SECONDARY} class="orbit-secondary" />
            </div>

            <div class="container hero-content" style={parallax}>
                <div class="hero-badge">
                    <IconView icon={Icon::Zap} size={16} />
                    <span>{"Eco-Tech Branding Experts"}</span>
                </div>

                <h1 class="hero-title">
                    <span class="gradient-text">{BRAND_NAME}</span>
                    <br />
                    <span class="hero-title-tail">{"Studio"}</span>
                </h1>

                <p class="hero-subtitle">
                    {"We design sleek, modern brand identities for eco-tech startups. From logos to websites, we help green businesses bloom online."}
                </p>

                <div class="hero-actions">
                    <Button size={ButtonSize::Large}>
                        {"Start Your Project"}
                        <IconView icon={Icon::ArrowRight} />
                    </Button>
                    <Button variant={ButtonVariant::Outline} size={ButtonSize::Large}>
                        <IconView icon={Icon::Play} />
                        {"Watch Our Story"}
                    </Button>
                </div>

                <div class="scroll-hint">
                    <IconView icon={Icon::ChevronDown} size={32} />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hero_renders_static_rules_once_and_rests_without_state() {
        let html = yew::ServerRenderer::<Hero>::new().render().await;
        assert_eq!(html.matches("@keyframes hint-bob").count(), 1);
        assert!(html.contains("transform: translateY(0px); opacity: 1;"));
        assert_eq!(html.matches("class=\"orbit-shape").count(), 2);
    }
}
