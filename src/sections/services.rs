use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::reveal::StaggerItem;
use crate::components::section_header::SectionHeader;
use crate::components::ui::Card;
use crate::content::{Service, SERVICES};
use crate::motion::variants::SCALE_IN;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    #[prop_or(SERVICES)]
    pub services: &'static [Service],
}

/// One card per service, in the order given.
#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="section services">
            <style>
                {r#"
                    .services {
                        background: rgba(255, 255, 255, 0.5);
                    }
                    @media (min-width: 1024px) {
                        .services .card-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .service-body {
                        padding: 2rem;
                        text-align: center;
                    }
                    .service-tile {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        transition: transform 0.2s ease;
                    }
                    .service-tile:hover {
                        transform: scale(1.1) rotate(5deg);
                    }
                    .service-body h3 {
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                    }
                    .service-body p {
                        color: rgba(51, 56, 64, 0.8);
                    }
                    .more-link {
                        margin-top: 1.5rem;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #3FA96B;
                        font-weight: 500;
                        transition: transform 0.2s ease;
                    }
                    .more-link:hover {
                        transform: translateX(5px);
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader
                    badge="Our Services"
                    title="Complete Brand Solutions for Eco-Tech Startups"
                    lead="From concept to launch, we provide comprehensive branding services that help your green business thrive in the digital world."
                />
                <div class="card-grid">
                    { for props.services.iter().enumerate().map(|(index, service)| html! {
                        <StaggerItem key={index} variant={SCALE_IN} {index}>
                            <Card>
                                <div class="service-body">
                                    <div class="service-tile" style={service.color.css()}>
                                        <IconView icon={service.icon} size={32} />
                                    </div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <div class="more-link">
                                        {"Learn More"}
                                        <IconView icon={Icon::ArrowRight} size={16} />
                                    </div>
                                </div>
                            </Card>
                        </StaggerItem>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Gradient, GREEN, MINT};

    const REPEATED: &[Service] = &[
        Service {
            title: "Branding",
            description: "first",
            icon: Icon::Palette,
            color: Gradient::new(GREEN, MINT),
        },
        Service {
            title: "Motion",
            description: "second",
            icon: Icon::Globe,
            color: Gradient::new(MINT, GREEN),
        },
        Service {
            title: "Branding",
            description: "third",
            icon: Icon::Package,
            color: Gradient::new(GREEN, MINT),
        },
    ];

    fn card_titles(html: &str) -> Vec<String> {
        html.split("<h3>")
            .skip(1)
            .filter_map(|rest| rest.split("</h3>").next())
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_one_card_per_service_in_order() {
        let html = yew::ServerRenderer::<Services>::with_props(|| ServicesProps { services: REPEATED })
            .render()
            .await;

        assert_eq!(card_titles(&html), ["Branding", "Motion", "Branding"]);
        assert_eq!(html.matches("class=\"service-body\"").count(), 3);
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        let third = html.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn test_default_services_render() {
        let html = yew::ServerRenderer::<Services>::with_props(|| ServicesProps { services: SERVICES }).render().await;
        let expected: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(card_titles(&html), expected);
        assert!(html.contains("id=\"services\""));
    }

    #[tokio::test]
    async fn test_section_leaves_base_grid_to_global_styles() {
        let html = yew::ServerRenderer::<Services>::with_props(|| ServicesProps { services: SERVICES }).render().await;
        assert!(html.contains("class=\"card-grid\""));
        assert!(!html.contains("grid-template-columns: 1fr;"));
    }
}
