use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::reveal::StaggerItem;
use crate::components::section_header::SectionHeader;
use crate::components::ui::{Badge, Card};
use crate::content::{Project, PORTFOLIO};
use crate::motion::variants::SCALE_IN;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    #[prop_or(PORTFOLIO)]
    pub projects: &'static [Project],
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    html! {
        <section id="portfolio" class="section portfolio">
            <style>
                {r#"
                    @media (min-width: 1024px) {
                        .portfolio .card-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .project-media {
                        position: relative;
                        overflow: hidden;
                    }
                    .project-media img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .project-media:hover img {
                        transform: scale(1.1);
                    }
                    .project-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: flex-end;
                        padding: 1.5rem;
                        color: #fff;
                        background: linear-gradient(to top, rgba(63, 169, 107, 0.8), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .project-media:hover .project-overlay {
                        opacity: 1;
                    }
                    .project-overlay h3 {
                        font-size: 1.25rem;
                    }
                    .project-body {
                        padding: 1.5rem;
                    }
                    .project-body p {
                        color: rgba(51, 56, 64, 0.8);
                    }
                    .project-body .more-link {
                        margin-top: 1rem;
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader
                    badge="Our Work"
                    title="Brands We've Helped Bloom"
                    lead="Discover how we've transformed eco-tech startups with stunning brand identities that drive growth and engagement."
                />
                <div class="card-grid">
                    { for props.projects.iter().enumerate().map(|(index, project)| html! {
                        <StaggerItem key={index} variant={SCALE_IN} {index}>
                            <Card>
                                <div class="project-media">
                                    <img src={project.image} alt={project.title} />
                                    <div class="project-overlay">
                                        <div>
                                            <Badge class={classes!("on-dark")}>{project.category}</Badge>
                                            <h3>{project.title}</h3>
                                        </div>
                                    </div>
                                </div>
                                <div class="project-body">
                                    <p>{project.description}</p>
                                    <div class="more-link">
                                        {"View Project"}
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

    const REPEATED: &[Project] = &[
        Project {
            title: "Verdant",
            category: "Solar",
            image: "https://example.com/a.jpg",
            description: "alpha",
        },
        Project {
            title: "Verdant",
            category: "Water",
            image: "https://example.com/b.jpg",
            description: "beta",
        },
        Project {
            title: "Canopy",
            category: "Wind",
            image: "https://example.com/c.jpg",
            description: "gamma",
        },
    ];

    fn overlay_titles(html: &str) -> Vec<String> {
        html.split("<h3>")
            .skip(1)
            .filter_map(|rest| rest.split("</h3>").next())
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_duplicate_titles_are_not_collapsed() {
        let html = yew::ServerRenderer::<Portfolio>::with_props(|| PortfolioProps { projects: REPEATED })
            .render()
            .await;

        assert_eq!(overlay_titles(&html), ["Verdant", "Verdant", "Canopy"]);
        assert_eq!(html.matches("class=\"project-overlay\"").count(), 3);
        let alpha = html.find("alpha").unwrap();
        let beta = html.find("beta").unwrap();
        let gamma = html.find("gamma").unwrap();
        assert!(alpha < beta && beta < gamma);
    }

    #[tokio::test]
    async fn test_default_portfolio_renders_six_projects() {
        let html = yew::ServerRenderer::<Portfolio>::with_props(|| PortfolioProps { projects: PORTFOLIO }).render().await;
        let expected: Vec<&str> = PORTFOLIO.iter().map(|p| p.title).collect();
        assert_eq!(overlay_titles(&html), expected);
    }
}
