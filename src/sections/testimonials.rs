use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::reveal::StaggerItem;
use crate::components::section_header::SectionHeader;
use crate::components::ui::Card;
use crate::content::{Testimonial, AVATAR_PLACEHOLDER, TESTIMONIALS};
use crate::motion::variants::SCALE_IN;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    #[prop_or(TESTIMONIALS)]
    pub testimonials: &'static [Testimonial],
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section class="section testimonials">
            <style>
                {r#"
                    .testimonials {
                        background: linear-gradient(90deg, rgba(63, 169, 107, 0.05), rgba(160, 240, 209, 0.05));
                    }
                    @media (min-width: 768px) {
                        .testimonials .card-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .testimonial-body {
                        padding: 2rem;
                    }
                    .rating {
                        display: flex;
                        margin-bottom: 1rem;
                        color: #FACC15;
                    }
                    .quote {
                        font-style: italic;
                        margin-bottom: 1.5rem;
                        color: rgba(51, 56, 64, 0.8);
                    }
                    .author {
                        display: flex;
                        align-items: center;
                    }
                    .author img {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        object-fit: cover;
                        margin-right: 1rem;
                    }
                    .author p {
                        margin: 0;
                        font-size: 0.875rem;
                        color: rgba(51, 56, 64, 0.6);
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader badge="Client Love" title="What Our Clients Say" />
                <div class="card-grid">
                    { for props.testimonials.iter().enumerate().map(|(index, testimonial)| {
                        let avatar = if testimonial.avatar.is_empty() { AVATAR_PLACEHOLDER } else { testimonial.avatar };
                        html! {
                            <StaggerItem key={index} variant={SCALE_IN} {index}>
                                <Card>
                                    <div class="testimonial-body">
                                        <div class="rating">
                                            { for (0..testimonial.rating).map(|i| html! {
                                                <IconView key={i} icon={Icon::Star} filled={true} />
                                            }) }
                                        </div>
                                        <p class="quote">{format!("\"{}\"", testimonial.content)}</p>
                                        <div class="author">
                                            <img src={avatar} alt={testimonial.name} />
                                            <div>
                                                <h4>{testimonial.name}</h4>
                                                <p>{testimonial.role}</p>
                                            </div>
                                        </div>
                                    </div>
                                </Card>
                            </StaggerItem>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
