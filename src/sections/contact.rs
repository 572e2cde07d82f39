use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::reveal::StaggerItem;
use crate::components::section_header::SectionHeader;
use crate::content::{CONTACT_CHANNELS, CONTACT_IMAGE};
use crate::motion::variants::{SLIDE_IN_LEFT, SLIDE_IN_RIGHT};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="section contact">
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                    }
                    @media (min-width: 1024px) {
                        .contact-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .contact-form {
                        padding: 2rem;
                    }
                    .contact-form h3,
                    .contact-aside h3 {
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-form form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                    }
                    @media (min-width: 768px) {
                        .form-row { grid-template-columns: 1fr 1fr; }
                    }
                    .contact-aside p {
                        color: rgba(51, 56, 64, 0.8);
                        margin-bottom: 2rem;
                    }
                    .contact-aside img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        margin-bottom: 2rem;
                    }
                    .channels {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .channel {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .channel:hover {
                        transform: translateX(10px);
                        background: rgba(255, 255, 255, 0.5);
                    }
                    .channel-icon {
                        font-size: 1.5rem;
                    }
                    .channel-content {
                        color: #3FA96B;
                        font-weight: 500;
                        margin: 0;
                    }
                    .channel-note {
                        font-size: 0.875rem;
                        color: rgba(51, 56, 64, 0.6);
                        margin: 0;
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader
                    badge="Get In Touch"
                    title="Ready to Bloom?"
                    lead="Let's discuss your project and create a brand identity that helps your eco-tech startup flourish in the digital landscape."
                />
                <div class="contact-grid">
                    <StaggerItem variant={SLIDE_IN_LEFT} index={0}>
                        <ContactForm />
                    </StaggerItem>

                    <StaggerItem variant={SLIDE_IN_RIGHT} index={1} class={classes!("contact-aside")}>
                        <div>
                            <h3>{"Let's start a conversation"}</h3>
                            <p>
                                {"We're excited to learn about your eco-tech startup and discuss how we can help you create a brand that makes a lasting impact."}
                            </p>
                            <img src={CONTACT_IMAGE} alt="Office workspace" />
                        </div>
                        <div class="channels">
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <div key={channel.title} class="channel">
                                    <div class="channel-icon">{channel.icon}</div>
                                    <div>
                                        <h4>{channel.title}</h4>
                                        <p class="channel-content">{channel.content}</p>
                                        <p class="channel-note">{channel.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </StaggerItem>
                </div>
            </div>
        </section>
    }
}
