use log::info;
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::ui::{Button, Card, TextArea, TextInput};

/// What the visitor has typed into the contact form so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub budget: String,
    pub project: String,
}

impl ContactDraft {
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.budget, &self.project]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No delivery channel exists; the draft stays in the form.
    NotWired,
}

/// The form has no backend. Submitting records the attempt and leaves the
/// draft untouched; nothing is validated or sent.
pub fn submit_contact(draft: &ContactDraft) -> SubmitOutcome {
    info!(
        "contact form submitted ({}), no delivery configured",
        if draft.is_empty() { "empty" } else { "filled" }
    );
    SubmitOutcome::NotWired
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Budget,
    Project,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);

    let update = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            match field {
                Field::Name => next.name = value,
                Field::Email => next.email = value,
                Field::Budget => next.budget = value,
                Field::Project => next.project = value,
            }
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            // keep the browser from posting or navigating
            e.prevent_default();
            submit_contact(&draft);
        })
    };

    html! {
        <Card>
            <div class="contact-form">
                <h3>{"Send us a message"}</h3>
                <form {onsubmit}>
                    <div class="form-row">
                        <TextInput
                            placeholder="Your Name"
                            value={draft.name.clone()}
                            oninput={update(Field::Name)}
                        />
                        <TextInput
                            placeholder="Your Email"
                            input_type="email"
                            value={draft.email.clone()}
                            oninput={update(Field::Email)}
                        />
                    </div>
                    <TextInput
                        placeholder="Project Budget"
                        value={draft.budget.clone()}
                        oninput={update(Field::Budget)}
                    />
                    <TextArea
                        placeholder="Tell us about your project..."
                        rows={5}
                        value={draft.project.clone()}
                        oninput={update(Field::Project)}
                    />
                    <Button kind="submit" class={classes!("full-width")}>
                        {"Send Message"}
                        <IconView icon={Icon::ArrowRight} />
                    </Button>
                </form>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_is_a_noop() {
        let draft = ContactDraft::default();
        assert!(draft.is_empty());
        assert_eq!(submit_contact(&draft), SubmitOutcome::NotWired);
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn test_filled_submission_keeps_draft() {
        let draft = ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            budget: "10k".to_string(),
            project: "Rebrand our solar app".to_string(),
        };
        let before = draft.clone();
        assert!(!draft.is_empty());
        assert_eq!(submit_contact(&draft), SubmitOutcome::NotWired);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let draft = ContactDraft {
            name: "   ".to_string(),
            ..ContactDraft::default()
        };
        assert!(draft.is_empty());
    }
}
