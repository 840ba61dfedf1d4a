use dioxus::prelude::*;
use store::FeedbackForm;

use crate::icons::FaStar;
use crate::{use_store, Icon};

#[derive(Clone, Debug, PartialEq)]
enum Outcome {
    Sent,
    Failed(String),
}

/// General feedback about the canteen.
#[component]
pub fn FeedbackView() -> Element {
    let store = use_store();
    let mut form = use_signal(FeedbackForm::default);
    let mut outcome = use_signal(|| Option::<Outcome>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        outcome.set(None);
        let request = match form().to_request() {
            Ok(request) => request,
            Err(e) => {
                outcome.set(Some(Outcome::Failed(e.to_string())));
                return;
            }
        };
        let client = store.peek().client();
        spawn(async move {
            match client.submit_feedback(&request).await {
                Ok(_) => {
                    form.set(FeedbackForm::default());
                    outcome.set(Some(Outcome::Sent));
                }
                Err(e) => {
                    tracing::warn!("Feedback submission failed: {e}");
                    outcome.set(Some(Outcome::Failed(e.user_message("Error submitting feedback"))));
                }
            }
        });
    };

    rsx! {
        div { class: "feedback-container",
            h3 { "Send us your Feedback" }
            form { onsubmit: submit,
                textarea {
                    placeholder: "Your feedback...",
                    value: "{form().feedback}",
                    oninput: move |evt| form.write().feedback = evt.value(),
                }
                button { r#type: "submit", class: "primary-btn", "Submit" }
            }
            {outcome_message(outcome())}
        }
    }
}

/// Star rating and comment for one order.
#[component]
pub fn OrderFeedback(order_id: String) -> Element {
    let store = use_store();
    let mut form = use_signal(|| FeedbackForm::for_order(order_id.clone()));
    let mut outcome = use_signal(|| Option::<Outcome>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        outcome.set(None);
        let request = match form().to_request() {
            Ok(request) => request,
            Err(e) => {
                outcome.set(Some(Outcome::Failed(e.to_string())));
                return;
            }
        };
        let client = store.peek().client();
        spawn(async move {
            match client.submit_feedback(&request).await {
                Ok(_) => {
                    let mut current = form.write();
                    current.feedback.clear();
                    current.rating = 0;
                    drop(current);
                    outcome.set(Some(Outcome::Sent));
                }
                Err(e) => {
                    tracing::warn!("Order feedback submission failed: {e}");
                    outcome.set(Some(Outcome::Failed(e.user_message("Error submitting feedback"))));
                }
            }
        });
    };

    let rating = form().rating;

    rsx! {
        div { class: "order-feedback-container",
            form { onsubmit: submit,
                div { class: "order-feedback-stars",
                    for star in 1..=5u8 {
                        button {
                            key: "{star}",
                            r#type: "button",
                            class: if star <= rating { "star filled" } else { "star" },
                            aria_label: "Rate {star} of 5",
                            onclick: move |_| form.write().rating = star,
                            Icon { icon: FaStar, width: 16, height: 16 }
                        }
                    }
                }
                textarea {
                    placeholder: "Write feedback for this order...",
                    value: "{form().feedback}",
                    oninput: move |evt| form.write().feedback = evt.value(),
                }
                button { r#type: "submit", class: "secondary-btn", "Submit Feedback" }
            }
            {outcome_message(outcome())}
        }
    }
}

fn outcome_message(outcome: Option<Outcome>) -> Element {
    match outcome {
        Some(Outcome::Sent) => rsx! { div { class: "feedback-success", "Thank you for your feedback!" } },
        Some(Outcome::Failed(message)) => rsx! { div { class: "feedback-error", "{message}" } },
        None => rsx! {},
    }
}
