use dioxus::prelude::*;
use store::format_rupees;

/// `order_number` is left out of the message while empty.
#[component]
pub fn PaymentSuccess(amount: f64, order_number: String, on_continue: EventHandler<()>) -> Element {
    rsx! {
        div { class: "payment-success-container",
            h2 { "Payment Successful!" }
            p { class: "success-message",
                "Your payment of {format_rupees(amount)} has been processed successfully."
            }
            if !order_number.is_empty() {
                div { class: "order-details",
                    p { strong { "Order Number: " } "{order_number}" }
                }
            }
            p { class: "confirmation-message", "Thank you for your order!" }
            button { class: "continue-btn", onclick: move |_| on_continue.call(()), "Continue Shopping" }
        }
    }
}
