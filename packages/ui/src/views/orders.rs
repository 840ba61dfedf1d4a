//! Order cards shared by the profile page and the order history.

use dioxus::prelude::*;
use store::models::format_order_date;
use store::{format_rupees, Order};

use crate::Page;

/// Put `text` on the system clipboard through the webview.
pub(crate) fn copy_to_clipboard(text: &str) {
    match serde_json::to_string(text) {
        Ok(literal) => {
            document::eval(&format!("navigator.clipboard.writeText({literal});"));
        }
        Err(e) => tracing::warn!("Could not copy to clipboard: {e}"),
    }
}

#[component]
pub fn OrderIdLine(order_id: String) -> Element {
    let copied_id = order_id.clone();
    rsx! {
        div { class: "order-id",
            b { "Order ID: " }
            code { "{order_id}" }
            button { class: "copy-btn", onclick: move |_| copy_to_clipboard(&copied_id), "Copy" }
        }
    }
}

/// Full card with item pictures, used on the profile page.
#[component]
pub fn OrderCard(order: Order, base_url: String, on_navigate: EventHandler<Page>) -> Element {
    let status = order.status;
    let placed_at = order
        .created_at
        .map(|at| format_order_date(&at.with_timezone(&chrono::Local)))
        .unwrap_or_default();
    let track_id = order.id.clone();

    rsx! {
        div { class: "order-card",
            div { class: "order-header",
                strong { "Order #{order.order_number}" }
                div { class: "order-status", style: "background-color: {status.color()}", "{status.label()}" }
            }
            OrderIdLine { order_id: order.id.clone() }
            div { class: "order-items",
                for (index, item) in order.items.iter().enumerate() {
                    div { key: "{index}", class: "order-item",
                        if let Some(image) = item.image.as_deref() {
                            img { src: "{base_url}/images/{image}", alt: "{item.name}" }
                        }
                        div { class: "item-details",
                            h4 { "{item.name}" }
                            p { "Quantity: {item.quantity}" }
                            p { "{format_rupees(item.price)}" }
                        }
                    }
                }
            }
            div { class: "order-footer",
                strong { "Total: {format_rupees(order.total_amount)}" }
                span { class: "order-date", "{placed_at}" }
            }
            button {
                class: "secondary-btn",
                onclick: move |_| on_navigate.call(Page::Track(track_id.clone())),
                "Track Order"
            }
        }
    }
}
