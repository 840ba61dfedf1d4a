use dioxus::prelude::*;
use store::models::format_order_date;
use store::{format_rupees, Order};

use crate::views::feedback::OrderFeedback;
use crate::views::orders::OrderIdLine;
use crate::{use_store, Page};

/// Past orders, each with its own feedback form.
#[component]
pub fn OrderHistoryView(on_navigate: EventHandler<Page>) -> Element {
    let store = use_store();
    let signed_in = store().signed_in();

    // Only a token change refetches; cart and menu writes do not
    let token = use_memo(move || store().token.clone());
    let orders = use_resource(move || {
        let has_token = token().is_some();
        async move {
            if !has_token {
                return Ok(Vec::new());
            }
            let client = store.peek().client();
            client.user_orders().await.map_err(|e| {
                tracing::error!("Error fetching orders: {e}");
                e.user_message("Error fetching orders")
            })
        }
    });

    if !signed_in {
        return rsx! { div { class: "notice", "Please login to view your order history." } };
    }

    rsx! {
        div { class: "order-history",
            h2 { "Your Orders" }
            {match orders() {
                None => rsx! { div { class: "loading", "Loading your orders..." } },
                Some(Err(message)) => rsx! { div { class: "error-message", "{message}" } },
                Some(Ok(list)) if list.is_empty() => rsx! { div { "No orders found." } },
                Some(Ok(list)) => rsx! {
                    ul { class: "order-history-list",
                        for order in list {
                            HistoryEntry { key: "{order.id}", order: order.clone(), on_navigate }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn HistoryEntry(order: Order, on_navigate: EventHandler<Page>) -> Element {
    let placed_at = order
        .created_at
        .map(|at| format_order_date(&at.with_timezone(&chrono::Local)))
        .unwrap_or_default();
    let track_id = order.id.clone();

    rsx! {
        li { class: "order-history-entry",
            OrderIdLine { order_id: order.id.clone() }
            div { b { "Order Number: " } "{order.order_number}" }
            div { b { "Status: " } "{order.status.label()}" }
            div { b { "Total: " } "{format_rupees(order.total_amount)}" }
            div { b { "Date: " } "{placed_at}" }
            button {
                class: "secondary-btn",
                onclick: move |_| on_navigate.call(Page::Track(track_id.clone())),
                "Track Order"
            }
            OrderFeedback { order_id: order.id.clone() }
        }
    }
}
