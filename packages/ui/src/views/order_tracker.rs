use std::time::Duration;

use dioxus::prelude::*;
use store::models::format_clock;
use store::tracker::{stage_done, walking_eta_minutes, STAGES};
use store::{Order, OrderStatus, PollFailure};

use crate::timer::sleep;
use crate::{use_config, use_geolocation, use_store};

/// Live view of one order. The platform keys this component on the order
/// id so a new id restarts polling.
#[component]
pub fn OrderTrackerView(order_id: String) -> Element {
    let config = use_config();
    let store = use_store();
    let geo = use_geolocation();
    let mut order = use_signal(|| Option::<Order>::None);
    let mut failure = use_signal(|| Option::<PollFailure>::None);

    let interval = Duration::from_millis(config.poll_interval_ms());
    let polled_id = order_id.clone();
    use_hook(move || {
        spawn(async move {
            loop {
                let client = store.peek().client();
                match client.get_order(&polled_id).await {
                    Ok(fresh) => {
                        let terminal = matches!(fresh.status, OrderStatus::Delivered | OrderStatus::Cancelled);
                        order.set(Some(fresh));
                        failure.set(None);
                        if terminal {
                            tracing::info!("Order {polled_id} reached a final state, polling stopped");
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Order status poll failed: {e}");
                        failure.set(Some(PollFailure::from(&e)));
                    }
                }
                sleep(interval).await;
            }
        })
    });

    let status = order().map(|o| o.status).unwrap_or_default();
    let progress = status.progress();
    let canteen = config.canteen_location();
    let position = geo().position;
    let eta = position.and_then(|here| walking_eta_minutes(here, canteen, config.tracker.walking_speed_kmh));

    rsx! {
        div { class: "tracker-wrap",
            h2 { "Track Your Order" }

            if let Some(current) = order() {
                div { class: "info",
                    div { b { "Order: " } "{current.order_number}" }
                    div {
                        b { "Status: " }
                        span { class: "status-badge", style: "background: {status.color()}", "{status.label()}" }
                    }
                    if let Some(token) = current.token_number.clone() {
                        div { b { "Pickup Token: " } "{token}" }
                    }
                    if let Some(ready_at) = current.estimated_delivery_time {
                        div { b { "Est. Ready: " } "{format_clock(&ready_at.with_timezone(&chrono::Local))}" }
                    }
                }
            } else if failure().is_none() {
                p { class: "loading", "Fetching order {order_id}..." }
            }

            div { class: "progress",
                div { class: "bar", style: "width: {progress}%" }
            }
            div { class: "stages",
                for stage in STAGES {
                    span {
                        key: "{stage.as_str()}",
                        class: if stage_done(progress, stage) { "done" } else { "" },
                        "{stage.label()}"
                    }
                }
            }
            if status == OrderStatus::Cancelled {
                p { class: "error", "This order was cancelled." }
            }

            div { class: "location",
                h3 { "Pickup Directions" }
                if let Some(minutes) = eta {
                    div { b { "Walking ETA: " } "~{minutes} min" }
                }
                if let Some(here) = position {
                    div { class: "coords",
                        div { b { "Your location: " } "{here.display()}" }
                        div { b { "Canteen: " } "{canteen.display()}" }
                    }
                }
                if let Some(message) = geo().error {
                    div { class: "hint", "{message}" }
                }
                if let Some(problem) = failure() {
                    div { class: "error", "{problem.message()}" }
                }
            }
        }
    }
}
