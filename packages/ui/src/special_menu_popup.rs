use dioxus::prelude::*;
use store::{format_rupees, FoodItem};

use crate::food_item_card::CartCounter;
use crate::icons::FaXmark;
use crate::{use_store, Icon};

/// Today's special menu, fetched each time the popup opens.
#[component]
pub fn SpecialMenuPopup(on_close: EventHandler<()>) -> Element {
    let store = use_store();
    let mut items = use_signal(Vec::<FoodItem>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        let client = store.peek().client();
        match client.todays_menu().await {
            Ok(menu) => items.set(menu),
            Err(e) => {
                tracing::error!("Error fetching special menu: {e}");
                items.set(Vec::new());
            }
        }
        loading.set(false);
    });

    let today = chrono::Local::now().format("%A, %B %-d, %Y").to_string();
    let base_url = store().base_url().to_string();

    rsx! {
        div { class: "special-menu-popup-overlay", onclick: move |_| on_close.call(()),
            div {
                class: "special-menu-popup",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div { class: "popup-header",
                    h2 { "Today's Special Menu" }
                    p { class: "date", "{today}" }
                    button {
                        class: "close-btn",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }

                if loading() {
                    div { class: "loading", "Loading today's special menu..." }
                } else if items().is_empty() {
                    div { class: "no-special-menu",
                        h3 { "No Special Items Today" }
                        p { "Check back later for today's special menu items!" }
                    }
                } else {
                    div { class: "special-menu-grid",
                        for item in items() {
                            div { key: "{item.id}", class: "special-menu-item",
                                div { class: "item-image",
                                    img { src: "{item.image_url(&base_url)}", alt: "{item.name}" }
                                    div { class: "special-badge", "Special" }
                                }
                                div { class: "item-details",
                                    h3 { "{item.name}" }
                                    p { class: "description", "{item.description}" }
                                    div { class: "item-meta",
                                        span { class: "price", "{format_rupees(item.price)}" }
                                        span { class: "category", "{item.category}" }
                                    }
                                    div { class: "item-actions",
                                        CartCounter { food_id: item.id.clone() }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
