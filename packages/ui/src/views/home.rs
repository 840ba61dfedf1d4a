use dioxus::prelude::*;
use store::search::{categories, SearchFilter, ALL_CATEGORIES};

use crate::{use_store, FoodDisplay, SpecialMenuPopup};

/// Landing page: hero header, category strip and the menu grid.
#[component]
pub fn HomeView() -> Element {
    let store = use_store();
    let mut category = use_signal(|| ALL_CATEGORIES.to_string());
    let mut show_special = use_signal(|| false);

    let menu = store().menu.clone();
    let items = SearchFilter::new("", category()).filter(&menu);

    rsx! {
        div { class: "header",
            button { class: "special-menu-icon", onclick: move |_| show_special.set(true),
                span { class: "special-menu-label", "Today's Special" }
            }
            div { class: "header-contents",
                h2 { "Order your favourite food here" }
                p {
                    "Choose from a diverse menu featuring a delectable array of dishes crafted "
                    "with the finest ingredients and culinary expertise."
                }
            }
        }

        div { class: "explore-menu", id: "explore-menu",
            h1 { "Explore our menu" }
            div { class: "explore-menu-list",
                for name in categories(&menu) {
                    button {
                        key: "{name}",
                        class: if name == category() { "explore-menu-list-item active" } else { "explore-menu-list-item" },
                        onclick: {
                            let name = name.clone();
                            move |_| {
                                // Clicking the selected category resets the filter
                                if category() == name {
                                    category.set(ALL_CATEGORIES.to_string());
                                } else {
                                    category.set(name.clone());
                                }
                            }
                        },
                        "{name}"
                    }
                }
            }
            hr {}
        }

        if store().loading && menu.is_empty() {
            div { class: "loading", "Loading menu..." }
        } else {
            FoodDisplay { title: "Top dishes near you", items }
        }

        if show_special() {
            SpecialMenuPopup { on_close: move |_| show_special.set(false) }
        }
    }
}
