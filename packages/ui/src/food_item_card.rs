use dioxus::prelude::*;
use store::{format_rupees, FoodItem};

use crate::icons::{FaMinus, FaPlus};
use crate::{use_cart, use_store, Icon};

/// Add button, or a `- n +` counter once the item is in the cart.
#[component]
pub fn CartCounter(food_id: String) -> Element {
    let store = use_store();
    let cart = use_cart();
    let quantity = store().cart.quantity(&food_id);

    let add_id = food_id.clone();
    if quantity == 0 {
        return rsx! {
            button {
                class: "add-to-cart",
                title: "Add to cart",
                onclick: move |_| cart.add(&add_id),
                Icon { icon: FaPlus, width: 14, height: 14 }
            }
        };
    }

    let remove_id = food_id.clone();
    rsx! {
        div { class: "food-item-counter",
            button {
                class: "counter-btn remove",
                title: "Remove from cart",
                onclick: move |_| cart.remove(&remove_id),
                Icon { icon: FaMinus, width: 12, height: 12 }
            }
            span { "{quantity}" }
            button {
                class: "counter-btn add",
                title: "Add to cart",
                onclick: move |_| cart.add(&add_id),
                Icon { icon: FaPlus, width: 12, height: 12 }
            }
        }
    }
}

#[component]
pub fn FoodItemCard(item: FoodItem) -> Element {
    let store = use_store();
    let image = item.image_url(store().base_url());

    rsx! {
        div { class: "food-item",
            div { class: "food-item-img-container",
                img { class: "food-item-image", src: "{image}", alt: "{item.name}" }
                CartCounter { food_id: item.id.clone() }
            }
            div { class: "food-item-info",
                div { class: "food-item-name-rating",
                    p { "{item.name}" }
                    span { class: "food-item-category", "{item.category}" }
                }
                p { class: "food-item-desc", "{item.description}" }
                p { class: "food-item-price", "{format_rupees(item.price)}" }
            }
        }
    }
}

/// Grid of menu cards under a heading.
#[component]
pub fn FoodDisplay(title: String, items: Vec<FoodItem>) -> Element {
    rsx! {
        div { class: "food-display", id: "food-display",
            h2 { "{title}" }
            div { class: "food-display-list",
                for item in items {
                    FoodItemCard { key: "{item.id}", item: item.clone() }
                }
            }
        }
    }
}
