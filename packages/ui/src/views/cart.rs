use dioxus::prelude::*;
use store::format_rupees;

use crate::icons::FaTrashCan;
use crate::{use_cart, use_store, Icon, Page};

#[component]
pub fn CartView(on_navigate: EventHandler<Page>) -> Element {
    let store = use_store();
    let cart = use_cart();
    let mut notice = use_signal(|| Option::<&'static str>::None);
    let mut promo = use_signal(String::new);

    let snapshot = store();
    if snapshot.loading {
        return rsx! { div { class: "cart-loading", "Loading cart..." } };
    }
    if snapshot.menu.is_empty() {
        return rsx! { div { class: "cart-loading", "Loading food items..." } };
    }

    let lines = snapshot.cart.lines(&snapshot.menu);
    let total = snapshot.cart_total();
    if lines.is_empty() || total == 0.0 {
        return rsx! {
            div { class: "cart-empty",
                p { "Your cart is empty. Please add items to proceed." }
                button { class: "primary-btn", onclick: move |_| on_navigate.call(Page::Home), "Browse the menu" }
            }
        };
    }

    let base_url = snapshot.base_url().to_string();
    let signed_in = snapshot.signed_in();

    rsx! {
        div { class: "cart",
            div { class: "cart-items",
                div { class: "cart-items-title cart-header",
                    p { "Items" }
                    p { "Title" }
                    p { "Price" }
                    p { "Quantity" }
                    p { "Total" }
                    p { "Remove" }
                }
                hr {}
                for line in lines {
                    div { key: "{line.food.id}",
                        div { class: "cart-items-title cart-items-item",
                            img { src: "{line.food.image_url(&base_url)}", alt: "{line.food.name}" }
                            p { "{line.food.name}" }
                            p { "{format_rupees(line.food.price)}" }
                            p { "{line.quantity}" }
                            p { "{format_rupees(line.subtotal)}" }
                            button {
                                class: "remove-btn",
                                title: "Remove one",
                                onclick: {
                                    let id = line.food.id.clone();
                                    move |_| cart.remove(&id)
                                },
                                Icon { icon: FaTrashCan, width: 16, height: 16 }
                            }
                        }
                        hr {}
                    }
                }
            }

            div { class: "cart-bottom",
                div { class: "cart-total",
                    h2 { "Cart Totals" }
                    div { class: "cart-total-details",
                        p { "Subtotal" }
                        p { "{format_rupees(total)}" }
                    }
                    hr {}
                    div { class: "cart-total-details",
                        b { "Total" }
                        b { "{format_rupees(total)}" }
                    }
                    if let Some(message) = notice() {
                        p { class: "error-message", "{message}" }
                    }
                    button {
                        class: "primary-btn",
                        onclick: move |_| {
                            if signed_in {
                                on_navigate.call(Page::PlaceOrder);
                            } else {
                                notice.set(Some("Please log in to proceed to checkout"));
                            }
                        },
                        "PROCEED TO CHECKOUT"
                    }
                }
                div { class: "cart-promocode",
                    p { "If you have a promo code, enter it here" }
                    div { class: "cart-promocode-input",
                        input {
                            r#type: "text",
                            placeholder: "promo code",
                            value: "{promo}",
                            oninput: move |evt| promo.set(evt.value()),
                        }
                        button { disabled: true, title: "Promo codes are applied at the counter", "Submit" }
                    }
                }
            }
        }
    }
}
