use dioxus::prelude::*;

use crate::icons::{FaCartShopping, FaLocationDot, FaMagnifyingGlass};
use crate::views::ModalOverlay;
use crate::{use_session, use_store, Icon, Page};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn Brand() -> Element {
    rsx! {
        h2 { class: "brand",
            span { "A" }
            "llenhouse"
            span { " E" }
            "atery"
        }
    }
}

/// Top bar: brand, section links, search, cart count, order tracking and
/// the account area.
#[component]
pub fn Navbar(on_navigate: EventHandler<Page>) -> Element {
    let store = use_store();
    let session = use_session();
    let mut show_track = use_signal(|| false);
    let mut track_id = use_signal(String::new);

    let item_count = store().cart.item_count();
    let user = store().user.clone();
    let signed_in = store().signed_in();

    let submit_track = move |evt: FormEvent| {
        evt.prevent_default();
        let id = track_id().trim().to_string();
        if id.is_empty() {
            return;
        }
        show_track.set(false);
        track_id.set(String::new());
        on_navigate.call(Page::Track(id));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav { class: "navbar",
            button { class: "navbar-brand", onclick: move |_| on_navigate.call(Page::Home), Brand {} }

            ul { class: "navbar-menu",
                li { onclick: move |_| on_navigate.call(Page::Home), "Home" }
                li { a { href: "#explore-menu", "Menu" } }
                li { onclick: move |_| on_navigate.call(Page::Feedback), "Feedback" }
                li { a { href: "#footer", "Contact Us" } }
            }

            div { class: "navbar-right",
                button {
                    class: "navbar-icon",
                    title: "Search",
                    onclick: move |_| on_navigate.call(Page::Search),
                    Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
                }
                button {
                    class: "navbar-icon navbar-cart",
                    title: "Cart",
                    onclick: move |_| on_navigate.call(Page::Cart),
                    Icon { icon: FaCartShopping, width: 18, height: 18 }
                    if item_count > 0 {
                        span { class: "cart-count", "{item_count}" }
                    }
                }
                button {
                    class: "navbar-icon",
                    title: "Track order",
                    onclick: move |_| show_track.set(true),
                    Icon { icon: FaLocationDot, width: 18, height: 18 }
                }

                if signed_in {
                    div { class: "user-profile",
                        if let Some(user) = user {
                            div { class: "user-info",
                                span { class: "user-name", "Hi, {user.display_name()}!" }
                                span { class: "user-email", "{user.email}" }
                            }
                        }
                        div { class: "user-actions",
                            button { class: "link-btn", onclick: move |_| on_navigate.call(Page::Profile), "Profile" }
                            button { class: "link-btn", onclick: move |_| on_navigate.call(Page::OrderHistory), "Orders" }
                            button {
                                class: "logout-btn",
                                onclick: move |_| {
                                    session.sign_out();
                                    on_navigate.call(Page::Home);
                                },
                                "Logout"
                            }
                        }
                    }
                } else {
                    button { class: "signin-btn", onclick: move |_| session.open_login(), "Sign In" }
                }
            }
        }

        if show_track() {
            ModalOverlay { on_close: move |_| show_track.set(false),
                form { class: "track-modal", onsubmit: submit_track,
                    h3 { "Track your order" }
                    input {
                        r#type: "text",
                        placeholder: "Order ID",
                        value: "{track_id}",
                        oninput: move |evt| track_id.set(evt.value()),
                    }
                    div { class: "modal-actions",
                        button { r#type: "button", class: "secondary-btn", onclick: move |_| show_track.set(false), "Cancel" }
                        button { r#type: "submit", class: "primary-btn", disabled: track_id().trim().is_empty(), "Track" }
                    }
                }
            }
        }
    }
}
