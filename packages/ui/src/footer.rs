use dioxus::prelude::*;

use crate::navbar::Brand;
use crate::{ActivityLogToggle, Page};

#[component]
pub fn Footer(on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        footer { id: "footer", class: "footer",
            div { class: "footer-content",
                div { class: "footer-content-left",
                    Brand {}
                    p {
                        "AllenhouseEatery is the online ordering counter of the Allenhouse Group of Institutions canteen. "
                        "Browse the menu, order ahead and pick up with your token."
                    }
                }
                div { class: "footer-content-center",
                    h2 { "COMPANY" }
                    ul {
                        li { onclick: move |_| on_navigate.call(Page::Home), "Home" }
                        li { onclick: move |_| on_navigate.call(Page::OrderHistory), "Your Orders" }
                        li { onclick: move |_| on_navigate.call(Page::Feedback), "Feedback" }
                    }
                }
                div { class: "footer-content-right",
                    h2 { "GET IN TOUCH" }
                    ul {
                        li { "+1-123-456-7890" }
                        li { "contact@AllenhouseEatery.com" }
                    }
                }
            }
            hr {}
            div { class: "footer-bottom",
                p { class: "footer-copyright", "Copyright 2024 © AllenhouseEatery.com" }
                ActivityLogToggle {}
            }
        }
    }
}
