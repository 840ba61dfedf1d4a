use base64::Engine;
use dioxus::prelude::*;
use store::payment::{token_slip_filename, token_slip_text};
use store::{format_rupees, Receipt, UpiIntent};

use crate::use_config;

const BRAND: &str = "AllenEatery";

/// UPI payment panel: pay link for the configured VPA, the receipt and a
/// downloadable pickup token slip.
#[component]
pub fn PaymentQr(receipt: Receipt) -> Element {
    let config = use_config();
    let intent = UpiIntent::from_config(&config.payment)
        .with_amount(receipt.total)
        .with_note(format!("{BRAND} Order"));
    let upi_uri = intent.to_uri();

    let token = receipt.token.clone();
    let token_label = token.clone().unwrap_or_else(|| "----".to_string());
    let issued_at = chrono::Local::now().format("%d/%m/%Y, %H:%M:%S").to_string();
    let slip = token_slip_text(BRAND, token.as_deref(), &receipt, &issued_at);
    let slip_href = format!(
        "data:text/plain;charset=utf-8;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(slip)
    );
    let slip_name = token_slip_filename(token.as_deref());

    rsx! {
        div { class: "qr-container",
            h3 { "Scan & Pay (UPI)" }
            div { class: "qr-box",
                a { class: "upi-link", href: "{upi_uri}", "Open in UPI app" }
                code { class: "upi-uri", "{upi_uri}" }
            }
            div { class: "qr-details",
                div { class: "row", span { "Payee:" } b { "{intent.payee_name}" } }
                div { class: "row", span { "VPA:" } b { "{intent.vpa}" } }
                div { class: "row", span { "Amount:" } b { "{format_rupees(receipt.total)}" } }
            }

            div { class: "receipt",
                h4 { "Receipt" }
                div { class: "row", span { "Items:" } b { "{receipt.item_count}" } }
                if !receipt.lines.is_empty() {
                    div { class: "receipt-lines",
                        for line in receipt.lines.iter() {
                            div { key: "{line.food.id}", class: "row small",
                                span { "{line.food.name} x {line.quantity}" }
                                b { "{format_rupees(line.subtotal)}" }
                            }
                        }
                        div { class: "row total",
                            span { "Total" }
                            b { "{format_rupees(receipt.total)}" }
                        }
                    }
                }
                div { class: "row token",
                    span { "Token:" }
                    b { "{token_label}" }
                }
                a { class: "download-btn", href: "{slip_href}", download: "{slip_name}", "Download Token" }
            }

            p { class: "hint", "Show this token at the canteen counter to receive your order." }
        }
    }
}
