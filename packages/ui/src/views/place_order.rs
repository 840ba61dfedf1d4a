use dioxus::prelude::*;
use store::checkout::{preview_token, RF_CARD_MAX_LEN};
use store::{format_rupees, CheckoutForm, Order, OrderRequest, PaymentGate, PaymentMethod, Receipt};

use crate::views::ModalOverlay;
use crate::{log_activity, use_activity_log, use_store, LogLevel, Page, PaymentQr, PaymentSuccess};

/// What the success modal shows once the backend accepted the order.
#[derive(Clone, Debug, PartialEq)]
struct Placed {
    order: Order,
    amount: f64,
    paid_online: bool,
}

/// Checkout: delivery details, payment method and order submission.
#[component]
pub fn PlaceOrderView(on_navigate: EventHandler<Page>) -> Element {
    let mut store = use_store();
    let mut activity_log = use_activity_log();
    let mut form = use_signal(CheckoutForm::default);
    let mut gate = use_signal(PaymentGate::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut placing = use_signal(|| false);
    let mut placed = use_signal(|| Option::<Placed>::None);
    let preview = use_hook(|| preview_token(&mut rand::thread_rng()));

    use_effect(move || {
        let snapshot = store();
        if snapshot.loading {
            return;
        }
        if !snapshot.signed_in() {
            on_navigate.call(Page::Home);
        } else if snapshot.cart_total() == 0.0 && placed().is_none() {
            on_navigate.call(Page::Cart);
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        let method = current.payment_method;
        if !gate().can_place(method) {
            return;
        }
        let (mut request, amount, client) = {
            let snapshot = store.peek();
            match OrderRequest::build(&current, &snapshot.cart, &snapshot.menu) {
                Ok(request) => (request, snapshot.cart_total(), snapshot.client()),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            }
        };

        spawn(async move {
            placing.set(true);
            error.set(None);

            if method == PaymentMethod::Upi {
                match client.create_payment_intent(amount).await {
                    Ok(intent) => request.payment_intent_id = Some(intent.payment_intent_id),
                    Err(e) => tracing::warn!("Payment intent unavailable, placing without: {e}"),
                }
            }

            match client.create_order(&request).await {
                Ok(order) => {
                    let mut paid_online = false;
                    if let Some(intent_id) = request.payment_intent_id.as_deref() {
                        match client.confirm_payment(intent_id).await {
                            Ok(_) => paid_online = true,
                            Err(e) => {
                                tracing::warn!("Payment confirmation failed: {e}");
                                log_activity(&mut activity_log, LogLevel::Warning, &format!("Payment: {e}"));
                            }
                        }
                    }
                    tracing::info!("Placed order {}", order.order_number);
                    log_activity(
                        &mut activity_log,
                        LogLevel::Success,
                        &format!("Order {} placed", order.order_number),
                    );
                    placed.set(Some(Placed { order, amount, paid_online }));
                    store.write().cart.clear();
                }
                Err(e) => {
                    tracing::error!("Order placement error: {e}");
                    error.set(Some(e.user_message("An error occurred while placing the order")));
                }
            }
            placing.set(false);
        });
    };

    let snapshot = store();
    if !snapshot.signed_in() {
        return rsx! { div { class: "notice", "Please login to place an order." } };
    }
    if snapshot.cart_total() == 0.0 && placed().is_none() {
        return rsx! { div { class: "notice", "Your cart is empty. Please add items to proceed." } };
    }

    let total = snapshot.cart_total();
    let current = form();
    let method = current.payment_method;
    let receipt = Receipt::from_cart(&snapshot.cart, &snapshot.menu, Some(preview.clone()));
    let can_place = gate().can_place(method);
    let place_label = if placing() { "Placing Order..." } else { "PLACE ORDER" };

    rsx! {
        if let Some(done) = placed() {
            ModalOverlay { on_close: move |_| on_navigate.call(Page::Home),
                div { class: "success-modal",
                    if done.paid_online {
                        PaymentSuccess {
                            amount: done.amount,
                            order_number: done.order.order_number.clone(),
                            on_continue: move |_| on_navigate.call(Page::Home),
                        }
                    } else {
                        h3 { "Order Placed" }
                        p { "Thank you! Your order has been placed successfully." }
                        if !done.order.order_number.is_empty() {
                            p { b { "Order: " } "{done.order.order_number}" }
                        }
                    }
                    if let Some(token) = done.order.token_number.clone() {
                        p { b { "Pickup Token: " } "{token}" }
                    }
                    div { class: "modal-actions",
                        button {
                            r#type: "button",
                            class: "secondary-btn",
                            onclick: move |_| on_navigate.call(Page::Home),
                            "Close"
                        }
                        if !done.order.id.is_empty() {
                            button {
                                r#type: "button",
                                class: "primary-btn",
                                onclick: {
                                    let id = done.order.id.clone();
                                    move |_| on_navigate.call(Page::Track(id.clone()))
                                },
                                "Track Order"
                            }
                        }
                    }
                }
            }
        }

        form { class: "place-order", onsubmit: submit,
            div { class: "place-order-left",
                p { class: "title", "Delivery Information" }
                if let Some(message) = error() {
                    div { class: "error-message", "{message}" }
                }
                div { class: "multi-fields",
                    input {
                        r#type: "text",
                        placeholder: "First Name",
                        value: "{current.first_name}",
                        oninput: move |evt| {
                            form.write().first_name = evt.value();
                            error.set(None);
                        },
                    }
                    input {
                        r#type: "text",
                        placeholder: "Last Name",
                        value: "{current.last_name}",
                        oninput: move |evt| {
                            form.write().last_name = evt.value();
                            error.set(None);
                        },
                    }
                }
                input {
                    r#type: "text",
                    placeholder: "Branch",
                    value: "{current.branch}",
                    oninput: move |evt| {
                        form.write().branch = evt.value();
                        error.set(None);
                    },
                }
                input {
                    r#type: "tel",
                    placeholder: "Phone",
                    value: "{current.phone}",
                    oninput: move |evt| {
                        form.write().phone = evt.value();
                        error.set(None);
                    },
                }

                div { class: "payment-method-section",
                    p { class: "title", "Payment Method" }
                    div { class: "payment-options",
                        for option in PaymentMethod::ALL {
                            label { key: "{option.as_str()}", class: "payment-option",
                                input {
                                    r#type: "radio",
                                    name: "paymentMethod",
                                    value: "{option.as_str()}",
                                    checked: method == option,
                                    onchange: move |evt| {
                                        if let Some(choice) = PaymentMethod::parse(&evt.value()) {
                                            form.write().payment_method = choice;
                                        }
                                    },
                                }
                                span { class: "payment-option-label", "{option.label()}" }
                            }
                        }
                    }
                }
            }

            div { class: "place-order-right",
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

                    {match method {
                        PaymentMethod::Upi => rsx! {
                            div { class: "card-payment-section",
                                if gate().qr_shown() {
                                    PaymentQr { receipt: receipt.clone() }
                                } else {
                                    button {
                                        r#type: "button",
                                        class: "proceed-payment-btn",
                                        onclick: move |_| gate.write().show_qr(),
                                        "SHOW QR TO PAY"
                                    }
                                }
                            }
                        },
                        PaymentMethod::RfCard => rsx! {
                            div { class: "card-payment-section",
                                input {
                                    r#type: "text",
                                    inputmode: "numeric",
                                    placeholder: "Enter RF Card Number",
                                    maxlength: "{RF_CARD_MAX_LEN}",
                                    value: "{current.rf_card_number}",
                                    oninput: move |evt| {
                                        form.write().rf_card_number = evt.value();
                                        error.set(None);
                                    },
                                }
                                button {
                                    r#type: "button",
                                    class: "proceed-payment-btn",
                                    disabled: placing() || current.rf_card_number.trim().is_empty(),
                                    onclick: move |_| {
                                        let card = form().rf_card_number;
                                        gate.write().tap_card(&card);
                                    },
                                    "TAP RF CARD TO PAY"
                                }
                            }
                        },
                        PaymentMethod::Cash => rsx! {
                            div { class: "receipt",
                                h4 { "Pickup Token" }
                                div { class: "row",
                                    span { "Token (preview):" }
                                    b { "{preview}" }
                                }
                                h5 { "Items" }
                                for line in receipt.lines.iter() {
                                    div { key: "{line.food.id}", class: "row small",
                                        span { "{line.food.name} x {line.quantity}" }
                                        span { "{format_rupees(line.subtotal)}" }
                                    }
                                }
                                div { class: "row total",
                                    span { "Total" }
                                    span { "{format_rupees(total)}" }
                                }
                            }
                        },
                    }}

                    if can_place {
                        button { r#type: "submit", class: "place-order-btn", disabled: placing(), "{place_label}" }
                    }
                }
            }
        }
    }
}
