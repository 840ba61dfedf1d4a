use std::time::Duration;

use dioxus::prelude::*;
use store::forms::validate_password_reset;

use crate::timer::sleep;
use crate::{use_store, Page};

const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Landing page of the emailed reset link. `token` is the `?token=` query
/// value and is empty when the link was mangled.
#[component]
pub fn ResetPasswordView(token: String, on_navigate: EventHandler<Page>) -> Element {
    let store = use_store();
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut message = use_signal(|| Option::<(bool, String)>::None);
    let mut loading = use_signal(|| false);

    let reset_token = token.trim().to_string();
    if reset_token.is_empty() {
        return rsx! {
            div { class: "reset-password-container",
                div { class: "reset-password-card",
                    h2 { "Invalid Reset Link" }
                    p { "This password reset link is invalid or has expired." }
                    button { class: "back-home-btn", onclick: move |_| on_navigate.call(Page::Home), "Back to Home" }
                }
            }
        };
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let password = new_password();
        if let Err(e) = validate_password_reset(&password, &confirm()) {
            message.set(Some((false, e.to_string())));
            return;
        }
        let client = store.peek().client();
        let reset_token = reset_token.clone();
        spawn(async move {
            loading.set(true);
            message.set(None);
            match client.reset_password(&reset_token, &password).await {
                Ok(_) => {
                    message.set(Some((true, "Password reset successfully! Redirecting to login...".to_string())));
                    loading.set(false);
                    sleep(REDIRECT_DELAY).await;
                    on_navigate.call(Page::Home);
                }
                Err(e) => {
                    tracing::error!("Reset password error: {e}");
                    message.set(Some((false, e.user_message("An error occurred. Please try again."))));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "reset-password-container",
            div { class: "reset-password-card",
                h2 { "Reset Your Password" }
                p { "Enter your new password below" }
                form { class: "reset-password-form", onsubmit: submit,
                    div { class: "form-group",
                        label { r#for: "newPassword", "New Password" }
                        input {
                            id: "newPassword",
                            r#type: "password",
                            placeholder: "Enter new password",
                            value: "{new_password}",
                            oninput: move |evt| new_password.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "confirmPassword", "Confirm Password" }
                        input {
                            id: "confirmPassword",
                            r#type: "password",
                            placeholder: "Confirm new password",
                            value: "{confirm}",
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }
                    if let Some((ok, text)) = message() {
                        div { class: if ok { "message success" } else { "message error" }, "{text}" }
                    }
                    button { r#type: "submit", class: "reset-btn", disabled: loading(),
                        if loading() { "Resetting..." } else { "Reset Password" }
                    }
                }
                div { class: "back-to-login",
                    button { class: "back-btn", onclick: move |_| on_navigate.call(Page::Home), "Back to Home" }
                }
            }
        }
    }
}
