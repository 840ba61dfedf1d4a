use dioxus::prelude::*;
use store::{AuthForm, AuthMode};

use crate::icons::FaXmark;
use crate::{use_session, use_store, Icon};

/// Login / sign-up dialog, shown while `AppStore::show_login` is set.
#[component]
pub fn LoginPopup() -> Element {
    let store = use_store();
    let session = use_session();
    let mut mode = use_signal(AuthMode::default);
    let mut form = use_signal(AuthForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let switch_mode = move |_| {
        mode.set(mode().toggle());
        form.set(AuthForm::default());
        error.set(None);
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        let mode = mode();
        if let Err(e) = current.validate(mode) {
            error.set(Some(e.to_string()));
            return;
        }

        let client = store.peek().client();
        spawn(async move {
            loading.set(true);
            error.set(None);
            let email = current.email.trim();
            let result = match mode {
                AuthMode::Login => client.login(email, &current.password).await,
                AuthMode::SignUp => {
                    client
                        .register(current.name.trim(), email, &current.password)
                        .await
                }
            };
            match result {
                Ok(auth) => {
                    form.set(AuthForm::default());
                    session.sign_in(auth);
                }
                Err(e) => {
                    tracing::error!("Login/Register error: {e}");
                    error.set(Some(e.user_message("An error occurred. Please try again.")));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "login-popup",
            form { class: "login-popup-container", onsubmit: submit,
                div { class: "login-popup-title",
                    h2 { "{mode().title()}" }
                    button {
                        r#type: "button",
                        class: "icon-btn",
                        onclick: move |_| session.close_login(),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }

                if let Some(message) = error() {
                    div { class: "error-message", "{message}" }
                }

                div { class: "login-popup-inputs",
                    if mode() == AuthMode::SignUp {
                        input {
                            r#type: "text",
                            placeholder: "Your name",
                            value: "{form().name}",
                            oninput: move |evt| {
                                form.write().name = evt.value();
                                error.set(None);
                            },
                        }
                    }
                    input {
                        r#type: "email",
                        placeholder: "Your email",
                        value: "{form().email}",
                        oninput: move |evt| {
                            form.write().email = evt.value();
                            error.set(None);
                        },
                    }
                    input {
                        r#type: "password",
                        placeholder: "Your Password",
                        value: "{form().password}",
                        oninput: move |evt| {
                            form.write().password = evt.value();
                            error.set(None);
                        },
                    }
                }

                button { r#type: "submit", class: "primary-btn", disabled: loading(),
                    if loading() {
                        "Loading..."
                    } else {
                        "{mode().submit_label()}"
                    }
                }

                label { class: "login-popup-condition",
                    input {
                        r#type: "checkbox",
                        checked: form().accepted_terms,
                        onchange: move |evt| form.write().accepted_terms = evt.checked(),
                    }
                    span { "By continuing, I agree to the terms of use & privacy policy." }
                }

                {match mode() {
                    AuthMode::Login => rsx! {
                        p { "Create a new account? " span { class: "link", onclick: switch_mode, "Click here" } }
                    },
                    AuthMode::SignUp => rsx! {
                        p { "Already have an account? " span { class: "link", onclick: switch_mode, "Login here" } }
                    },
                }}
            }
        }
    }
}
