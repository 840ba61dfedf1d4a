use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::forms::image_data_url;
use store::models::format_order_date;
use store::{Order, ProfileForm, User};

use crate::views::orders::OrderCard;
use crate::{use_session, use_store, Page};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Profile,
    Orders,
    Settings,
}

#[derive(Clone, Debug, PartialEq)]
struct Preferences {
    email_updates: bool,
    sms_updates: bool,
    share_history: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_updates: true,
            sms_updates: true,
            share_history: true,
        }
    }
}

/// Upload a freshly picked picture first so the profile stores its URL.
async fn save_profile(client: &ApiClient, mut form: ProfileForm) -> Result<User, ApiError> {
    if form.has_pending_upload() {
        form.profile_pic = client.upload_profile_pic(&form.profile_pic).await?;
    }
    client.update_profile(&form).await
}

/// Account page with profile editing, past orders and local preferences.
#[component]
pub fn UserProfileView(on_navigate: EventHandler<Page>) -> Element {
    let mut store = use_store();
    let session = use_session();
    let mut tab = use_signal(|| Tab::Profile);
    let mut editing = use_signal(|| false);
    let mut form = use_signal(ProfileForm::default);
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);
    let mut prefs = use_signal(Preferences::default);

    // Orders are only fetched once their tab is opened
    let orders = use_resource(move || async move {
        if tab() != Tab::Orders {
            return None;
        }
        let client = store.peek().client();
        match client.user_orders().await {
            Ok(list) => Some(list),
            Err(e) => {
                tracing::error!("Error fetching orders: {e}");
                Some(Vec::<Order>::new())
            }
        }
    });

    let snapshot = store();
    if !snapshot.signed_in() {
        return rsx! {
            div { class: "user-profile-container",
                div { class: "login-required",
                    h2 { "Login Required" }
                    p { "Please log in to view your profile" }
                    button { class: "primary-btn", onclick: move |_| session.open_login(), "Sign In" }
                }
            }
        };
    }
    let Some(user) = snapshot.user.clone() else {
        return rsx! { div { class: "loading", "Loading profile..." } };
    };
    let base_url = snapshot.base_url().to_string();

    let toggle_edit = {
        let user = user.clone();
        move |_| {
            if !editing() {
                form.set(ProfileForm::from_user(&user));
            }
            notice.set(None);
            editing.set(!editing());
        }
    };

    let pick_picture = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => form.write().profile_pic = image_data_url(&name, &bytes),
            None => tracing::warn!("Could not read picked file {name}"),
        }
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let pending = form();
        if let Err(e) = pending.validate() {
            notice.set(Some((false, e.to_string())));
            return;
        }
        let client = store.peek().client();
        spawn(async move {
            saving.set(true);
            match save_profile(&client, pending).await {
                Ok(updated) => {
                    store.write().user = Some(updated);
                    editing.set(false);
                    notice.set(Some((true, "Profile updated successfully!".to_string())));
                }
                Err(e) => {
                    tracing::error!("Error updating profile: {e}");
                    notice.set(Some((false, e.user_message("Failed to update profile"))));
                }
            }
            saving.set(false);
        });
    };

    let avatar = if editing() && !form().profile_pic.is_empty() {
        Some(form().profile_pic)
    } else {
        user.profile_pic.clone().filter(|pic| !pic.is_empty())
    };
    let member_since = user
        .created_at
        .map(|at| format_order_date(&at.with_timezone(&chrono::Local)))
        .unwrap_or_else(|| "Unknown".to_string());
    let or_missing = |value: &str| {
        if value.is_empty() {
            "Not provided".to_string()
        } else {
            value.to_string()
        }
    };

    rsx! {
        div { class: "user-profile-container",
            div { class: "profile-header-banner",
                div { class: "profile-avatar",
                    if let Some(src) = avatar {
                        img { src: "{src}", alt: "Profile" }
                    } else {
                        span { "{user.initial()}" }
                    }
                }
                div { class: "profile-welcome",
                    h1 { "Welcome back, {user.display_name()}!" }
                    p { "Manage your profile, view orders, and customize your experience" }
                }
            }

            div { class: "profile-content",
                div { class: "profile-sidebar",
                    for (value, label) in [(Tab::Profile, "Profile"), (Tab::Orders, "Orders"), (Tab::Settings, "Settings")] {
                        button {
                            key: "{label}",
                            class: if tab() == value { "tab-btn active" } else { "tab-btn" },
                            onclick: move |_| tab.set(value),
                            "{label}"
                        }
                    }
                }

                div { class: "profile-main",
                    if tab() == Tab::Profile {
                        div { class: "profile-section",
                            div { class: "profile-header",
                                h2 { "Profile Information" }
                                button { class: "edit-btn", onclick: toggle_edit,
                                    if editing() { "Cancel" } else { "Edit Profile" }
                                }
                            }
                            if let Some((ok, message)) = notice() {
                                div { class: if ok { "message success" } else { "message error" }, "{message}" }
                            }
                            if editing() {
                                form { class: "profile-form", onsubmit: save,
                                    div { class: "form-group",
                                        label { "Name" }
                                        input {
                                            r#type: "text",
                                            value: "{form().name}",
                                            oninput: move |evt| form.write().name = evt.value(),
                                        }
                                    }
                                    div { class: "form-group",
                                        label { "Email" }
                                        input {
                                            r#type: "email",
                                            value: "{form().email}",
                                            oninput: move |evt| form.write().email = evt.value(),
                                        }
                                    }
                                    div { class: "form-group",
                                        label { "Phone" }
                                        input {
                                            r#type: "tel",
                                            value: "{form().phone}",
                                            oninput: move |evt| form.write().phone = evt.value(),
                                        }
                                    }
                                    div { class: "form-group",
                                        label { "Profile picture" }
                                        input { r#type: "file", accept: "image/*", onchange: pick_picture }
                                    }
                                    button { r#type: "submit", class: "save-btn", disabled: saving(),
                                        if saving() { "Saving..." } else { "Save Changes" }
                                    }
                                }
                            } else {
                                div { class: "profile-info",
                                    div { class: "info-item",
                                        span { class: "label", "Name:" }
                                        span { class: "value", "{or_missing(&user.name)}" }
                                    }
                                    div { class: "info-item",
                                        span { class: "label", "Email:" }
                                        span { class: "value", "{or_missing(&user.email)}" }
                                    }
                                    div { class: "info-item",
                                        span { class: "label", "Phone:" }
                                        span { class: "value", "{or_missing(user.phone.as_deref().unwrap_or_default())}" }
                                    }
                                    div { class: "info-item",
                                        span { class: "label", "Member Since:" }
                                        span { class: "value", "{member_since}" }
                                    }
                                }
                            }
                        }
                    }

                    if tab() == Tab::Orders {
                        div { class: "orders-section",
                            h2 { "Order History" }
                            {match orders().flatten() {
                                None => rsx! { div { class: "loading", "Loading orders..." } },
                                Some(list) if list.is_empty() => rsx! {
                                    div { class: "no-orders",
                                        p { "No orders found" }
                                        p { "Start ordering delicious food to see your order history here!" }
                                    }
                                },
                                Some(list) => rsx! {
                                    div { class: "orders-list",
                                        for order in list {
                                            OrderCard {
                                                key: "{order.id}",
                                                order: order.clone(),
                                                base_url: base_url.clone(),
                                                on_navigate,
                                            }
                                        }
                                    }
                                },
                            }}
                        }
                    }

                    if tab() == Tab::Settings {
                        div { class: "settings-section",
                            h2 { "Account Settings" }
                            div { class: "settings-group",
                                h3 { "Notifications" }
                                label { class: "setting-item",
                                    input {
                                        r#type: "checkbox",
                                        checked: prefs().email_updates,
                                        onchange: move |evt| prefs.write().email_updates = evt.checked(),
                                    }
                                    "Email notifications for orders"
                                }
                                label { class: "setting-item",
                                    input {
                                        r#type: "checkbox",
                                        checked: prefs().sms_updates,
                                        onchange: move |evt| prefs.write().sms_updates = evt.checked(),
                                    }
                                    "SMS notifications for pickup"
                                }
                            }
                            div { class: "settings-group",
                                h3 { "Privacy" }
                                label { class: "setting-item",
                                    input {
                                        r#type: "checkbox",
                                        checked: prefs().share_history,
                                        onchange: move |evt| prefs.write().share_history = evt.checked(),
                                    }
                                    "Share order history for recommendations"
                                }
                            }
                            div { class: "settings-group",
                                h3 { "Session" }
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
                    }
                }
            }
        }
    }
}
