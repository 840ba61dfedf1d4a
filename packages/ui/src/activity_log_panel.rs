use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogLevel};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating panel listing background failures, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries = log().entries.clone();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div { class: "activity-log-panel",
            div { class: "activity-log-header",
                span { "Activity" }
                div { class: "activity-log-header-actions",
                    button { onclick: move |_| log.write().entries.clear(), "Clear" }
                    button { onclick: move |_| log.write().visible = false, "Close" }
                }
            }
            div { class: "activity-log-entries",
                if entries.is_empty() {
                    p { class: "activity-log-empty", "Nothing to report." }
                }
                for entry in entries.iter().rev() {
                    div {
                        class: match entry.level {
                            LogLevel::Error => "activity-log-entry error",
                            LogLevel::Warning => "activity-log-entry warning",
                            LogLevel::Success => "activity-log-entry success",
                            LogLevel::Info => "activity-log-entry info",
                        },
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Footer button showing how many entries are waiting.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();
    let has_problems = log()
        .entries
        .iter()
        .any(|e| matches!(e.level, LogLevel::Error | LogLevel::Warning));

    rsx! {
        button {
            class: if has_problems { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity log",
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            if count > 0 {
                "Activity ({count})"
            } else {
                "Activity"
            }
        }
    }
}
