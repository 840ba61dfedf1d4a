//! Client configuration context.

use dioxus::prelude::*;
use store::CanteenConfig;

/// Make `config` available to every component below via [`use_config`].
#[component]
pub fn ConfigProvider(config: CanteenConfig, children: Element) -> Element {
    use_context_provider(|| config.clone());
    rsx! {
        {children}
    }
}

pub fn use_config() -> CanteenConfig {
    use_context::<CanteenConfig>()
}
