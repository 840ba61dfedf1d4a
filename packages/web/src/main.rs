use dioxus::prelude::*;

use store::CanteenConfig;
use ui::Page;
use views::{AppLayout, Cart, Feedback, Home, OrderHistory, PlaceOrder, Profile, ResetPassword, Search, Track};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/cart")]
        Cart {},
        #[route("/order")]
        PlaceOrder {},
        #[route("/reset-password?:token")]
        ResetPassword { token: String },
        #[route("/profile")]
        Profile {},
        #[route("/search")]
        Search {},
        #[route("/track/:order_id")]
        Track { order_id: String },
        #[route("/order-history")]
        OrderHistory {},
        #[route("/feedback")]
        Feedback {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Cart => Route::Cart {},
            Page::PlaceOrder => Route::PlaceOrder {},
            Page::Search => Route::Search {},
            Page::Profile => Route::Profile {},
            Page::OrderHistory => Route::OrderHistory {},
            Page::Feedback => Route::Feedback {},
            Page::Track(order_id) => Route::Track { order_id },
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Defaults, with the backend URL baked in at build time when
/// `CANTEEN_API_URL` is set.
fn web_config() -> CanteenConfig {
    match option_env!("CANTEEN_API_URL") {
        Some(url) if !url.trim().is_empty() => CanteenConfig::default().with_base_url(url),
        _ => CanteenConfig::default(),
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));
    let config = use_hook(web_config);
    tracing::debug!("Using backend at {}", config.api.base_url);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::CANTEEN_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ConfigProvider { config,
            ui::StoreProvider {
                Router::<Route> {}
            }
        }
    }
}
