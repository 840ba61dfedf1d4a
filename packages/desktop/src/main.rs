use std::path::PathBuf;

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

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Logger already initialised: {e}");
    }
    dioxus::launch(App);
}

/// `<config_dir>/canteen/canteen.toml`
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("canteen").join(CanteenConfig::filename()))
}

fn load_config() -> CanteenConfig {
    match config_path() {
        Some(path) => {
            tracing::info!("Reading config from {}", path.display());
            CanteenConfig::load_or_default(&path)
        }
        None => CanteenConfig::default(),
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::CANTEEN_CSS }
        ui::ConfigProvider { config,
            ui::StoreProvider {
                Router::<Route> {}
            }
        }
    }
}
