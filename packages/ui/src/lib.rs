//! This crate contains all shared UI for the workspace: the global store
//! context, the navbar and footer, and every page of the canteen client.
//! Platform crates own routing; views report navigation through
//! `EventHandler<Page>` and the platform maps [`Page`] to its route type.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const CANTEEN_CSS: Asset = asset!("/assets/canteen.css");

mod session;
pub use session::{make_token_store, SessionVault};

mod timer;

mod config;
pub use config::{use_config, ConfigProvider};

mod app_store;
pub use app_store::{use_cart, use_session, use_store, AppStore, CartActions, SessionActions, StoreProvider};

mod geolocation;
pub use geolocation::{use_geolocation, GeoState};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod login_popup;
pub use login_popup::LoginPopup;

mod food_item_card;
pub use food_item_card::{FoodDisplay, FoodItemCard};

mod special_menu_popup;
pub use special_menu_popup::SpecialMenuPopup;

mod payment_qr;
pub use payment_qr::PaymentQr;

mod payment_success;
pub use payment_success::PaymentSuccess;

pub mod views;

/// Destinations a view can ask the platform router for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Cart,
    PlaceOrder,
    Search,
    Profile,
    OrderHistory,
    Feedback,
    Track(String),
}
