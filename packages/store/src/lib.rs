//! Platform-neutral domain for the canteen ordering client: wire models, cart
//! state, menu search, tracker maths, form validation, UPI payment intents,
//! token persistence and TOML configuration.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod forms;
pub mod models;
pub mod payment;
pub mod search;
pub mod session;
pub mod tracker;

mod memory;
pub use memory::MemoryTokenStore;

mod file_store;
pub use file_store::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageTokenStore;

pub use cart::{Cart, CartLine};
pub use checkout::{CheckoutError, CheckoutForm, OrderRequest, PaymentGate};
pub use config::CanteenConfig;
pub use forms::{AuthForm, AuthMode, FeedbackForm, FeedbackRequest, FormError, ProfileForm};
pub use models::{
    format_rupees, CartItems, DeliveryAddress, FoodItem, Order, OrderItem, OrderLineRequest,
    OrderStatus, PaymentMethod, User,
};
pub use payment::{Receipt, UpiIntent};
pub use session::{SessionError, TokenStore};
pub use tracker::{GeoPoint, PollFailure};
