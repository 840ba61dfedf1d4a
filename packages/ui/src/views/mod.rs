mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod home;
pub use home::HomeView;

mod search;
pub use search::SearchView;

mod cart;
pub use cart::CartView;

mod place_order;
pub use place_order::PlaceOrderView;

mod order_tracker;
pub use order_tracker::OrderTrackerView;

mod orders;
pub use orders::{OrderCard, OrderIdLine};

mod user_profile;
pub use user_profile::UserProfileView;

mod order_history;
pub use order_history::OrderHistoryView;

pub mod feedback;
pub use feedback::{FeedbackView, OrderFeedback};

mod reset_password;
pub use reset_password::ResetPasswordView;
