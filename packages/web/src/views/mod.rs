//! Route components. Each one hands its `ui` view a navigation callback
//! that maps [`ui::Page`] onto this app's [`Route`].

use dioxus::prelude::*;
use ui::Page;

use crate::Route;

mod layout;
pub use layout::AppLayout;

pub(crate) fn go(nav: Navigator, page: Page) {
    nav.push(Route::from(page));
}

#[component]
pub fn Home() -> Element {
    rsx! { ui::views::HomeView {} }
}

#[component]
pub fn Search() -> Element {
    rsx! { ui::views::SearchView {} }
}

#[component]
pub fn Cart() -> Element {
    let nav = use_navigator();
    rsx! { ui::views::CartView { on_navigate: move |page| go(nav, page) } }
}

#[component]
pub fn PlaceOrder() -> Element {
    let nav = use_navigator();
    rsx! { ui::views::PlaceOrderView { on_navigate: move |page| go(nav, page) } }
}

#[component]
pub fn ResetPassword(token: String) -> Element {
    let nav = use_navigator();
    rsx! { ui::views::ResetPasswordView { token, on_navigate: move |page| go(nav, page) } }
}

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();
    rsx! { ui::views::UserProfileView { on_navigate: move |page| go(nav, page) } }
}

/// Keyed on the id so following a link to another order restarts polling.
#[component]
pub fn Track(order_id: String) -> Element {
    rsx! { ui::views::OrderTrackerView { key: "{order_id}", order_id: order_id.clone() } }
}

#[component]
pub fn OrderHistory() -> Element {
    let nav = use_navigator();
    rsx! { ui::views::OrderHistoryView { on_navigate: move |page| go(nav, page) } }
}

#[component]
pub fn Feedback() -> Element {
    rsx! { ui::views::FeedbackView {} }
}
