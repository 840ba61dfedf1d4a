use dioxus::prelude::*;
use ui::{ActivityLogPanel, Footer, LoginPopup, Navbar};

use super::go;
use crate::Route;

/// Navbar, login popup, page body, footer and the activity log.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    let store = ui::use_store();

    rsx! {
        if store().show_login {
            LoginPopup {}
        }
        div { class: "app",
            Navbar { on_navigate: move |page| go(nav, page) }
            main {
                Outlet::<Route> {}
            }
        }
        Footer { on_navigate: move |page| go(nav, page) }
        ActivityLogPanel {}
    }
}
