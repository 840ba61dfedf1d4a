//! Global store context and the hooks that mutate it.
//!
//! [`StoreProvider`] owns the only shared client state: the menu, the cart,
//! the auth token and the signed-in profile. Views read it through
//! [`use_store`] and change it through [`use_cart`] and [`use_session`], which
//! keep the server cart in step when a token is present.

use api::{ApiClient, ApiError, AuthSession};
use dioxus::prelude::*;
use store::{Cart, CartItems, FoodItem, User};

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::config::use_config;
use crate::session::SessionVault;

#[derive(Clone, Debug, PartialEq)]
pub struct AppStore {
    pub menu: Vec<FoodItem>,
    pub cart: Cart,
    pub token: Option<String>,
    pub user: Option<User>,
    /// True until the menu and persisted session have been loaded.
    pub loading: bool,
    pub show_login: bool,
    api: ApiClient,
    vault: SessionVault,
}

impl AppStore {
    pub fn new(api: ApiClient, vault: SessionVault) -> Self {
        Self {
            menu: Vec::new(),
            cart: Cart::new(),
            token: None,
            user: None,
            loading: true,
            show_login: false,
            api,
            vault,
        }
    }

    /// Replace the menu and drop cart entries that are no longer on it.
    pub fn set_menu(&mut self, menu: Vec<FoodItem>) {
        self.menu = menu;
        self.cart.cleanup(&self.menu);
    }

    /// Adopt the server's cart. The server copy wins over local edits.
    pub fn replace_cart(&mut self, items: CartItems) {
        self.cart = Cart::from_items(items);
        self.cart.cleanup(&self.menu);
    }

    /// A client carrying the current token.
    pub fn client(&self) -> ApiClient {
        self.api.clone().with_token(self.token.clone())
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total(&self.menu)
    }

    pub fn find_food(&self, food_id: &str) -> Option<&FoodItem> {
        self.menu.iter().find(|item| item.id == food_id)
    }

    /// Drop the token from memory and from the persisted store.
    fn forget_session(&mut self) {
        self.vault.persist(None);
        self.token = None;
        self.user = None;
    }
}

pub fn use_store() -> Signal<AppStore> {
    use_context::<Signal<AppStore>>()
}

/// Provider component for the global store. Loads the menu, then restores
/// the persisted session. A [`SessionVault`] in context replaces the
/// platform token store.
#[component]
pub fn StoreProvider(children: Element) -> Element {
    let config = use_config();
    let activity_log = use_activity_log();
    let vault = use_hook(|| try_consume_context::<SessionVault>().unwrap_or_else(SessionVault::platform));
    let mut state = use_context_provider(|| {
        Signal::new(AppStore::new(
            ApiClient::new(config.api.base_url.clone()),
            vault.clone(),
        ))
    });

    let _loader = use_resource(move || async move {
        let mut log = activity_log;
        let client = state.peek().client();
        match client.list_foods().await {
            Ok(menu) => {
                tracing::info!("Loaded {} menu items", menu.len());
                state.write().set_menu(menu);
            }
            Err(e) => {
                tracing::error!("Error fetching food list: {e}");
                log_activity(&mut log, LogLevel::Error, &format!("Menu: {e}"));
            }
        }

        let persisted = state.peek().vault.load();
        if let Some(token) = persisted {
            state.write().token = Some(token);
            load_account(state, log).await;
        }
        state.write().loading = false;
    });

    rsx! {
        {children}
    }
}

/// Fetch the server cart, then the profile. A rejected token ends the session.
pub(crate) async fn load_account(mut state: Signal<AppStore>, mut log: Signal<ActivityLog>) {
    let client = state.peek().client();

    match client.get_cart().await {
        Ok(items) => state.write().replace_cart(items),
        Err(e) => {
            tracing::warn!("Error loading cart data: {e}");
            log_activity(&mut log, LogLevel::Warning, &format!("Cart: {e}"));
        }
    }

    match client.profile().await {
        Ok(user) => state.write().user = Some(user),
        Err(ApiError::Unauthorized) => {
            tracing::warn!("Session token rejected, signing out");
            state.write().forget_session();
            log_activity(&mut log, LogLevel::Warning, "Session expired, please login again");
        }
        Err(e) => {
            tracing::warn!("Error loading profile: {e}");
            log_activity(&mut log, LogLevel::Warning, &format!("Profile: {e}"));
        }
    }
}

/// Cart mutations: local first, then mirrored to the server when signed in.
/// The sync task is not tied to the calling component, so closing a popup
/// does not cancel it.
#[derive(Clone, Copy)]
pub struct CartActions {
    state: Signal<AppStore>,
    log: Signal<ActivityLog>,
}

impl CartActions {
    pub fn add(&self, food_id: &str) {
        self.apply(food_id, true);
    }

    pub fn remove(&self, food_id: &str) {
        self.apply(food_id, false);
    }

    fn apply(&self, food_id: &str, adding: bool) {
        let mut state = self.state;
        {
            let mut store = state.write();
            if adding {
                store.cart.add(food_id);
            } else {
                store.cart.remove(food_id);
            }
        }

        let client = state.peek().client();
        if !client.is_authenticated() {
            return;
        }

        let food_id = food_id.to_string();
        let mut log = self.log;
        spawn_forever(async move {
            let result = if adding {
                client.add_to_cart(&food_id).await
            } else {
                client.remove_from_cart(&food_id).await
            };
            if let Err(e) = result {
                tracing::warn!("Cart sync failed for {food_id}: {e}");
                log_activity(&mut log, LogLevel::Warning, &format!("Cart sync: {e}"));
            }
        });
    }
}

pub fn use_cart() -> CartActions {
    CartActions {
        state: use_store(),
        log: use_activity_log(),
    }
}

#[derive(Clone, Copy)]
pub struct SessionActions {
    state: Signal<AppStore>,
    log: Signal<ActivityLog>,
}

impl SessionActions {
    /// Adopt a fresh token from login or registration. The account load
    /// outlives the login popup, which unmounts as soon as this returns.
    pub fn sign_in(&self, session: AuthSession) {
        let mut state = self.state;
        {
            let mut store = state.write();
            store.vault.persist(Some(&session.token));
            store.token = Some(session.token);
            store.user = session.user;
            store.show_login = false;
        }
        let mut log = self.log;
        log_activity(&mut log, LogLevel::Success, "Signed in");
        spawn_forever(load_account(state, log));
    }

    pub fn sign_out(&self) {
        let mut state = self.state;
        let mut store = state.write();
        store.forget_session();
        store.cart.clear();
    }

    pub fn open_login(&self) {
        let mut state = self.state;
        state.write().show_login = true;
    }

    pub fn close_login(&self) {
        let mut state = self.state;
        state.write().show_login = false;
    }
}

pub fn use_session() -> SessionActions {
    SessionActions {
        state: use_store(),
        log: use_activity_log(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use dioxus::dioxus_core::NoOpMutations;
    use serde_json::{json, Value};
    use store::{CanteenConfig, MemoryTokenStore, TokenStore};

    use crate::views::OrderHistoryView;
    use crate::ConfigProvider;

    fn vault() -> SessionVault {
        SessionVault::new(MemoryTokenStore::new())
    }

    fn food(id: &str, price: f64) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            price,
            category: "Snacks".to_string(),
            image: format!("{id}.png"),
            description: String::new(),
        }
    }

    #[test]
    fn menu_replacement_cleans_cart() {
        let mut store = AppStore::new(ApiClient::new("http://localhost:4000"), vault());
        store.cart.add("samosa");
        store.cart.add("ghost");

        // Empty menu keeps everything until a listing arrives
        store.set_menu(Vec::new());
        assert_eq!(store.cart.item_count(), 2);

        store.set_menu(vec![food("samosa", 15.0)]);
        assert_eq!(store.cart.item_count(), 1);
        assert_eq!(store.cart_total(), 15.0);
    }

    #[test]
    fn server_cart_replaces_local() {
        let mut store = AppStore::new(ApiClient::new("http://localhost:4000"), vault());
        store.set_menu(vec![food("samosa", 15.0), food("chai", 10.0)]);
        store.cart.add("samosa");

        let mut items = CartItems::new();
        items.insert("chai".to_string(), 2);
        items.insert("retired".to_string(), 1);
        store.replace_cart(items);

        assert_eq!(store.cart.quantity("samosa"), 0);
        assert_eq!(store.cart.quantity("chai"), 2);
        assert_eq!(store.cart.quantity("retired"), 0);
    }

    #[test]
    fn client_follows_token() {
        let mut store = AppStore::new(ApiClient::new("http://localhost:4000/"), vault());
        assert!(!store.client().is_authenticated());
        assert_eq!(store.base_url(), "http://localhost:4000");

        store.token = Some("jwt".to_string());
        assert!(store.signed_in());
        assert_eq!(store.client().token(), Some("jwt"));

        store.forget_session();
        assert!(!store.client().is_authenticated());
    }

    const TOKEN: &str = "jwt-session";

    fn authorized(headers: &HeaderMap) -> bool {
        headers.get("token").and_then(|v| v.to_str().ok()) == Some(TOKEN)
    }

    fn not_authorized() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Not Authorized Login Again" })),
        )
            .into_response()
    }

    async fn food_list() -> Json<Value> {
        Json(json!({
            "success": true,
            "data": [
                { "_id": "f1", "name": "Masala Dosa", "price": 60, "category": "South Indian",
                  "image": "dosa.png", "description": "Crispy dosa" },
                { "_id": "f2", "name": "Cold Coffee", "price": 45, "category": "Beverages",
                  "image": "coffee.png", "description": "With ice cream" }
            ]
        }))
    }

    async fn cart_get(headers: HeaderMap) -> Response {
        if !authorized(&headers) {
            return not_authorized();
        }
        Json(json!({ "success": true, "cartData": { "f1": 2 } })).into_response()
    }

    async fn cart_add(headers: HeaderMap, Json(body): Json<Value>) -> Response {
        if !authorized(&headers) {
            return not_authorized();
        }
        if body["itemId"] == "f1" {
            Json(json!({ "success": true, "message": "Added To Cart" })).into_response()
        } else {
            Json(json!({ "success": false, "message": "Item not found" })).into_response()
        }
    }

    async fn profile(headers: HeaderMap) -> Response {
        if !authorized(&headers) {
            return not_authorized();
        }
        Json(json!({
            "success": true,
            "user": { "_id": "u1", "name": "Asha", "email": "asha@college.edu" }
        }))
        .into_response()
    }

    struct Backend {
        url: String,
        order_fetches: Arc<AtomicUsize>,
    }

    async fn start_backend() -> Backend {
        let order_fetches = Arc::new(AtomicUsize::new(0));
        let counter = order_fetches.clone();
        let app = Router::new()
            .route("/api/food/list", get(food_list))
            .route("/api/cart/get", post(cart_get))
            .route("/api/cart/add", post(cart_add))
            .route("/api/user/profile", get(profile))
            .route(
                "/api/order/user-orders",
                get(move |headers: HeaderMap| {
                    let counter = counter.clone();
                    async move {
                        if !authorized(&headers) {
                            return not_authorized();
                        }
                        counter.fetch_add(1, Ordering::SeqCst);
                        Json(json!({ "success": true, "orders": [] })).into_response()
                    }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to port");
        let addr = listener.local_addr().expect("Failed to get local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });
        Backend {
            url: format!("http://{addr}"),
            order_fetches,
        }
    }

    type Handles = (Signal<AppStore>, Signal<ActivityLog>, CartActions);

    /// Root context shared with the test body: where the backend lives and
    /// the store handles captured from inside the tree.
    #[derive(Clone)]
    struct Harness {
        base_url: String,
        show_history: bool,
        handles: Rc<RefCell<Option<Handles>>>,
    }

    impl Harness {
        fn handles(&self) -> Handles {
            (*self.handles.borrow()).expect("shell mounted")
        }
    }

    #[component]
    fn TestApp() -> Element {
        let harness = use_context::<Harness>();
        use_context_provider(|| Signal::new(ActivityLog::default()));
        let config = CanteenConfig::default().with_base_url(harness.base_url.clone());
        rsx! {
            ConfigProvider { config,
                StoreProvider { Shell {} }
            }
        }
    }

    /// Stands in for the app layout: the login popup is only mounted while
    /// `show_login` is set.
    #[component]
    fn Shell() -> Element {
        let harness = use_context::<Harness>();
        let store = use_store();
        let log = use_activity_log();
        let cart = use_cart();
        let handles = harness.handles.clone();
        use_hook(move || *handles.borrow_mut() = Some((store, log, cart)));
        rsx! {
            if store().show_login {
                SignInForm {}
            }
            if harness.show_history {
                OrderHistoryView { on_navigate: move |_| {} }
            }
        }
    }

    /// Signs in from its own task, like the login popup after a successful
    /// registration that returned only a token.
    #[component]
    fn SignInForm() -> Element {
        let session = use_session();
        use_hook(move || {
            spawn(async move {
                session.sign_in(AuthSession {
                    token: TOKEN.to_string(),
                    user: None,
                });
            })
        });
        rsx! { div { "Signing in" } }
    }

    fn mount(base_url: String, vault: SessionVault, show_history: bool) -> (VirtualDom, Harness) {
        let harness = Harness {
            base_url,
            show_history,
            handles: Rc::default(),
        };
        let mut dom = VirtualDom::new(TestApp)
            .with_root_context(harness.clone())
            .with_root_context(vault);
        dom.rebuild_in_place();
        (dom, harness)
    }

    /// Drive the tree until `done` holds, giving up after a few seconds.
    async fn run_until(
        dom: &mut VirtualDom,
        harness: &Harness,
        done: impl Fn(&AppStore, &ActivityLog) -> bool,
    ) -> bool {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            dom.render_immediate(&mut NoOpMutations);
            let (store, log, _) = harness.handles();
            if dom.in_runtime(|| done(&*store.peek(), &*log.peek())) {
                return true;
            }
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep_until(deadline) => return false,
            }
        }
    }

    /// Keep rendering and running tasks for `period`.
    async fn drive_for(dom: &mut VirtualDom, period: Duration) {
        let deadline = tokio::time::Instant::now() + period;
        loop {
            dom.render_immediate(&mut NoOpMutations);
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep_until(deadline) => return,
            }
        }
    }

    #[tokio::test]
    async fn sign_in_loads_account_after_popup_closes() {
        let memory = MemoryTokenStore::new();
        let (mut dom, harness) = mount(start_backend().await.url, SessionVault::new(memory.clone()), false);
        assert!(run_until(&mut dom, &harness, |store, _| !store.loading && !store.menu.is_empty()).await);

        let (mut store, _, _) = harness.handles();
        dom.in_runtime(|| store.write().show_login = true);

        let loaded = run_until(&mut dom, &harness, |store, _| {
            !store.show_login && store.user.is_some() && store.cart.quantity("f1") == 2
        })
        .await;
        assert!(loaded, "server cart and profile adopted after the popup unmounted");

        let snapshot = dom.in_runtime(|| store.peek().clone());
        assert_eq!(snapshot.token.as_deref(), Some(TOKEN));
        assert_eq!(snapshot.user.map(|u| u.name).as_deref(), Some("Asha"));
        assert_eq!(memory.load().unwrap().as_deref(), Some(TOKEN));
    }

    #[tokio::test]
    async fn rejected_token_is_cleared_from_memory_and_storage() {
        let memory = MemoryTokenStore::new();
        memory.save("stale-token").unwrap();
        let (mut dom, harness) = mount(start_backend().await.url, SessionVault::new(memory.clone()), false);
        assert!(run_until(&mut dom, &harness, |store, _| !store.loading).await);

        let (store, log, _) = harness.handles();
        let (token, user, expired) = dom.in_runtime(|| {
            let store = store.peek();
            let expired = log
                .peek()
                .entries
                .iter()
                .any(|e| e.level == LogLevel::Warning && e.message.contains("Session expired"));
            (store.token.clone(), store.user.clone(), expired)
        });
        assert_eq!(token, None);
        assert_eq!(user, None);
        assert!(expired);
        assert_eq!(memory.load().unwrap(), None);
    }

    #[tokio::test]
    async fn failed_cart_sync_keeps_local_quantity() {
        let memory = MemoryTokenStore::new();
        memory.save(TOKEN).unwrap();
        let (mut dom, harness) = mount(start_backend().await.url, SessionVault::new(memory), false);
        let restored = run_until(&mut dom, &harness, |store, _| {
            !store.loading && store.user.is_some() && store.cart.quantity("f1") == 2
        })
        .await;
        assert!(restored);

        let (store, _, cart) = harness.handles();
        dom.in_runtime(|| cart.add("f2"));

        let logged = run_until(&mut dom, &harness, |_, log| {
            log.entries
                .iter()
                .any(|e| e.level == LogLevel::Warning && e.message.starts_with("Cart sync"))
        })
        .await;
        assert!(logged);

        let (f1, f2) = dom.in_runtime(|| {
            let store = store.peek();
            (store.cart.quantity("f1"), store.cart.quantity("f2"))
        });
        assert_eq!((f1, f2), (2, 1));
    }

    #[tokio::test]
    async fn order_history_fetches_once_per_session() {
        let memory = MemoryTokenStore::new();
        memory.save(TOKEN).unwrap();
        let backend = start_backend().await;
        let (mut dom, harness) = mount(backend.url.clone(), SessionVault::new(memory), true);

        let fetched = run_until(&mut dom, &harness, |store, _| {
            store.user.is_some() && backend.order_fetches.load(Ordering::SeqCst) > 0
        })
        .await;
        assert!(fetched);

        // Cart writes touch the store but not the token
        let (_, _, cart) = harness.handles();
        dom.in_runtime(|| {
            cart.add("f1");
            cart.remove("f1");
        });
        drive_for(&mut dom, Duration::from_millis(300)).await;

        assert_eq!(backend.order_fetches.load(Ordering::SeqCst), 1);
    }
}
