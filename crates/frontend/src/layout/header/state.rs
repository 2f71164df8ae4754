use contracts::shop::cart::CartItem;
use contracts::system::auth::UserSession;
use leptos::prelude::*;

use crate::shop::cart::SharedCart;
use crate::system::auth::SharedAuth;

/// Visibility flags of the storefront header plus handles to the cart and
/// session it reads from.
///
/// Every flag starts closed and changes only through the methods below.
#[derive(Clone, Copy)]
pub struct HeaderState {
    pub mobile_menu_open: RwSignal<bool>,
    pub cart_preview_open: RwSignal<bool>,
    pub auth_modal_open: RwSignal<bool>,
    pub checkout_modal_open: RwSignal<bool>,
    pub user_menu_open: RwSignal<bool>,
    cart: StoredValue<SharedCart>,
    auth: StoredValue<SharedAuth>,
}

impl HeaderState {
    pub fn new(cart: SharedCart, auth: SharedAuth) -> Self {
        Self {
            mobile_menu_open: RwSignal::new(false),
            cart_preview_open: RwSignal::new(false),
            auth_modal_open: RwSignal::new(false),
            checkout_modal_open: RwSignal::new(false),
            user_menu_open: RwSignal::new(false),
            cart: StoredValue::new(cart),
            auth: StoredValue::new(auth),
        }
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|val| *val = !*val);
    }

    pub fn toggle_cart_preview(&self) {
        self.cart_preview_open.update(|val| *val = !*val);
    }

    pub fn toggle_user_menu(&self) {
        self.user_menu_open.update(|val| *val = !*val);
    }

    pub fn open_auth_modal(&self) {
        self.auth_modal_open.set(true);
    }

    pub fn close_auth_modal(&self) {
        self.auth_modal_open.set(false);
    }

    pub fn close_checkout_modal(&self) {
        self.checkout_modal_open.set(false);
    }

    pub fn session(&self) -> Option<UserSession> {
        self.auth.with_value(|auth| auth.session())
    }

    pub fn cart_items(&self) -> Vec<CartItem> {
        self.cart.with_value(|cart| cart.items())
    }

    /// Units in the cart, not lines
    pub fn cart_count(&self) -> u32 {
        self.cart.with_value(|cart| cart.total_count())
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.with_value(|cart| cart.total_price())
    }

    pub fn checkout_enabled(&self) -> bool {
        self.cart.with_value(|cart| cart.total_count() > 0)
    }

    /// Sends signed-out shoppers to the auth modal and signed-in ones to checkout.
    /// The cart preview closes either way.
    pub fn initiate_checkout(&self) {
        if !self.checkout_enabled() {
            log::warn!("Checkout requested with an empty cart, ignoring");
            return;
        }

        if self.session().is_some() {
            self.checkout_modal_open.set(true);
        } else {
            log::debug!("Checkout needs a session, opening sign in");
            self.auth_modal_open.set(true);
        }
        self.cart_preview_open.set(false);
    }

    /// Auth modal success callback: continue straight into checkout
    pub fn on_auth_success(&self) {
        self.auth_modal_open.set(false);
        self.checkout_modal_open.set(true);
    }

    /// Failures are only logged; the user menu stays open and nothing is retried.
    pub async fn sign_out(&self) {
        let auth = self.auth.get_value();
        match auth.sign_out().await {
            Ok(()) => self.user_menu_open.set(false),
            Err(e) => log::error!("Logout error: {}", e),
        }
    }

    pub fn remove_cart_item(&self, id: &str) {
        self.cart.with_value(|cart| cart.remove(id));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::shared::config::config;
    use crate::shared::format::format_price;
    use crate::shop::cart::{CartProvider, CartStore};
    use crate::system::auth::{AuthError, AuthProvider};

    struct StubAuth {
        session: Option<UserSession>,
        fail_sign_out: bool,
        sign_out_calls: AtomicUsize,
    }

    impl StubAuth {
        fn signed_in() -> Self {
            Self {
                session: Some(UserSession {
                    display_name: "Jane Doe".into(),
                    email: "jane@example.com".into(),
                }),
                fail_sign_out: false,
                sign_out_calls: AtomicUsize::new(0),
            }
        }

        fn signed_out() -> Self {
            Self {
                session: None,
                ..Self::signed_in()
            }
        }

        fn failing() -> Self {
            Self {
                fail_sign_out: true,
                ..Self::signed_in()
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthProvider for StubAuth {
        fn session(&self) -> Option<UserSession> {
            self.session.clone()
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_sign_out {
                Err(AuthError::SessionTermination("network down".into()))
            } else {
                Ok(())
            }
        }
    }

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            image_url: String::new(),
            price,
            quantity,
        }
    }

    fn header(items: Vec<CartItem>, auth: StubAuth) -> (HeaderState, CartStore) {
        let cart = CartStore::with_items(items);
        let state = HeaderState::new(Arc::new(cart), Arc::new(auth));
        (state, cart)
    }

    fn flags(state: &HeaderState) -> [bool; 5] {
        [
            state.mobile_menu_open.get_untracked(),
            state.cart_preview_open.get_untracked(),
            state.auth_modal_open.get_untracked(),
            state.checkout_modal_open.get_untracked(),
            state.user_menu_open.get_untracked(),
        ]
    }

    #[test]
    fn test_all_flags_start_closed() {
        let (state, _) = header(vec![], StubAuth::signed_out());
        assert_eq!(flags(&state), [false; 5]);
    }

    #[test]
    fn test_toggles_are_independent() {
        let (state, _) = header(vec![], StubAuth::signed_in());

        state.toggle_mobile_menu();
        assert_eq!(flags(&state), [true, false, false, false, false]);

        state.toggle_cart_preview();
        state.toggle_user_menu();
        assert_eq!(flags(&state), [true, true, false, false, true]);

        state.toggle_mobile_menu();
        state.toggle_cart_preview();
        assert_eq!(flags(&state), [false, false, false, false, true]);
    }

    #[test]
    fn test_count_and_total_follow_cart() {
        let (state, cart) = header(vec![item("1", 10.005, 2)], StubAuth::signed_out());
        assert_eq!(state.cart_count(), 2);
        assert_eq!(format_price(state.cart_total(), &config().currency_symbol), "$20.01");

        cart.add(item("2", 1.25, 3));
        assert_eq!(state.cart_count(), 5);
        assert_eq!(format_price(state.cart_total(), "$"), "$23.76");

        let (tie, _) = header(vec![item("3", 4.125, 1)], StubAuth::signed_out());
        assert_eq!(format_price(tie.cart_total(), "$"), "$4.13");
    }

    #[test]
    fn test_checkout_enabled_only_with_items() {
        let (state, cart) = header(vec![], StubAuth::signed_in());
        assert!(!state.checkout_enabled());

        cart.add(item("1", 5.0, 1));
        assert!(state.checkout_enabled());

        state.remove_cart_item("1");
        assert!(!state.checkout_enabled());
    }

    #[test]
    fn test_checkout_without_session_opens_auth() {
        let (state, _) = header(vec![item("1", 5.0, 1)], StubAuth::signed_out());
        state.toggle_cart_preview();

        state.initiate_checkout();

        assert!(state.auth_modal_open.get_untracked());
        assert!(!state.cart_preview_open.get_untracked());
        assert!(!state.checkout_modal_open.get_untracked());
    }

    #[test]
    fn test_checkout_with_session_opens_checkout() {
        let (state, _) = header(vec![item("1", 5.0, 1)], StubAuth::signed_in());
        state.toggle_cart_preview();

        state.initiate_checkout();

        assert!(state.checkout_modal_open.get_untracked());
        assert!(!state.cart_preview_open.get_untracked());
        assert!(!state.auth_modal_open.get_untracked());
    }

    #[test]
    fn test_checkout_on_empty_cart_is_ignored() {
        let (state, _) = header(vec![], StubAuth::signed_out());
        state.toggle_cart_preview();

        state.initiate_checkout();

        assert_eq!(flags(&state), [false, true, false, false, false]);
    }

    #[test]
    fn test_auth_success_chains_into_checkout() {
        let (state, _) = header(vec![item("1", 5.0, 1)], StubAuth::signed_out());
        state.initiate_checkout();

        state.on_auth_success();

        assert!(!state.auth_modal_open.get_untracked());
        assert!(state.checkout_modal_open.get_untracked());
    }

    #[test]
    fn test_auth_success_when_checkout_already_open() {
        let (state, _) = header(vec![], StubAuth::signed_out());
        state.open_auth_modal();
        state.checkout_modal_open.set(true);

        state.on_auth_success();

        assert!(!state.auth_modal_open.get_untracked());
        assert!(state.checkout_modal_open.get_untracked());
    }

    #[test]
    fn test_close_callbacks_only_touch_their_modal() {
        let (state, _) = header(vec![], StubAuth::signed_out());
        state.open_auth_modal();
        state.checkout_modal_open.set(true);

        state.close_auth_modal();
        assert_eq!(flags(&state), [false, false, false, true, false]);

        state.close_checkout_modal();
        assert_eq!(flags(&state), [false; 5]);
    }

    #[test]
    fn test_remove_cart_item_delegates_to_provider() {
        let (state, cart) = header(vec![item("1", 5.0, 1), item("2", 2.0, 4)], StubAuth::signed_in());

        state.remove_cart_item("1");

        assert_eq!(cart.items().len(), 1);
        assert_eq!(state.cart_count(), 4);
    }

    #[tokio::test]
    async fn test_sign_out_closes_user_menu() {
        let (state, _) = header(vec![], StubAuth::signed_in());
        state.toggle_user_menu();

        state.sign_out().await;

        assert!(!state.user_menu_open.get_untracked());
    }

    #[tokio::test]
    async fn test_failed_sign_out_leaves_state_alone() {
        let auth = Arc::new(StubAuth::failing());
        let cart = CartStore::new();
        let state = HeaderState::new(Arc::new(cart), auth.clone());
        state.toggle_user_menu();
        state.toggle_mobile_menu();
        let before = flags(&state);

        state.sign_out().await;

        assert_eq!(flags(&state), before);
        assert!(state.user_menu_open.get_untracked());
        assert_eq!(auth.sign_out_calls.load(Ordering::SeqCst), 1);
    }
}
