//! Per-section handles over the global store.
//!
//! Each handle borrows the store, reads its own section from the current
//! snapshot and wraps the actions that target that section.

use super::action::AppAction;
use super::state::{Cart, CartItem, NotificationLog, Role, Session, Theme, ThemeMode};
use super::AppStore;

impl AppStore {
    pub fn session(&self) -> SessionHandle<'_> {
        SessionHandle { store: self }
    }

    pub fn theme(&self) -> ThemeHandle<'_> {
        ThemeHandle { store: self }
    }

    pub fn notifications(&self) -> NotificationsHandle<'_> {
        NotificationsHandle { store: self }
    }

    pub fn cart(&self) -> CartHandle<'_> {
        CartHandle { store: self }
    }
}

pub struct SessionHandle<'a> {
    store: &'a AppStore,
}

impl SessionHandle<'_> {
    pub fn current(&self) -> Session {
        self.store.get_state().session.clone()
    }

    pub fn login(&self, name: impl Into<String>, role: Role) {
        self.store.dispatch(AppAction::Login {
            name: name.into(),
            role,
        });
    }

    pub fn logout(&self) {
        self.store.dispatch(AppAction::Logout);
    }
}

pub struct ThemeHandle<'a> {
    store: &'a AppStore,
}

impl ThemeHandle<'_> {
    pub fn current(&self) -> Theme {
        self.store.get_state().theme.clone()
    }

    pub fn change_theme(&self, mode: ThemeMode) {
        self.store.dispatch(AppAction::ChangeTheme(mode));
    }

    pub fn change_primary_color(&self, color: impl Into<String>) {
        self.store.dispatch(AppAction::ChangePrimaryColor(color.into()));
    }
}

pub struct NotificationsHandle<'a> {
    store: &'a AppStore,
}

impl NotificationsHandle<'_> {
    pub fn current(&self) -> NotificationLog {
        self.store.get_state().notifications.clone()
    }

    pub fn add(&self, message: impl Into<String>) {
        self.store.dispatch(AppAction::AddNotification(message.into()));
    }

    pub fn clear(&self) {
        self.store.dispatch(AppAction::ClearNotifications);
    }
}

pub struct CartHandle<'a> {
    store: &'a AppStore,
}

impl CartHandle<'_> {
    pub fn current(&self) -> Cart {
        self.store.get_state().cart.clone()
    }

    pub fn add_to_cart(&self, item: CartItem) {
        self.store.dispatch(AppAction::AddToCart(item));
    }

    pub fn remove_from_cart(&self, id: u64) {
        self.store.dispatch(AppAction::RemoveFromCart(id));
    }

    pub fn update_quantity(&self, id: u64, quantity: i64) {
        self.store.dispatch(AppAction::UpdateCartQuantity { id, quantity });
    }
}
