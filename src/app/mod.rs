//! Global application store.
//!
//! Holds the session, theme, notification log and cart sections in one
//! immutable [`AppState`] tree and changes it only through [`AppAction`]s.
//!
//! - `state.rs` - State tree and section types
//! - `action.rs` - Action enum and its JSON wire form
//! - `reducer.rs` - Pure transitions
//! - `accessors.rs` - Per-section handles over an [`AppStore`]

mod accessors;
mod action;
mod reducer;
mod state;

pub use accessors::{CartHandle, NotificationsHandle, SessionHandle, ThemeHandle};
pub use action::{AppAction, RawAction};
pub use reducer::AppReducer;
pub use state::{
    AppState, Cart, CartItem, NotificationLog, Role, Session, Theme, ThemeMode,
    DEFAULT_PRIMARY_COLOR,
};

use crate::config::Config;
use crate::mvi::Store;

/// Store over the global state tree.
pub type AppStore = Store<AppReducer>;

impl Store<AppReducer> {
    /// Build the store with the initial theme taken from configuration.
    ///
    /// Every other section starts from its default.
    pub fn from_config(config: &Config) -> Self {
        Self::with_state(AppState {
            theme: config.theme.initial_theme(),
            ..AppState::default()
        })
    }
}
