//! Reducer for the global state tree.

use crate::mvi::Reducer;

use super::action::AppAction;
use super::state::{AppState, Cart, CartItem, NotificationLog, Session};

/// Pure transition function for [`AppState`].
///
/// Each action touches exactly one section; every other section is carried
/// over untouched. Cart totals are recomputed from the items after every
/// cart change.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppAction::Login { name, role } => AppState {
                session: Session {
                    name,
                    is_logged_in: true,
                    role,
                },
                ..state
            },
            AppAction::Logout => AppState {
                session: Session::default(),
                ..state
            },
            AppAction::ChangeTheme(mode) => {
                let mut theme = state.theme;
                theme.mode = mode;
                AppState { theme, ..state }
            }
            AppAction::ChangePrimaryColor(color) => {
                let mut theme = state.theme;
                theme.primary_color = color;
                AppState { theme, ..state }
            }
            AppAction::AddNotification(message) => AppState {
                notifications: state.notifications.push(message),
                ..state
            },
            AppAction::ClearNotifications => AppState {
                notifications: NotificationLog::default(),
                ..state
            },
            AppAction::AddToCart(item) => AppState {
                cart: add_to_cart(state.cart, item),
                ..state
            },
            AppAction::RemoveFromCart(id) => {
                let mut items = state.cart.items;
                items.retain(|item| item.id != id);
                AppState {
                    cart: Cart::from_items(items),
                    ..state
                }
            }
            AppAction::UpdateCartQuantity { id, quantity } => {
                let mut items = state.cart.items;
                if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                    item.quantity = quantity;
                }
                AppState {
                    cart: Cart::from_items(items),
                    ..state
                }
            }
            AppAction::Unrecognized(kind) => {
                tracing::debug!(kind = %kind, "Ignoring unrecognized action");
                state
            }
        }
    }
}

// Merge is keyed strictly by id; the existing line keeps its name and price.
// Quantities saturate at the i64 bounds.
fn add_to_cart(cart: Cart, incoming: CartItem) -> Cart {
    let mut items = cart.items;
    match items.iter_mut().find(|item| item.id == incoming.id) {
        Some(existing) => existing.quantity = existing.quantity.saturating_add(incoming.quantity),
        None => items.push(incoming),
    }
    Cart::from_items(items)
}
