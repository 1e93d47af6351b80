//! Global state tree and its sections.

use serde::{Deserialize, Serialize};

use crate::mvi::StoreState;

/// Primary colour used when nothing else is configured.
pub const DEFAULT_PRIMARY_COLOR: &str = "#007bff";

/// Access level of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    #[default]
    Guest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Who is logged in.
///
/// `role` is `Guest` whenever `is_logged_in` is false: the only transition
/// that clears the login flag resets the whole section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub name: String,
    pub is_logged_in: bool,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.is_logged_in && self.role == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub mode: ThemeMode,
    /// Colour token; stored as given, never validated.
    pub primary_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
        }
    }
}

/// Ordered notification messages. `count` always equals `messages.len()`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationLog {
    pub count: usize,
    pub messages: Vec<String>,
}

impl NotificationLog {
    /// Most recently added message.
    pub fn latest(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    pub(crate) fn push(mut self, message: String) -> Self {
        self.messages.push(message);
        self.count = self.messages.len();
        self
    }
}

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub name: String,
    pub price: f64,
    /// Signed: quantity updates are applied as given, without clamping.
    pub quantity: i64,
}

impl CartItem {
    pub fn new(id: u64, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Cart items keyed by id, in insertion order.
///
/// `total` is derived from `items` after every change and is never set
/// independently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl Cart {
    /// Build a cart from items, deriving the total.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = Self::sum(&items);
        Self { items, total }
    }

    /// Σ price × quantity, folded left from zero in item order.
    pub fn sum(items: &[CartItem]) -> f64 {
        items.iter().fold(0.0, |acc, item| acc + item.subtotal())
    }

    pub fn find(&self, id: u64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines, saturating at the `i64` bounds.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.quantity))
    }
}

/// The whole global state tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(rename = "user")]
    pub session: Session,
    pub theme: Theme,
    pub notifications: NotificationLog,
    pub cart: Cart,
}

impl StoreState for AppState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_guest() {
        let session = Session::default();
        assert_eq!(session.name, "");
        assert!(!session.is_logged_in);
        assert_eq!(session.role, Role::Guest);
        assert!(!session.is_admin());
    }

    #[test]
    fn default_theme_uses_light_and_blue() {
        let theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.primary_color, "#007bff");
    }

    #[test]
    fn empty_cart_total_is_positive_zero() {
        let cart = Cart::from_items(Vec::new());
        assert_eq!(cart.total, 0.0);
        assert!(cart.total.is_sign_positive());
    }

    #[test]
    fn cart_projections() {
        let cart = Cart::from_items(vec![
            CartItem::new(1, "Pen", 1.5, 4),
            CartItem::new(2, "Ink", 10.0, 0),
        ]);
        assert_eq!(cart.total, 6.0);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.find(2).map(|item| item.name.as_str()), Some("Ink"));
        assert!(cart.find(3).is_none());
    }

    #[test]
    fn item_count_saturates() {
        let cart = Cart::from_items(vec![
            CartItem::new(1, "Pen", 1.0, i64::MAX),
            CartItem::new(2, "Ink", 1.0, 1),
        ]);
        assert_eq!(cart.item_count(), i64::MAX);

        let cart = Cart::from_items(vec![
            CartItem::new(1, "Pen", 1.0, i64::MIN),
            CartItem::new(2, "Ink", 1.0, -1),
        ]);
        assert_eq!(cart.item_count(), i64::MIN);
    }

    #[test]
    fn state_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(AppState::default()).unwrap();
        assert_eq!(json["user"]["isLoggedIn"], false);
        assert_eq!(json["user"]["role"], "guest");
        assert_eq!(json["theme"]["primaryColor"], "#007bff");
        assert_eq!(json["notifications"]["count"], 0);
        assert_eq!(json["cart"]["total"], 0.0);
    }
}
