//! Actions accepted by the global store and their JSON wire form.
//!
//! On the wire an action is `{"type": "<KIND>", "payload": <payload>}`.
//! Unknown kinds decode to [`AppAction::Unrecognized`] so they can be
//! dispatched as no-ops; a known kind with a bad payload is a decode error.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::state::{CartItem, Role, ThemeMode};
use crate::mvi::Intent;

/// One requested transition of the global state tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum AppAction {
    Login { name: String, role: Role },
    Logout,
    ChangeTheme(ThemeMode),
    ChangePrimaryColor(String),
    AddNotification(String),
    ClearNotifications,
    /// Merges into an existing line with the same id, otherwise appends.
    AddToCart(CartItem),
    RemoveFromCart(u64),
    UpdateCartQuantity { id: u64, quantity: i64 },
    /// Kind the reducer does not know; leaves state unchanged.
    Unrecognized(String),
}

impl Intent for AppAction {}

impl AppAction {
    /// Wire name of this action kind.
    pub fn kind(&self) -> &str {
        match self {
            AppAction::Login { .. } => "LOGIN",
            AppAction::Logout => "LOGOUT",
            AppAction::ChangeTheme(_) => "CHANGE_THEME",
            AppAction::ChangePrimaryColor(_) => "CHANGE_PRIMARY_COLOR",
            AppAction::AddNotification(_) => "ADD_NOTIFICATION",
            AppAction::ClearNotifications => "CLEAR_NOTIFICATIONS",
            AppAction::AddToCart(_) => "ADD_TO_CART",
            AppAction::RemoveFromCart(_) => "REMOVE_FROM_CART",
            AppAction::UpdateCartQuantity { .. } => "UPDATE_CART_QUANTITY",
            AppAction::Unrecognized(kind) => kind.as_str(),
        }
    }
}

/// Untyped envelope used for (de)serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

#[derive(Serialize, Deserialize)]
struct LoginPayload {
    name: String,
    role: Role,
}

#[derive(Serialize, Deserialize)]
struct QuantityPayload {
    id: u64,
    quantity: i64,
}

fn payload<T: DeserializeOwned>(kind: &str, payload: Option<Value>) -> Result<T, serde_json::Error> {
    let value = payload
        .ok_or_else(|| serde_json::Error::custom(format!("action {kind} requires a payload")))?;
    serde_json::from_value(value)
}

impl TryFrom<RawAction> for AppAction {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let RawAction { kind, payload: body } = raw;
        let action = match kind.as_str() {
            "LOGIN" => {
                let LoginPayload { name, role } = payload(&kind, body)?;
                AppAction::Login { name, role }
            }
            "LOGOUT" => AppAction::Logout,
            "CHANGE_THEME" => AppAction::ChangeTheme(payload(&kind, body)?),
            "CHANGE_PRIMARY_COLOR" => AppAction::ChangePrimaryColor(payload(&kind, body)?),
            "ADD_NOTIFICATION" => AppAction::AddNotification(payload(&kind, body)?),
            "CLEAR_NOTIFICATIONS" => AppAction::ClearNotifications,
            "ADD_TO_CART" => AppAction::AddToCart(payload(&kind, body)?),
            "REMOVE_FROM_CART" => AppAction::RemoveFromCart(payload(&kind, body)?),
            "UPDATE_CART_QUANTITY" => {
                let QuantityPayload { id, quantity } = payload(&kind, body)?;
                AppAction::UpdateCartQuantity { id, quantity }
            }
            _ => AppAction::Unrecognized(kind),
        };
        Ok(action)
    }
}

impl From<AppAction> for RawAction {
    fn from(action: AppAction) -> Self {
        let kind = action.kind().to_string();
        // Payload types below serialize infallibly (no maps with non-string keys).
        let payload = match action {
            AppAction::Login { name, role } => serde_json::to_value(LoginPayload { name, role }).ok(),
            AppAction::ChangeTheme(mode) => serde_json::to_value(mode).ok(),
            AppAction::ChangePrimaryColor(color) => Some(Value::String(color)),
            AppAction::AddNotification(message) => Some(Value::String(message)),
            AppAction::AddToCart(item) => serde_json::to_value(item).ok(),
            AppAction::RemoveFromCart(id) => Some(Value::from(id)),
            AppAction::UpdateCartQuantity { id, quantity } => {
                serde_json::to_value(QuantityPayload { id, quantity }).ok()
            }
            AppAction::Logout | AppAction::ClearNotifications | AppAction::Unrecognized(_) => None,
        };
        RawAction { kind, payload }
    }
}
