use crate::mvi::Intent;

use super::state::{PreferencesPatch, UserProfile};

#[derive(Debug, Clone)]
pub enum TodoIntent {
    /// Text is trimmed; blank text is ignored.
    AddTodo { text: String },
    ToggleTodo { id: u64 },
    RemoveTodo { id: u64 },
    ClearCompleted,
    SetUser(UserProfile),
    /// No-op while no user is set.
    UpdatePreferences(PreferencesPatch),
    ToggleSidebar,
    Increment,
    Decrement,
    ResetCount,
}

impl Intent for TodoIntent {}
