use serde::{Deserialize, Serialize};

use crate::app::ThemeMode;
use crate::mvi::StoreState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub language: Language,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            language: Language::Ko,
            notifications: true,
        }
    }
}

/// Partial preferences update; `None` fields are left as they are.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreferencesPatch {
    pub theme: Option<ThemeMode>,
    pub language: Option<Language>,
    pub notifications: Option<bool>,
}

impl Preferences {
    pub fn apply(self, patch: PreferencesPatch) -> Self {
        Self {
            theme: patch.theme.unwrap_or(self.theme),
            language: patch.language.unwrap_or(self.language),
            notifications: patch.notifications.unwrap_or(self.notifications),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoState {
    pub todos: Vec<Todo>,
    /// Id handed to the next added todo.
    pub next_id: u64,
    pub sidebar_open: bool,
    pub count: i64,
    pub user: Option<UserProfile>,
}

impl Default for TodoState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
            sidebar_open: false,
            count: 0,
            user: None,
        }
    }
}

impl TodoState {
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed(&self) -> usize {
        self.todos.len() - self.remaining()
    }
}

impl StoreState for TodoState {}
