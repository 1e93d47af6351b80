//! Todo list store.
//!
//! A second, smaller store built on the same primitives as the global one:
//! todos, a counter, a sidebar flag and an optional user profile with
//! preferences.
//!
//! - `state.rs` - Todo list, counter, profile
//! - `intent.rs` - Actions on each slice
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::TodoIntent;
pub use reducer::TodoReducer;
pub use state::{Language, Preferences, PreferencesPatch, Todo, TodoState, UserProfile};

use crate::mvi::Store;

pub type TodoStore = Store<TodoReducer>;
