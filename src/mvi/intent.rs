//! Base trait for intents (actions) dispatched to a store.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents describe one requested transition: a user gesture, a replayed
/// log entry, or anything else that should change state. They are consumed
/// by the reducer.
pub trait Intent: Debug + Send + 'static {}
