//! Unidirectional state primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Listeners
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable state tree, replaced on every dispatch
//! - **Intent**: Requested transition carrying its own payload
//! - **Reducer**: Pure function `(State, Intent) -> State`
//! - **Store**: Owns the current snapshot and publishes replacements

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
pub use store::{Store, SubscriptionId};
