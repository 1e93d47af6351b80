//! Base trait for state trees held by a store.

/// Marker trait for state trees.
///
/// States should be:
/// - Immutable (Clone to derive the next state)
/// - Comparable (PartialEq for selector change detection)
/// - Shareable (snapshots are handed out as `Arc<Self>`)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
