//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use appstate::app::{AppState, AppStore, CartItem};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub type SnapshotLog = Arc<Mutex<Vec<AppState>>>;

pub fn book() -> CartItem {
    CartItem::new(7, "Book", 25000.0, 1)
}

pub fn item(id: u64, price: f64, quantity: i64) -> CartItem {
    CartItem::new(id, format!("item-{}", id), price, quantity)
}

/// Subscribe a listener that records every published snapshot.
pub fn record_snapshots(store: &AppStore) -> SnapshotLog {
    let log: SnapshotLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    store.subscribe(move |state| sink.lock().push(state.clone()));
    log
}

/// Recompute Σ price × quantity the same way the cart does.
pub fn expected_total(state: &AppState) -> f64 {
    state
        .cart
        .items
        .iter()
        .fold(0.0, |acc, item| acc + item.price * item.quantity as f64)
}

/// Write `content` to a file inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
