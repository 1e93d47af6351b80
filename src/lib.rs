//! Reducer-driven application state.
//!
//! [`app::AppStore`] holds the global state tree (session, theme,
//! notifications, cart) and changes it only through dispatched actions.
//! [`todos::TodoStore`] is a smaller store built on the same [`mvi`]
//! primitives.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod replay;
pub mod todos;
