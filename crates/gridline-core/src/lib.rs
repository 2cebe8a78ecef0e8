//! Gridline Core - signal plumbing for the Gridline table widget.
//!
//! This crate provides the notification channel the widget and its data
//! store communicate over: a type-safe, Qt-inspired signal/slot mechanism.
//! The table core is single-threaded and event-driven, so slots are always
//! invoked directly on the emitting thread; there is no queued cross-thread
//! delivery.

pub mod signal;

pub use signal::{ConnectionId, Signal};
