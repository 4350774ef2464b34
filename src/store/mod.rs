//! List state and the operations over it.
//!
//! `list` holds the pure, snapshot-producing operations. `store` wraps a
//! snapshot in shared state with synchronous change notification.

mod list;
mod store;

pub use list::{appended, find, position, updated, without};
pub use store::{ListStore, Subscription};
