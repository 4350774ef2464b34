//! Ways for code running under a provider to reach its list.
//!
//! All three resolve to the value of the innermost active provider with a
//! matching name:
//! - [`use_list`] returns the list handle directly
//! - [`consume_list`] passes it to a render function
//! - [`with_list_manager`] wraps a component so it receives it as a prop

mod adapter;
mod consumer;

pub use adapter::{with_list_manager, Component, Managed, WithListManager};
pub use consumer::{consume_list, use_list};
