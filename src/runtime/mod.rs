//! Runtime support for named lists.
//!
//! This module provides the channel registry that maps list names to
//! channel identities, and the provider scope that tracks which list value
//! is visible to the code currently running under a provider.

mod registry;
mod scope;

pub use registry::{Channel, Registry};
pub(crate) use scope::{nearest, with_provider};
