//! List providers and the values they publish.

mod manager;
mod provider;

pub use manager::{KeyedList, ListManager};
pub use provider::ListProvider;
