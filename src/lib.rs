//! # Tinlist
//!
//! Named, shareable list state for component trees.
//!
//! A [`ListProvider`] owns an ordered list of JSON items and publishes it
//! under a name to everything it wraps. Code running inside the provider
//! reaches the list by name, with no direct reference to the provider:
//! - [`use_list`] - returns the published [`ListManager`]
//! - [`consume_list`] - passes it to a render function
//! - [`with_list_manager`] - wraps a component so it receives it as a prop
//!
//! ## Keyed lists
//!
//! A list configured with `key_by` identifies items by that field. Keys
//! must be present and unique when an item is added, and the
//! identity-based operations (get, has, update, remove) become available
//! through [`ListManager::keyed`].
//!
//! ## Snapshots
//!
//! Items are exposed as a read-only [`Items`] snapshot. Every change
//! builds a new snapshot and re-publishes it to subscribers synchronously.
//!
//! ```
//! use serde_json::json;
//! use tinlist::{item_from, use_list, ListConfig, ListProvider, Registry};
//!
//! let registry = Registry::new();
//! let provider = ListProvider::new(&registry, ListConfig::new("cart").key_by("sku")).unwrap();
//!
//! provider.provide(|| {
//!     let cart = use_list(&registry, "cart").unwrap();
//!     cart.add_item(item_from(json!({ "sku": "a1", "qty": 1 })).unwrap()).unwrap();
//!
//!     let keyed = cart.keyed().unwrap();
//!     keyed.update_item(&json!("a1"), item_from(json!({ "qty": 3 })).unwrap());
//!     assert_eq!(keyed.get_item(&json!("a1")).unwrap()["qty"], 3);
//! });
//! ```

pub mod config;
pub mod consumer;
pub mod error;
pub mod item;
pub mod provider;
pub mod runtime;
pub mod store;

// Re-export main types for convenience
pub use config::ListConfig;
pub use consumer::{consume_list, use_list, with_list_manager, Component, Managed, WithListManager};
pub use error::{Accessor, ListError, NameSite, Result};
pub use item::{item_from, Item, ItemKey, Items};
pub use provider::{KeyedList, ListManager, ListProvider};
pub use runtime::{Channel, Registry};
pub use store::{ListStore, Subscription};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_works() {
        // Basic smoke test
        let registry = Registry::new();
        let provider = ListProvider::new(&registry, ListConfig::new("smoke")).unwrap();
        let len = provider.provide(|| {
            let list = use_list(&registry, "smoke").unwrap();
            list.add_item(item_from(json!({ "n": 42 })).unwrap()).unwrap();
            list.items().len()
        });
        assert_eq!(len, 1);
    }
}
