use std::convert::Infallible;
use std::fmt;

use crate::config::ListConfig;
use crate::error::{ListError, Result};
use crate::item::{is_usable_key, key_of, Item, ItemKey, Items};
use crate::runtime::Channel;
use crate::store::{self, ListStore, Subscription};

/// The value a provider publishes on its channel.
///
/// Every handle cloned from the same provider operates on the same list.
/// The identity-based operations are only reachable through
/// [`ListManager::keyed`], which is `Some` exactly when the list was
/// configured with `key_by`.
#[derive(Clone)]
pub struct ListManager {
    channel: Channel,
    config: ListConfig,
    store: ListStore,
}

impl ListManager {
    pub(crate) fn new(channel: Channel, config: ListConfig) -> Self {
        Self {
            channel,
            config,
            store: ListStore::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn key_by(&self) -> Option<&str> {
        self.config.key_by.as_deref()
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// The current read-only snapshot.
    pub fn items(&self) -> Items {
        self.store.get()
    }

    /// Append `item` to the end of the list.
    ///
    /// With `key_by` set the item must carry a non-empty key that no current
    /// item has; otherwise the list is left unchanged and
    /// [`ListError::InvalidKey`] is returned.
    pub fn add_item(&self, item: Item) -> Result<()> {
        self.store.try_update(|items| {
            if let Some(key_by) = self.key_by() {
                let unique = key_of(&item, key_by).is_some_and(|key| {
                    is_usable_key(key) && store::find(items, key_by, key).is_none()
                });
                if !unique {
                    return Err(ListError::InvalidKey {
                        key_by: key_by.to_owned(),
                        list: self.name().to_owned(),
                    });
                }
            }
            Ok(Some(store::appended(items, item)))
        })?;
        self.log_change("add_item");
        Ok(())
    }

    /// Reset the list to empty.
    pub fn clear_items(&self) {
        self.store.set(Items::from(Vec::new()));
        self.log_change("clear_items");
    }

    /// Identity-based operations, available when the list is keyed.
    pub fn keyed(&self) -> Option<KeyedList> {
        self.config.key_by.clone().map(|key_by| KeyedList {
            manager: self.clone(),
            key_by,
        })
    }

    /// Call `callback` with every new snapshot this list publishes.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Items) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    /// Whether both handles refer to the same provider's list.
    pub fn same_list(&self, other: &ListManager) -> bool {
        self.store.ptr_eq(&other.store)
    }

    fn log_change(&self, op: &'static str) {
        tracing::debug!(list = %self.name(), op, len = self.store.get().len(), "List updated");
    }
}

impl fmt::Debug for ListManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListManager")
            .field("name", &self.config.name)
            .field("key_by", &self.config.key_by)
            .field("items", &self.store.get())
            .finish()
    }
}

/// Operations that address items by their `key_by` value.
///
/// Unknown ids are tolerated: updating or removing an item that is not in
/// the list changes nothing and is not an error.
#[derive(Clone, Debug)]
pub struct KeyedList {
    manager: ListManager,
    key_by: String,
}

impl KeyedList {
    pub fn key_by(&self) -> &str {
        &self.key_by
    }

    /// The first item keyed `id`.
    pub fn get_item(&self, id: &ItemKey) -> Option<Item> {
        store::find(&self.manager.items(), &self.key_by, id).cloned()
    }

    pub fn has_item(&self, id: &ItemKey) -> bool {
        store::position(&self.manager.items(), &self.key_by, id).is_some()
    }

    /// Merge `patch` over the item keyed `id`, keeping its position and key.
    ///
    /// Returns `false` without publishing when no item matches.
    pub fn update_item(&self, id: &ItemKey, patch: Item) -> bool {
        let changed = self
            .manager
            .store
            .try_update(|items| Ok::<_, Infallible>(store::updated(items, &self.key_by, id, patch)))
            .unwrap_or_else(|e| match e {});
        if changed {
            self.manager.log_change("update_item");
        }
        changed
    }

    /// Remove the item keyed `id`.
    pub fn remove_item(&self, id: &ItemKey) {
        self.remove_items(std::slice::from_ref(id));
    }

    /// Remove every item whose key is in `ids`.
    pub fn remove_items(&self, ids: &[ItemKey]) {
        let published = self
            .manager
            .store
            .try_update(|items| Ok::<_, Infallible>(Some(store::without(items, &self.key_by, ids))))
            .unwrap_or_else(|e| match e {});
        if published {
            self.manager.log_change("remove_items");
        }
    }

    /// The list this view operates on.
    pub fn manager(&self) -> &ListManager {
        &self.manager
    }
}
