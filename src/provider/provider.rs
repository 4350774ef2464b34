use super::{KeyedList, ListManager};
use crate::config::ListConfig;
use crate::error::Result;
use crate::item::Items;
use crate::runtime::{self, Channel, Registry};
use crate::store::Subscription;

/// Owns one list and publishes it under a name.
///
/// The list starts empty when the provider is created and is dropped with
/// the provider, unless a [`ListManager`] handle is still held elsewhere.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tinlist::{item_from, use_list, ListConfig, ListProvider, Registry};
///
/// let registry = Registry::new();
/// let provider = ListProvider::new(&registry, ListConfig::new("todos").key_by("id")).unwrap();
///
/// provider.provide(|| {
///     let todos = use_list(&registry, "todos").unwrap();
///     todos.add_item(item_from(json!({ "id": 1, "title": "milk" })).unwrap()).unwrap();
/// });
///
/// assert_eq!(provider.items().len(), 1);
/// ```
pub struct ListProvider {
    manager: ListManager,
}

impl ListProvider {
    /// Create a provider for `config`, registering its channel.
    ///
    /// Fails with [`crate::ListError::MissingName`] if the name is empty.
    pub fn new(registry: &Registry, config: ListConfig) -> Result<Self> {
        let config = config.validate()?;
        let channel = registry.channel(&config.name);
        tracing::debug!(
            list = %config.name,
            key_by = ?config.key_by,
            channel = channel.id(),
            "Mounted list provider"
        );
        Ok(Self {
            manager: ListManager::new(channel, config),
        })
    }

    /// Run `children` with this list visible to every accessor inside it.
    ///
    /// A provider nested inside another one with the same name shadows it
    /// for the code it wraps.
    pub fn provide<F, R>(&self, children: F) -> R
    where
        F: FnOnce() -> R,
    {
        runtime::with_provider(self.manager.channel(), self.manager.clone(), children)
    }

    /// Typed handle to the published list, usable without a name lookup.
    pub fn manager(&self) -> ListManager {
        self.manager.clone()
    }

    /// Shortcut for `manager().keyed()`.
    pub fn keyed(&self) -> Option<KeyedList> {
        self.manager.keyed()
    }

    /// Call `callback` every time the list is re-published.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Items) + Send + Sync + 'static,
    {
        self.manager.subscribe(callback)
    }

    pub fn items(&self) -> Items {
        self.manager.items()
    }

    pub fn name(&self) -> &str {
        self.manager.name()
    }

    pub fn key_by(&self) -> Option<&str> {
        self.manager.key_by()
    }

    pub fn channel(&self) -> &Channel {
        self.manager.channel()
    }
}

impl Drop for ListProvider {
    fn drop(&mut self) {
        tracing::debug!(list = %self.manager.name(), "Unmounted list provider");
    }
}
