use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// Shared by every registry so channel ids never collide across registries.
static NEXT_CHANNEL_ID: AtomicUsize = AtomicUsize::new(0);

struct ChannelInner {
    id: usize,
    name: String,
}

/// Identity of a named list channel.
///
/// Cloning a channel clones the handle, not the identity. Two channels are
/// equal only if they came from the same registry entry.
#[derive(Clone)]
pub struct Channel {
    inner: Arc<ChannelInner>,
}

impl Channel {
    fn new(name: &str) -> Self {
        Self {
            inner: Arc::new(ChannelInner {
                id: NEXT_CHANNEL_ID.fetch_add(1, Ordering::SeqCst),
                name: name.to_owned(),
            }),
        }
    }

    pub fn id(&self) -> usize {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Channel {}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}

/// Mapping from list name to channel.
///
/// A registry is owned by the application root and handed to providers and
/// accessors. Entries are created on first use and live as long as the
/// registry. Cloning shares the same entries.
///
/// # Examples
///
/// ```
/// use tinlist::Registry;
///
/// let registry = Registry::new();
/// let a = registry.channel("todos");
/// let b = registry.channel("todos");
/// assert_eq!(a, b);
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    channels: Arc<RwLock<HashMap<String, Channel>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the channel for `name`, creating it on first use.
    pub fn channel(&self, name: &str) -> Channel {
        if let Some(channel) = self.lookup(name) {
            return channel;
        }

        let mut channels = self.channels.write();
        // Another writer may have won the race between the two locks.
        channels
            .entry(name.to_owned())
            .or_insert_with(|| {
                let channel = Channel::new(name);
                tracing::debug!(list = %name, channel = channel.id(), "Created list channel");
                channel
            })
            .clone()
    }

    /// Get the channel for `name` without creating it.
    pub fn lookup(&self, name: &str) -> Option<Channel> {
        self.channels.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.channels.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.channels.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.read().is_empty()
    }

    /// Names of every channel created so far, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.channels.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("channels", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_is_idempotent() {
        let registry = Registry::new();
        let first = registry.channel("a");
        let second = registry.channel("a");
        assert_eq!(first, second);
        assert_eq!(first.id(), second.id());
        assert_eq!(first.name(), "a");
    }

    #[test]
    fn distinct_names_get_distinct_channels() {
        let registry = Registry::new();
        assert_ne!(registry.channel("a"), registry.channel("b"));
        assert_eq!(registry.names(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn lookup_does_not_create() {
        let registry = Registry::new();
        assert!(registry.lookup("missing").is_none());
        assert!(registry.is_empty());
        registry.channel("present");
        assert!(registry.contains("present"));
        assert!(!registry.contains("missing"));
    }

    #[test]
    fn registries_are_isolated() {
        let left = Registry::new();
        let right = Registry::new();
        assert_ne!(left.channel("same"), right.channel("same"));
        assert!(left.clone().contains("same"));
    }
}
