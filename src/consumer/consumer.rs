use crate::error::{Accessor, ListError, NameSite, Result};
use crate::provider::ListManager;
use crate::runtime::{self, Registry};

/// Resolve the list `name` from the innermost matching provider.
pub(crate) fn resolve(registry: &Registry, name: &str, accessor: Accessor) -> Result<ListManager> {
    let not_found = || ListError::NoProvider {
        name: name.to_owned(),
        accessor,
    };
    let channel = registry.lookup(name).ok_or_else(not_found)?;
    runtime::nearest(&channel).ok_or_else(not_found)
}

/// Get the list published under `name`.
///
/// Fails with [`ListError::MissingName`] for an empty name and with
/// [`ListError::NoProvider`] when no enclosing provider publishes `name`.
///
/// ```
/// use tinlist::{use_list, ListConfig, ListError, ListProvider, Registry};
///
/// let registry = Registry::new();
/// let provider = ListProvider::new(&registry, ListConfig::new("todos")).unwrap();
///
/// provider.provide(|| {
///     assert!(use_list(&registry, "todos").unwrap().items().is_empty());
///     assert!(matches!(
///         use_list(&registry, "other"),
///         Err(ListError::NoProvider { .. })
///     ));
/// });
/// ```
pub fn use_list(registry: &Registry, name: &str) -> Result<ListManager> {
    if name.is_empty() {
        return Err(ListError::MissingName {
            site: NameSite::UseList,
        });
    }
    resolve(registry, name, Accessor::UseList)
}

/// Render `render` with the list published under `name`.
///
/// Same failures as [`use_list`].
pub fn consume_list<F, R>(registry: &Registry, name: &str, render: F) -> Result<R>
where
    F: FnOnce(&ListManager) -> R,
{
    if name.is_empty() {
        return Err(ListError::MissingName {
            site: NameSite::Consumer,
        });
    }
    let list = resolve(registry, name, Accessor::Consumer)?;
    Ok(render(&list))
}
