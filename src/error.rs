use std::fmt;

/// Where a list name was required but missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSite {
    Provider,
    UseList,
    Consumer,
    WithListManager,
}

impl fmt::Display for NameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSite::Provider => f.write_str("lists must have a unique name"),
            NameSite::UseList => f.write_str("use_list() requires a `name`"),
            NameSite::Consumer => f.write_str("consume_list() requires a `name`"),
            NameSite::WithListManager => f.write_str(
                "with_list_manager() requires a `name` config passed as the last argument",
            ),
        }
    }
}

/// The accessor that failed to find a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    UseList,
    Consumer,
    WithListManager,
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::UseList => f.write_str("use_list()"),
            Accessor::Consumer => f.write_str("consume_list()"),
            Accessor::WithListManager => f.write_str("with_list_manager() component"),
        }
    }
}

/// Errors raised by providers, accessors and list operations.
///
/// All of them are misuse of the API and are returned at the call site.
/// Unknown ids passed to `update_item`/`remove_item`/`remove_items` are not
/// errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListError {
    #[error("missing list name: {site}")]
    MissingName { site: NameSite },

    #[error("{accessor} must be called from a descendant of the provider with a matching name (list '{name}')")]
    NoProvider { name: String, accessor: Accessor },

    #[error("add_item() must be provided an item with a unique '{key_by}' when the 'key_by' config is set. Check your list '{list}'.")]
    InvalidKey { key_by: String, list: String },
}

pub type Result<T> = std::result::Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_caller() {
        let err = ListError::NoProvider {
            name: "todos".into(),
            accessor: Accessor::WithListManager,
        };
        assert!(err.to_string().contains("with_list_manager() component"));
        assert!(err.to_string().contains("'todos'"));

        let err = ListError::MissingName {
            site: NameSite::Consumer,
        };
        assert!(err.to_string().contains("consume_list() requires a `name`"));
    }

    #[test]
    fn invalid_key_names_field_and_list() {
        let err = ListError::InvalidKey {
            key_by: "id".into(),
            list: "todos".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unique 'id'"));
        assert!(msg.contains("Check your list 'todos'"));
    }
}
