use serde::{Deserialize, Serialize};

use crate::error::{ListError, NameSite, Result};

/// Mount-time configuration of a list provider.
///
/// ```
/// use tinlist::ListConfig;
///
/// let config = ListConfig::new("todos").key_by("id");
/// assert_eq!(config.name, "todos");
/// assert_eq!(config.key_by.as_deref(), Some("id"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Name the list is published under.
    #[serde(default)]
    pub name: String,
    /// Field used as the unique item identifier.
    #[serde(default, rename = "keyBy", alias = "key_by")]
    pub key_by: Option<String>,
}

impl ListConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_by: None,
        }
    }

    /// Key items by `field`, enabling the identity-based operations.
    pub fn key_by(mut self, field: impl Into<String>) -> Self {
        self.key_by = Some(field.into());
        self
    }

    /// Check the name and normalise an empty `key_by` to unset.
    pub fn validate(mut self) -> Result<Self> {
        if self.name.is_empty() {
            return Err(ListError::MissingName {
                site: NameSite::Provider,
            });
        }
        if self.key_by.as_deref() == Some("") {
            self.key_by = None;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let err = ListConfig::default().validate().unwrap_err();
        assert_eq!(
            err,
            ListError::MissingName {
                site: NameSite::Provider
            }
        );
    }

    #[test]
    fn empty_key_by_means_unkeyed() {
        let config = ListConfig::new("a").key_by("").validate().unwrap();
        assert_eq!(config.key_by, None);
    }

    #[test]
    fn deserializes_from_json() {
        let config: ListConfig =
            serde_json::from_str(r#"{ "name": "todos", "keyBy": "id" }"#).unwrap();
        assert_eq!(config, ListConfig::new("todos").key_by("id"));

        let config: ListConfig = serde_json::from_str(r#"{ "name": "todos" }"#).unwrap();
        assert_eq!(config.key_by, None);
    }
}
