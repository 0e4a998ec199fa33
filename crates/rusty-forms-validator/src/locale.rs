// File: src/locale.rs
// Purpose: Localized error message lookup

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Maps message locale keys to localized text
pub trait MessageCatalog {
    /// Localized text for `key`, or `None` when the catalog has no entry
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Catalog without entries; every failing field gets the fallback message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCatalog;

impl MessageCatalog for NoCatalog {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

impl MessageCatalog for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for &C {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Messages for one locale, usually loaded from a TOML file:
///
/// ```toml
/// locale = "en"
///
/// [messages]
/// "email.invalid" = "Please enter a valid email address"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleCatalog {
    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl LocaleCatalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            messages: HashMap::new(),
        }
    }

    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content).context("Failed to parse message catalog")
    }

    /// Load a catalog file; a missing or empty file yields an empty catalog
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "message catalog not found, using empty catalog");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read message catalog: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load message catalog: {:?}", path))
    }
}

impl MessageCatalog for LocaleCatalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.messages.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_catalog() {
        assert_eq!(NoCatalog.lookup("anything"), None);
    }

    #[test]
    fn test_hash_map_catalog() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), "Alpha".to_string());
        assert_eq!(map.lookup("a"), Some("Alpha".to_string()));
        assert_eq!(map.lookup("b"), None);
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = LocaleCatalog::from_toml_str(
            r#"
            locale = "fr"

            [messages]
            "email.invalid" = "Adresse e-mail invalide"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.locale.as_deref(), Some("fr"));
        assert_eq!(
            catalog.lookup("email.invalid"),
            Some("Adresse e-mail invalide".to_string())
        );
    }

    #[test]
    fn test_load_missing_and_present_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = LocaleCatalog::load(dir.path().join("missing.toml")).unwrap();
        assert!(missing.messages.is_empty());

        let path = dir.path().join("en.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[messages]\n\"name.short\" = \"Name is too short\"").unwrap();

        let catalog = LocaleCatalog::load(&path).unwrap();
        assert_eq!(catalog.lookup("name.short"), Some("Name is too short".to_string()));
    }

    #[test]
    fn test_bad_catalog_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[messages\n").unwrap();

        let err = LocaleCatalog::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }
}
