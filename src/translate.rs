use crate::config::Config;
use crate::ucfirst;
use log::debug;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// A message stored in a translation catalog.
///
/// Catalogs can hold nested groups of messages; only `Text` is ever
/// handed back to callers, a `Group` hit falls through to the fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Group(Value),
}

/// Read-only lookup capability over a translation catalog.
///
/// The host application provides the real catalog; [`Catalog`] is an
/// in-memory implementation for tests and the CLI.
pub trait TranslationCatalog {
    fn has(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> Option<Message>;
}

/// Input to [`TranslationResolver::translate`].
///
/// `Resolved` carries a string that already went through translation and
/// is returned verbatim, without another catalog round or capitalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Key(String),
    Resolved(String),
}

impl From<&str> for Text {
    fn from(key: &str) -> Self {
        Text::Key(key.to_string())
    }
}

impl From<String> for Text {
    fn from(key: String) -> Self {
        Text::Key(key)
    }
}

/// Resolves display strings by trying several fallbacks against a catalog.
pub struct TranslationResolver<'a> {
    catalog: &'a dyn TranslationCatalog,
    config: Config,
}

impl<'a> TranslationResolver<'a> {
    pub fn new(catalog: &'a dyn TranslationCatalog, config: Config) -> Self {
        Self { catalog, config }
    }

    /// Translates a key, trying the catalog directly, then under the
    /// configured namespace, then using the fallback (the key itself when
    /// no fallback is given). The result has its first letter capitalized.
    ///
    /// An empty key yields `None`. Deterministic for a fixed catalog and
    /// configuration; no side effects.
    pub fn translate(&self, text: impl Into<Text>, fallback: Option<&str>) -> Option<String> {
        let key = match text.into() {
            Text::Resolved(value) => return Some(value),
            Text::Key(key) => key,
        };
        if key.is_empty() {
            return None;
        }
        let fallback = fallback.filter(|f| !f.is_empty()).unwrap_or(&key);

        let namespaced = format!("{}.{}", self.config.translate_from, key);
        let message = if self.catalog.has(&key) {
            self.catalog.get(&key)
        } else if self.catalog.has(&namespaced) {
            self.catalog.get(&namespaced)
        } else {
            None
        };

        let translation = match message {
            Some(Message::Text(value)) => value,
            Some(Message::Group(_)) => {
                debug!("key '{}' resolved to a message group, using fallback", key);
                fallback.to_string()
            }
            None => fallback.to_string(),
        };

        Some(ucfirst(&translation))
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory translation catalog over nested key/value data.
///
/// Keys use dotted paths (`validation.name`) traversing nested objects.
/// Scalar leaves are messages; objects and arrays are groups.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    root: Value,
}

impl Catalog {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Loads a catalog from a YAML (`.yaml`/`.yml`) or JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .map(|ext| ext == "yaml" || ext == "yml")
            .unwrap_or(false);
        let root: Value = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(Self { root })
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut current = &self.root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }
}

impl TranslationCatalog for Catalog {
    fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn get(&self, key: &str) -> Option<Message> {
        self.lookup(key).map(|value| match value {
            Value::String(text) => Message::Text(text.clone()),
            Value::Number(number) => Message::Text(number.to_string()),
            Value::Bool(flag) => Message::Text(flag.to_string()),
            other => Message::Group(other.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::new(json!({
            "name": "nom",
            "validation": {
                "email": "adresse e-mail",
                "rules": { "min": "trop court" }
            }
        }))
    }

    fn resolver(catalog: &Catalog) -> TranslationResolver<'_> {
        TranslationResolver::new(catalog, Config::default())
    }

    #[test]
    fn test_empty_key_yields_nothing() {
        let catalog = catalog();
        assert_eq!(resolver(&catalog).translate("", Some("Fallback")), None);
    }

    #[test]
    fn test_direct_lookup() {
        let catalog = catalog();
        assert_eq!(
            resolver(&catalog).translate("name", None),
            Some("Nom".to_string())
        );
    }

    #[test]
    fn test_namespaced_lookup() {
        let catalog = catalog();
        assert_eq!(
            resolver(&catalog).translate("email", None),
            Some("Adresse e-mail".to_string())
        );
    }

    #[test]
    fn test_missing_key_uses_fallback_capitalized() {
        let catalog = catalog();
        assert_eq!(
            resolver(&catalog).translate("missing.key", Some("fallback")),
            Some("Fallback".to_string())
        );
    }

    #[test]
    fn test_missing_key_without_fallback_uses_key() {
        let catalog = catalog();
        assert_eq!(
            resolver(&catalog).translate("missing", None),
            Some("Missing".to_string())
        );
    }

    #[test]
    fn test_empty_fallback_uses_key() {
        let catalog = catalog();
        assert_eq!(
            resolver(&catalog).translate("missing", Some("")),
            Some("Missing".to_string())
        );
    }

    #[test]
    fn test_group_result_uses_fallback() {
        let catalog = catalog();
        // validation.rules is a nested group, never returned directly
        assert_eq!(
            resolver(&catalog).translate("validation.rules", Some("rules")),
            Some("Rules".to_string())
        );
    }

    #[test]
    fn test_resolved_handle_returned_verbatim() {
        let catalog = catalog();
        assert_eq!(
            resolver(&catalog).translate(Text::Resolved("already done".to_string()), None),
            Some("already done".to_string())
        );
    }

    #[test]
    fn test_custom_namespace() {
        let catalog = Catalog::new(json!({ "forms": { "send": "envoyer" } }));
        let config = Config {
            translate_from: "forms".to_string(),
        };
        let resolver = TranslationResolver::new(&catalog, config);
        assert_eq!(resolver.translate("send", None), Some("Envoyer".to_string()));
    }

    #[test]
    fn test_catalog_load_yaml() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "validation:\n  name: nom").unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert!(catalog.has("validation.name"));
        assert_eq!(
            catalog.get("validation.name"),
            Some(Message::Text("nom".to_string()))
        );
    }

    #[test]
    fn test_catalog_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"name": "nom"}"#).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert!(catalog.has("name"));
        assert!(!catalog.has("missing"));
    }
}
