//! Helper utilities for HTML form building.
//!
//! The crate groups a handful of independent helpers: attribute map
//! rendering ([`Attributes`]), HTML entity escaping ([`escape`] /
//! [`decode`]), translation lookup with namespace fallback
//! ([`TranslationResolver`]), flattening query results into option
//! lists ([`query_to_options`]), and resolving a field method name to
//! its implementing class ([`class_from_method`]).
//!
//! Host collaborators are modeled as narrow traits — a
//! [`TranslationCatalog`] for the message store, [`Record`] /
//! [`RecordSource`] for data rows, and a [`FieldRegistry`] for the
//! rendering subsystem — so the helpers stay free of framework types.

pub mod attributes;
pub mod config;
pub mod entities;
pub mod fields;
pub mod options;
pub mod translate;

pub use attributes::Attributes;
pub use config::{Config, ConfigError};
pub use entities::{decode, escape};
pub use fields::{class_from_method, FieldRegistry};
pub use options::{query_to_options, OptionList, Record, RecordSource, Resolved};
pub use translate::{Catalog, CatalogError, Message, Text, TranslationCatalog, TranslationResolver};

/// Capitalizes the first character of a string, leaving the rest as-is.
pub fn ucfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ucfirst() {
        assert_eq!(ucfirst("fallback"), "Fallback");
        assert_eq!(ucfirst("already Upper"), "Already Upper");
        assert_eq!(ucfirst(""), "");
        assert_eq!(ucfirst("été"), "Été");
    }
}
