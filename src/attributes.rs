use crate::entities::escape;

/// An ordered HTML attribute map.
///
/// Entries keep insertion order so rendered output is stable. An entry
/// whose value is `None` is kept in the map but never rendered, which
/// lets callers reserve or blank out an attribute without losing its
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, Option<String>)>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, overwriting the value in place when the name
    /// already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(name.into(), Some(value.into()));
        self
    }

    /// Sets an attribute with no value; the entry is skipped at render time.
    pub fn unset(&mut self, name: impl Into<String>) -> &mut Self {
        self.insert(name.into(), None);
        self
    }

    /// Sets a boolean attribute rendered with its name as value, e.g.
    /// `required="required"`.
    pub fn flag(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = name.clone();
        self.insert(name, Some(value));
        self
    }

    fn insert(&mut self, name: String, value: Option<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns the value of an attribute, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Adds a class to the `class` attribute unless it is already present.
    ///
    /// A missing `class` entry is treated as empty; the result is trimmed.
    /// Presence is a substring check, so adding the same class twice is a
    /// no-op.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        let current = self.get("class").unwrap_or("").to_string();
        if !current.contains(class) {
            let combined = format!("{} {}", current, class).trim().to_string();
            self.insert("class".to_string(), Some(combined));
        }
        self
    }

    /// Renders the map into ` key="escaped-value"` pairs.
    ///
    /// Entries without a value are skipped. Returns `None` when nothing
    /// renders, so callers can tell "no attributes" apart from an empty
    /// string attribute.
    pub fn render(&self) -> Option<String> {
        let mut html = Vec::new();
        for (name, value) in &self.entries {
            if let Some(value) = value {
                html.push(format!("{}=\"{}\"", name, escape(value)));
            }
        }
        if html.is_empty() {
            return None;
        }
        Some(format!(" {}", html.join(" ")))
    }

    /// Returns true when the map has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_deref()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, Option<V>)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, Option<V>)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name.into(), value.map(Into::into));
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_class_to_empty_map() {
        let mut attributes = Attributes::new();
        attributes.add_class("foo");
        assert_eq!(attributes.get("class"), Some("foo"));
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut attributes = Attributes::new();
        attributes.add_class("foo").add_class("foo");
        assert_eq!(attributes.get("class"), Some("foo"));
    }

    #[test]
    fn test_add_class_appends() {
        let mut attributes = Attributes::new();
        attributes.set("class", "btn");
        attributes.add_class("primary");
        assert_eq!(attributes.get("class"), Some("btn primary"));
    }

    #[test]
    fn test_render_empty_is_none() {
        assert_eq!(Attributes::new().render(), None);
    }

    #[test]
    fn test_render_skips_unset_values() {
        let mut attributes = Attributes::new();
        attributes.unset("required");
        attributes.set("disabled", "1");
        assert_eq!(attributes.render(), Some(" disabled=\"1\"".to_string()));
    }

    #[test]
    fn test_render_only_unset_values_is_none() {
        let mut attributes = Attributes::new();
        attributes.unset("required");
        assert_eq!(attributes.render(), None);
    }

    #[test]
    fn test_render_flag() {
        let mut attributes = Attributes::new();
        attributes.flag("required");
        assert_eq!(attributes.render(), Some(" required=\"required\"".to_string()));
    }

    #[test]
    fn test_render_escapes_values() {
        let mut attributes = Attributes::new();
        attributes.set("title", "Tom & \"Jerry\"");
        assert_eq!(
            attributes.render(),
            Some(" title=\"Tom &amp; &quot;Jerry&quot;\"".to_string())
        );
    }

    #[test]
    fn test_render_preserves_insertion_order() {
        let mut attributes = Attributes::new();
        attributes.set("type", "text").set("name", "email").flag("required");
        assert_eq!(
            attributes.render(),
            Some(" type=\"text\" name=\"email\" required=\"required\"".to_string())
        );
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut attributes = Attributes::new();
        attributes.set("type", "text").set("name", "email").set("type", "number");
        assert_eq!(
            attributes.render(),
            Some(" type=\"number\" name=\"email\"".to_string())
        );
    }

    #[test]
    fn test_from_iterator() {
        let attributes: Attributes =
            [("required", None), ("disabled", Some("1"))].into_iter().collect();
        assert_eq!(attributes.render(), Some(" disabled=\"1\"".to_string()));
    }
}
