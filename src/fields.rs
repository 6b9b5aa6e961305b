use crate::ucfirst;
use std::collections::HashSet;

/// Method names that map to a differently-named field class.
const FIELD_ALIASES: &[(&str, &str)] = &[
    ("submit", "Button"),
    ("reset", "Button"),
    ("multiselect", "Select"),
    ("checkboxes", "Checkbox"),
    ("radios", "Radio"),
    ("files", "File"),
];

/// Lookup capability over the field classes a renderer knows about.
///
/// The form-rendering subsystem injects its registry here; the resolver
/// never inspects loaded types itself.
pub trait FieldRegistry {
    fn has_class(&self, name: &str) -> bool;
}

impl FieldRegistry for HashSet<String> {
    fn has_class(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// The empty registry; resolution relies on the alias table alone.
impl FieldRegistry for () {
    fn has_class(&self, _name: &str) -> bool {
        false
    }
}

/// Resolves a field method name to the class implementing it.
///
/// A registered class named after the method wins; otherwise the alias
/// table applies and anything unmatched falls back to `Input`. Total for
/// any input string.
pub fn class_from_method(registry: &dyn FieldRegistry, method: &str) -> String {
    let direct = ucfirst(method);
    if registry.has_class(&direct) {
        return direct;
    }

    for (alias, class) in FIELD_ALIASES {
        if *alias == method {
            return (*class).to_string();
        }
    }

    "Input".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_table() {
        assert_eq!(class_from_method(&(), "submit"), "Button");
        assert_eq!(class_from_method(&(), "reset"), "Button");
        assert_eq!(class_from_method(&(), "multiselect"), "Select");
        assert_eq!(class_from_method(&(), "checkboxes"), "Checkbox");
        assert_eq!(class_from_method(&(), "radios"), "Radio");
        assert_eq!(class_from_method(&(), "files"), "File");
    }

    #[test]
    fn test_unknown_method_defaults_to_input() {
        assert_eq!(class_from_method(&(), "unknown"), "Input");
        assert_eq!(class_from_method(&(), ""), "Input");
    }

    #[test]
    fn test_registered_class_wins() {
        let registry: HashSet<String> =
            ["Select".to_string(), "Datetime".to_string()].into_iter().collect();
        assert_eq!(class_from_method(&registry, "datetime"), "Datetime");
        // Alias still applies when the direct name is not registered
        assert_eq!(class_from_method(&registry, "multiselect"), "Select");
    }

    #[test]
    fn test_registry_beats_alias_on_direct_match() {
        let registry: HashSet<String> = ["Submit".to_string()].into_iter().collect();
        assert_eq!(class_from_method(&registry, "submit"), "Submit");
    }
}
