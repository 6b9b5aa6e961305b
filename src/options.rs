use log::debug;
use serde_json::Value;

/// Field access capability for a single record.
///
/// Records expose named fields, an optional display string (anything
/// that can stand for itself, like a plain string or number), and an
/// optional identifier. By default the identifier is the `id` field.
pub trait Record {
    /// Reads a named field as a string, when present and scalar.
    fn field(&self, name: &str) -> Option<String>;

    /// The record's own display string, when it has one.
    fn display(&self) -> Option<String>;

    /// The record's identifier.
    fn identity(&self) -> Option<String> {
        self.field("id")
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<String> {
        match self.get(name) {
            Some(value) => scalar_to_string(value),
            None => None,
        }
    }

    fn display(&self) -> Option<String> {
        scalar_to_string(self)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Capability to materialize an input into a sequence of records.
///
/// Lazy query results or collection proxies implement this by fetching
/// their items; a single non-sequence value becomes a one-element
/// sequence.
pub trait RecordSource {
    type Record: Record;

    fn materialize(self) -> Vec<Self::Record>;
}

impl RecordSource for Value {
    type Record = Value;

    fn materialize(self) -> Vec<Value> {
        match self {
            Value::Array(items) => items,
            other => vec![other],
        }
    }
}

/// An insertion-ordered key/value option list for selects, radios and
/// the like. Re-inserting an existing key overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    entries: Vec<(String, String)>,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for OptionList {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Result of [`query_to_options`].
///
/// When no record produced an entry the original input is handed back
/// unchanged, so callers must be prepared for both shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Options(OptionList),
    Passthrough(Value),
}

impl Resolved {
    /// The option list, when one was produced.
    pub fn options(self) -> Option<OptionList> {
        match self {
            Resolved::Options(options) => Some(options),
            Resolved::Passthrough(_) => None,
        }
    }
}

/// Flattens query results into a key/value option list.
///
/// Per record the value is the named `value_field` when present, else the
/// record's display string; the key is the named `key_field` when
/// present, else the record's identifier, else the value itself. Records
/// without a usable value are skipped.
pub fn query_to_options(
    query: Value,
    value_field: Option<&str>,
    key_field: Option<&str>,
) -> Resolved {
    let value_field = value_field.filter(|f| !f.is_empty());
    let key_field = key_field.filter(|f| !f.is_empty());

    let mut options = OptionList::new();
    for record in query.clone().materialize() {
        let value = value_field
            .and_then(|field| record.field(field))
            .or_else(|| record.display());
        let value = match value {
            Some(value) if !is_empty_value(&value) => value,
            _ => continue,
        };
        let key = key_field
            .and_then(|field| record.field(field))
            .or_else(|| record.identity())
            .unwrap_or_else(|| value.clone());
        options.insert(key, value);
    }

    if options.is_empty() {
        debug!("no options produced, passing the input through unchanged");
        return Resolved::Passthrough(query);
    }
    Resolved::Options(options)
}

/// An empty or zero-like value never becomes an option.
fn is_empty_value(value: &str) -> bool {
    value.is_empty() || value == "0"
}
