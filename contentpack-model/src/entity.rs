use crate::ValueType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque identifier for an entity inside a content pack.
///
/// Ids are assigned by the exporter (typically a content hash such as
/// `"111-beef"`); the core never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One configuration field value inside an entity's data.
///
/// Either a leaf `{type, value}` reference, or a nested mapping of the same
/// shape (e.g. an input's `configuration` block). Untagged so the host's JSON
/// round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A leaf value with its declared type. The raw value is kept as JSON;
    /// validating it against `value_type` is the importer's job, not ours.
    Value {
        #[serde(rename = "type")]
        value_type: ValueType,
        value: serde_json::Value,
    },
    /// A nested configuration mapping.
    Nested(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Creates a leaf string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::Value {
            value_type: ValueType::String,
            value: serde_json::Value::String(value.into()),
        }
    }

    /// Creates a leaf integer value.
    pub fn integer(value: i64) -> Self {
        Self::Value {
            value_type: ValueType::Integer,
            value: serde_json::Value::from(value),
        }
    }

    /// Creates a leaf boolean value.
    pub fn boolean(value: bool) -> Self {
        Self::Value {
            value_type: ValueType::Boolean,
            value: serde_json::Value::from(value),
        }
    }

    /// Creates a nested mapping from field-name/value pairs.
    pub fn nested(fields: impl IntoIterator<Item = (String, ConfigValue)>) -> Self {
        Self::Nested(fields.into_iter().collect())
    }

    /// Returns true for leaf values (the only fields eligible for binding).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Value { .. })
    }
}

/// One exportable configuration object inside a content pack.
///
/// Entities and their field values are owned by the host; the binding core
/// only reads them to know which fields exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Entity format version (e.g. `"1.0"`).
    pub v: String,
    /// Field name → value, possibly nested.
    pub data: BTreeMap<String, ConfigValue>,
}

impl Entity {
    pub fn new(
        id: impl Into<EntityId>,
        v: impl Into<String>,
        data: impl IntoIterator<Item = (String, ConfigValue)>,
    ) -> Self {
        Self {
            id: id.into(),
            v: v.into(),
            data: data.into_iter().collect(),
        }
    }

    /// Looks up a field by dot-qualified path (e.g.
    /// `"configuration.listen_address"`).
    #[must_use]
    pub fn get(&self, config_key: &str) -> Option<&ConfigValue> {
        let mut segments = config_key.split('.');
        let mut current = self.data.get(segments.next()?)?;
        for segment in segments {
            match current {
                ConfigValue::Nested(map) => current = map.get(segment)?,
                ConfigValue::Value { .. } => return None,
            }
        }
        Some(current)
    }

    /// Enumerates the dot-qualified paths of all leaf fields, in sorted
    /// field order.
    #[must_use]
    pub fn config_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.data, None, &mut keys);
        keys
    }
}

fn collect_keys(map: &BTreeMap<String, ConfigValue>, prefix: Option<&str>, out: &mut Vec<String>) {
    for (name, value) in map {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match value {
            ConfigValue::Value { .. } => out.push(key),
            ConfigValue::Nested(nested) => collect_keys(nested, Some(&key), out),
        }
    }
}
