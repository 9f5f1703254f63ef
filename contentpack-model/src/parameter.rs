use crate::{ParameterValue, ValueType};
use serde::{Deserialize, Serialize};

/// A named, typed placeholder an operator can bind to entity configuration
/// fields, so the pack can be re-imported with a different concrete value.
///
/// Parameters are immutable after creation. Edits are modeled by the host as
/// delete + recreate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Unique within a content pack.
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub default_value: ParameterValue,
}

impl Parameter {
    /// Creates a parameter from a typed default value; `value_type` is taken
    /// from the value itself.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        default_value: impl Into<ParameterValue>,
    ) -> Self {
        let default_value = default_value.into();
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            value_type: default_value.value_type(),
            default_value,
        }
    }

    /// Shorthand for a string parameter.
    pub fn string(name: &str, title: &str, description: &str, default: &str) -> Self {
        Self::new(name, title, description, default)
    }

    /// Shorthand for an integer parameter.
    pub fn integer(name: &str, title: &str, description: &str, default: i64) -> Self {
        Self::new(name, title, description, default)
    }

    /// Shorthand for a boolean parameter.
    pub fn boolean(name: &str, title: &str, description: &str, default: bool) -> Self {
        Self::new(name, title, description, default)
    }

    /// Shorthand for a double parameter.
    pub fn double(name: &str, title: &str, description: &str, default: f64) -> Self {
        Self::new(name, title, description, default)
    }
}
