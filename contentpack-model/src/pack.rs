use crate::{Entity, Parameter};
use serde::{Deserialize, Serialize};

/// A content pack: the ordered parameter definitions plus the exportable
/// entities they can be bound to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPack {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl ContentPack {
    #[must_use]
    pub fn new(parameters: Vec<Parameter>, entities: Vec<Entity>) -> Self {
        Self {
            parameters,
            entities,
        }
    }
}
