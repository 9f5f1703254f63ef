//! The applied-parameter map: which configuration fields currently have a
//! parameter bound, per entity.

use contentpack_model::EntityId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One parameter applied to one configuration field of one entity.
///
/// Field names follow the host's JSON convention (`configKey`/`paramName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Dot-qualified field name inside the entity's configuration
    /// (e.g. `"title"`, `"configuration.listen_address"`).
    #[serde(rename = "configKey")]
    pub config_key: String,
    /// Name of the bound parameter.
    #[serde(rename = "paramName")]
    pub param_name: String,
}

impl Binding {
    pub fn new(config_key: impl Into<String>, param_name: impl Into<String>) -> Self {
        Self {
            config_key: config_key.into(),
            param_name: param_name.into(),
        }
    }
}

/// Maps entity id → ordered bindings for that entity.
///
/// Insertion order is preserved per entity. An absent entity and an entity
/// mapped to an empty sequence are both valid empty states. The map does not
/// check parameter names against the registry; referential integrity is the
/// controller's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppliedParameterMap {
    entries: HashMap<EntityId, Vec<Binding>>,
}

impl AppliedParameterMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map from existing per-entity binding sequences.
    #[must_use]
    pub fn from_entries(entries: HashMap<EntityId, Vec<Binding>>) -> Self {
        Self { entries }
    }

    /// Binds `param_name` to `(entity_id, config_key)`.
    ///
    /// A field holds at most one binding: re-applying to an already-bound
    /// field replaces the binding in place (last-write-wins, original
    /// position kept). Returns the updated per-entity sequence.
    pub fn apply(
        &mut self,
        entity_id: EntityId,
        config_key: impl Into<String>,
        param_name: impl Into<String>,
    ) -> &[Binding] {
        let binding = Binding::new(config_key, param_name);
        let bindings = self.entries.entry(entity_id).or_default();
        match bindings.iter().position(|b| b.config_key == binding.config_key) {
            Some(i) => bindings[i].param_name = binding.param_name,
            None => bindings.push(binding),
        }
        bindings
    }

    /// Removes the binding for `(entity_id, config_key)` if present; no-op
    /// otherwise. Returns whether a binding was removed.
    pub fn unbind(&mut self, entity_id: &EntityId, config_key: &str) -> bool {
        let Some(bindings) = self.entries.get_mut(entity_id) else {
            return false;
        };
        let before = bindings.len();
        bindings.retain(|b| b.config_key != config_key);
        bindings.len() != before
    }

    /// Removes every binding referencing `param_name`, across all entities.
    /// Returns the number of bindings removed.
    pub fn remove_all_for_parameter(&mut self, param_name: &str) -> usize {
        let mut removed = 0;
        for bindings in self.entries.values_mut() {
            let before = bindings.len();
            bindings.retain(|b| b.param_name != param_name);
            removed += before - bindings.len();
        }
        removed
    }

    /// The ordered bindings for an entity; empty if none.
    #[must_use]
    pub fn bindings_for(&self, entity_id: &EntityId) -> &[Binding] {
        self.entries
            .get(entity_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The binding for `(entity_id, config_key)`, if any.
    #[must_use]
    pub fn binding(&self, entity_id: &EntityId, config_key: &str) -> Option<&Binding> {
        self.bindings_for(entity_id)
            .iter()
            .find(|b| b.config_key == config_key)
    }

    /// Iterates over entities that currently have at least one binding.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &[Binding])> {
        self.entries
            .iter()
            .filter(|(_, bindings)| !bindings.is_empty())
            .map(|(id, bindings)| (id, bindings.as_slice()))
    }

    /// Total number of bindings across all entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// True when no entity has any binding. Entities mapped to empty
    /// sequences count as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
