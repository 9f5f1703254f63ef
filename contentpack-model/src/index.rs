use crate::{ConfigValue, Entity, EntityId};

/// Read-only view over a pack's entities and their bindable fields.
///
/// Built by the host from the pack's entity list; the binding core uses it to
/// enumerate which fields exist and which are eligible for binding (leaf
/// values only). It never mutates the entities.
#[derive(Debug, Clone)]
pub struct EntityConfigIndex<'a> {
    entities: &'a [Entity],
}

impl<'a> EntityConfigIndex<'a> {
    #[must_use]
    pub fn new(entities: &'a [Entity]) -> Self {
        Self { entities }
    }

    /// All entities in pack order.
    #[must_use]
    pub fn entities(&self) -> &'a [Entity] {
        self.entities
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&'a Entity> {
        self.entities.iter().find(|e| &e.id == id)
    }

    /// Dot-qualified leaf config keys for an entity; empty if the entity is
    /// unknown.
    #[must_use]
    pub fn config_keys(&self, id: &EntityId) -> Vec<String> {
        self.entity(id)
            .map(Entity::config_keys)
            .unwrap_or_default()
    }

    /// Returns the value at `config_key` for an entity, if both exist.
    #[must_use]
    pub fn get(&self, id: &EntityId, config_key: &str) -> Option<&'a ConfigValue> {
        self.entity(id)?.get(config_key)
    }

    /// True when `config_key` names a leaf field on the entity, i.e. a field a
    /// parameter could be applied to.
    #[must_use]
    pub fn is_bindable(&self, id: &EntityId, config_key: &str) -> bool {
        self.get(id, config_key).is_some_and(ConfigValue::is_leaf)
    }
}
