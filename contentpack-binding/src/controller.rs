//! The binding controller: the only mutation surface the host calls.
//!
//! Composes the parameter registry and the applied-parameter map into
//! atomic, observable transactions. Every operation is synchronous and runs
//! to completion, including snapshot emission, before returning; the model
//! is exclusively owned by the controller, so there is no locking.

use crate::error::{BindingError, BindingResult};
use crate::{AppliedParameterMap, ModelSnapshot, ParameterRegistry, StateChangeListener};
use contentpack_model::{ContentPack, Entity, EntityConfigIndex, EntityId, Parameter};
use tracing::debug;

/// Owns the binding model for one content pack and keeps its three
/// collections mutually consistent across mutations.
///
/// Invariants upheld after every mutation:
/// - parameter names are unique
/// - every binding references a registered parameter
/// - a given (entity, config key) pair holds at most one binding
pub struct BindingController {
    registry: ParameterRegistry,
    entities: Vec<Entity>,
    applied: AppliedParameterMap,
    listener: Option<Box<dyn StateChangeListener>>,
}

impl BindingController {
    /// Creates a controller from the host's pack and applied-parameter map.
    ///
    /// Fails with [`BindingError::DuplicateName`] if the pack's parameter
    /// list contains duplicates, or [`BindingError::UnknownParameter`] if
    /// the applied map already references an unregistered parameter.
    pub fn new(content_pack: ContentPack, applied: AppliedParameterMap) -> BindingResult<Self> {
        let registry = ParameterRegistry::from_parameters(content_pack.parameters)?;
        for (_, bindings) in applied.iter() {
            for binding in bindings {
                if !registry.contains(&binding.param_name) {
                    return Err(BindingError::UnknownParameter(binding.param_name.clone()));
                }
            }
        }
        Ok(Self {
            registry,
            entities: content_pack.entities,
            applied,
            listener: None,
        })
    }

    /// Registers the host's state-change listener, replacing any previous
    /// one. The listener is invoked exactly once per successful mutation.
    pub fn set_listener(&mut self, listener: impl StateChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// The current parameter list, in registration order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        self.registry.list()
    }

    /// Read-only view over the pack's entities and their bindable fields.
    #[must_use]
    pub fn config_index(&self) -> EntityConfigIndex<'_> {
        EntityConfigIndex::new(&self.entities)
    }

    /// The current applied-parameter map.
    #[must_use]
    pub fn applied_parameter(&self) -> &AppliedParameterMap {
        &self.applied
    }

    /// Builds a complete snapshot of the current state without mutating.
    #[must_use]
    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            content_pack: ContentPack::new(self.registry.list().to_vec(), self.entities.clone()),
            applied_parameter: self.applied.clone(),
        }
    }

    /// Registers a new parameter.
    ///
    /// Fails with [`BindingError::DuplicateName`] on a name collision; no
    /// snapshot is emitted and the model is unchanged in that case.
    pub fn add_parameter(&mut self, parameter: Parameter) -> BindingResult<ModelSnapshot> {
        let name = parameter.name.clone();
        self.registry.add(parameter)?;
        debug!("Added parameter {}", name);
        Ok(self.emit())
    }

    /// Applies a registered parameter to `(entity_id, config_key)`.
    ///
    /// A field already bound to a different parameter is silently re-bound
    /// (last-write-wins). Fails with [`BindingError::UnknownParameter`] if
    /// `param_name` is not registered; the error propagates unchanged and no
    /// snapshot is emitted, since an unresolvable binding would dangle.
    pub fn apply_parameter(
        &mut self,
        entity_id: impl Into<EntityId>,
        config_key: &str,
        param_name: &str,
    ) -> BindingResult<ModelSnapshot> {
        if !self.registry.contains(param_name) {
            return Err(BindingError::UnknownParameter(param_name.to_string()));
        }
        let entity_id = entity_id.into();
        self.applied.apply(entity_id.clone(), config_key, param_name);
        debug!(
            "Applied parameter {} to {}:{}",
            param_name, entity_id, config_key
        );
        Ok(self.emit())
    }

    /// Removes the binding for `(entity_id, config_key)`, if any.
    ///
    /// Idempotent: unbinding an already-unbound field is a valid no-op, and
    /// still emits a snapshot for the completed action.
    pub fn unbind(&mut self, entity_id: &EntityId, config_key: &str) -> ModelSnapshot {
        if self.applied.unbind(entity_id, config_key) {
            debug!("Unbound {}:{}", entity_id, config_key);
        }
        self.emit()
    }

    /// Deletes a parameter and cascades over its bindings.
    ///
    /// Bindings are removed before the registry entry, so no emitted snapshot
    /// ever contains a dangling binding. Always succeeds: deleting an unknown
    /// name is a valid no-op (repeated delete clicks must not surface a
    /// failure), and still emits a snapshot for the completed action.
    pub fn delete_parameter(&mut self, param_name: &str) -> ModelSnapshot {
        let removed_bindings = self.applied.remove_all_for_parameter(param_name);
        let removed = self.registry.remove(param_name);
        if removed {
            debug!(
                "Deleted parameter {} ({} bindings removed)",
                param_name, removed_bindings
            );
        }
        self.emit()
    }

    /// Builds the post-mutation snapshot and hands it to the listener.
    fn emit(&mut self) -> ModelSnapshot {
        let snapshot = self.snapshot();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_state_change(&snapshot);
        }
        snapshot
    }
}

impl std::fmt::Debug for BindingController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingController")
            .field("registry", &self.registry)
            .field("entities", &self.entities.len())
            .field("applied", &self.applied)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
