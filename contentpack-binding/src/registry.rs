//! Ordered registry of parameter definitions for one content pack.

use crate::error::{BindingError, BindingResult};
use contentpack_model::Parameter;
use serde::{Deserialize, Serialize};

/// Holds the pack's parameter definitions in operator insertion order.
///
/// Name uniqueness is enforced on insert; everything else is a read-only
/// view safe to hand to a renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterRegistry {
    parameters: Vec<Parameter>,
}

impl ParameterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from an existing ordered parameter list, e.g. a
    /// pack loaded by the host. Fails if the list contains duplicate names.
    pub fn from_parameters(parameters: Vec<Parameter>) -> BindingResult<Self> {
        let mut registry = Self::new();
        for parameter in parameters {
            registry.add(parameter)?;
        }
        Ok(registry)
    }

    /// Appends a parameter. Fails with [`BindingError::DuplicateName`] if the
    /// name is already taken; the registry is left unchanged in that case.
    pub fn add(&mut self, parameter: Parameter) -> BindingResult<()> {
        if self.contains(&parameter.name) {
            return Err(BindingError::DuplicateName(parameter.name));
        }
        self.parameters.push(parameter);
        Ok(())
    }

    /// Removes the parameter with the given name. Removing an absent name is
    /// a no-op; returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.parameters.len();
        self.parameters.retain(|p| p.name != name);
        self.parameters.len() != before
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// True if a parameter with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The current ordered parameter list.
    #[must_use]
    pub fn list(&self) -> &[Parameter] {
        &self.parameters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
