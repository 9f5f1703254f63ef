//! Content pack model types.
//!
//! Defines the data shapes shared by everything that touches a content pack:
//! - [`Parameter`] — a named, typed placeholder an operator can bind to entity fields
//! - [`ParameterValue`] / [`ValueType`] — the typed default value carried by a parameter
//! - [`Entity`] / [`ConfigValue`] — one exportable configuration object and its nested field data
//! - [`ContentPack`] — the pack container (ordered parameters + entities)
//! - [`EntityConfigIndex`] — read-only view over a pack's entities and their bindable fields
//!
//! These types are pure data: the core never creates, mutates, or deletes
//! entities. All mutation logic lives in `contentpack-binding`.

mod entity;
mod index;
mod pack;
mod parameter;
mod value;

pub use entity::{ConfigValue, Entity, EntityId};
pub use index::EntityConfigIndex;
pub use pack::ContentPack;
pub use parameter::Parameter;
pub use value::{ParameterValue, ValueType};
