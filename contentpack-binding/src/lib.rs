//! Parameter binding core for content packs.
//!
//! Keeps three related collections mutually consistent as an operator adds,
//! applies, and deletes parameters:
//! - [`ParameterRegistry`] — the pack's ordered parameter definitions
//! - [`AppliedParameterMap`] — which entity fields currently have a parameter bound
//! - the pack's entity data, read-only via `contentpack-model`
//!
//! [`BindingController`] is the mutation surface the host calls; after every
//! successful mutation it emits one complete [`ModelSnapshot`] to the host's
//! [`StateChangeListener`]. The host renders from snapshots only and never
//! mutates the core's state directly.

mod bindings;
mod controller;
mod error;
mod registry;
mod snapshot;

pub use bindings::{AppliedParameterMap, Binding};
pub use controller::BindingController;
pub use error::{BindingError, BindingResult};
pub use registry::ParameterRegistry;
pub use snapshot::{ModelSnapshot, StateChangeListener};
