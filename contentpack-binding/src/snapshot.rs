//! The immutable state snapshot handed to the host after every mutation.

use crate::AppliedParameterMap;
use contentpack_model::ContentPack;
use serde::{Deserialize, Serialize};

/// A complete, self-contained copy of the binding model state.
///
/// Emitted exactly once per successful mutation, never as a delta, so the
/// host can never observe an inconsistent intermediate state (e.g. a binding
/// whose parameter is already gone). The host may read it freely but owns an
/// independent copy: mutating it has no effect on the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// The pack with its current parameter list.
    #[serde(rename = "contentPack")]
    pub content_pack: ContentPack,
    /// The current applied-parameter map.
    #[serde(rename = "appliedParameter")]
    pub applied_parameter: AppliedParameterMap,
}

/// Host seam for observing state changes.
///
/// Implemented for any `FnMut(&ModelSnapshot)` closure, so tests and simple
/// hosts can pass a closure while richer hosts implement the trait directly.
pub trait StateChangeListener {
    /// Called synchronously, exactly once per successful mutation, with the
    /// complete replacement state.
    fn on_state_change(&mut self, snapshot: &ModelSnapshot);
}

impl<F> StateChangeListener for F
where
    F: FnMut(&ModelSnapshot),
{
    fn on_state_change(&mut self, snapshot: &ModelSnapshot) {
        self(snapshot);
    }
}
