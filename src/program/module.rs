//! Parsed source units and their top-level declaration lists.

use smallvec::SmallVec;

use super::id::{ModuleId, NodeId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    /// Vendored or external units that never contribute to the surface.
    pub foreign: bool,
    pub declarations: SmallVec<[NodeId; 8]>,
}

impl Module {
    pub fn new(id: ModuleId, name: impl Into<String>, foreign: bool) -> Self {
        Self {
            id,
            name: name.into(),
            foreign,
            declarations: SmallVec::new(),
        }
    }

    pub fn is_local(&self) -> bool {
        !self.foreign
    }
}
