//! Value types the checker oracle hands back to the surface engine.

use crate::program::{ModifierFlags, NodeId};

/// A resolved name binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub flags: ModifierFlags,
    pub value_declaration: Option<NodeId>,
}

impl Symbol {
    pub fn new(
        name: impl Into<String>,
        flags: ModifierFlags,
        value_declaration: Option<NodeId>,
    ) -> Self {
        Self {
            name: name.into(),
            flags,
            value_declaration,
        }
    }

    pub fn has_value_declaration(&self) -> bool {
        self.value_declaration.is_some()
    }
}

/// A resolved call or construct signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub parameters: Vec<Symbol>,
    pub return_type: String,
    pub declaration: Option<NodeId>,
}

/// Reported by the checker when it refuses a module's tree outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub node: NodeId,
    pub reason: String,
}
