//! Semantic facts recorded by a front end's checker that the tree alone cannot express.

use ahash::{AHashMap, AHashSet};

use crate::program::{ModuleId, NodeId};

use super::symbol::Rejection;

#[derive(Clone, Debug, Default)]
pub struct CheckerFacts {
    types: AHashMap<NodeId, String>,
    unbound: AHashSet<NodeId>,
    rejections: AHashMap<ModuleId, Rejection>,
}

impl CheckerFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the canonical rendering of the type resolved at `node`.
    pub fn resolve_as(&mut self, node: NodeId, rendered: impl Into<String>) {
        self.types.insert(node, rendered.into());
    }

    /// Marks a declaration the checker could not bind to a symbol.
    pub fn unbind(&mut self, node: NodeId) {
        self.unbound.insert(node);
    }

    /// Marks `module` as rejected; the first rejection per module wins.
    pub fn reject(&mut self, module: ModuleId, node: NodeId, reason: impl Into<String>) {
        self.rejections.entry(module).or_insert_with(|| Rejection {
            node,
            reason: reason.into(),
        });
    }

    pub fn resolved_type(&self, node: NodeId) -> Option<&str> {
        self.types.get(&node).map(String::as_str)
    }

    pub fn is_unbound(&self, node: NodeId) -> bool {
        self.unbound.contains(&node)
    }

    pub fn rejection(&self, module: ModuleId) -> Option<&Rejection> {
        self.rejections.get(&module)
    }
}
