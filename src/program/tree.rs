//! Read-only view over a loaded program: ordered modules plus the declaration arena.

use super::arena::DeclarationArena;
use super::id::{ModuleId, NodeId};
use super::module::Module;
use super::node::{DeclarationNode, NodeParent};

#[derive(Debug, Default)]
pub struct Program {
    arena: DeclarationArena,
    modules: Vec<Module>,
}

impl Program {
    pub(crate) fn from_parts(arena: DeclarationArena, modules: Vec<Module>) -> Self {
        Self { arena, modules }
    }

    /// Modules in program order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.index()]
    }

    pub fn node(&self, id: NodeId) -> &DeclarationNode {
        self.arena.get(id)
    }

    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).name.map(|name| self.arena.resolve_string(name))
    }

    pub fn annotation_of(&self, id: NodeId) -> Option<&str> {
        self.node(id)
            .type_annotation
            .map(|text| self.arena.resolve_string(text))
    }

    pub fn doc_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).doc.map(|text| self.arena.resolve_string(text))
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeParent> {
        self.node(id).parent
    }

    /// Name of the declaration enclosing `id`, if its parent is a named declaration.
    pub fn parent_name_of(&self, id: NodeId) -> Option<&str> {
        match self.parent_of(id)? {
            NodeParent::Declaration(parent) => self.name_of(parent),
            NodeParent::SourceFile(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
