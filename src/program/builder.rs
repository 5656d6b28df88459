//! Fluent builder used by loaders and tests to author declaration trees.

use super::arena::DeclarationArena;
use super::id::{ModuleId, NodeId};
use super::modifiers::ModifierFlags;
use super::module::Module;
use super::node::{DeclarationNode, NodeKind, NodeParent};
use super::tree::Program;

#[derive(Default)]
pub struct ProgramBuilder {
    arena: DeclarationArena,
    modules: Vec<Module>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module that is part of the analysed project.
    pub fn module(&mut self, name: impl Into<String>) -> ModuleId {
        self.push_module(name.into(), false)
    }

    /// Registers a vendored or external module.
    pub fn foreign_module(&mut self, name: impl Into<String>) -> ModuleId {
        self.push_module(name.into(), true)
    }

    pub fn node(&mut self, parent: impl Into<NodeParent>, kind: NodeKind) -> NodeBuilder<'_> {
        NodeBuilder::new(self, parent.into(), kind)
    }

    pub(crate) fn module_of(&self, node: NodeId) -> ModuleId {
        self.arena.get(node).module
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Appends an existing node to another container without touching its parent reference.
    pub(crate) fn link(&mut self, container: NodeParent, node: NodeId) {
        match container {
            NodeParent::SourceFile(module) => self.modules[module.index()].declarations.push(node),
            NodeParent::Declaration(parent) => self.arena.get_mut(parent).children.push(node),
        }
    }

    pub fn finish(self) -> Program {
        Program::from_parts(self.arena, self.modules)
    }

    fn push_module(&mut self, name: String, foreign: bool) -> ModuleId {
        let id = ModuleId::from_index(self.modules.len());
        self.modules.push(Module::new(id, name, foreign));
        id
    }

    fn owning_module(&self, container: NodeParent) -> ModuleId {
        match container {
            NodeParent::SourceFile(module) => module,
            NodeParent::Declaration(parent) => self.arena.get(parent).module,
        }
    }
}

pub struct NodeBuilder<'a> {
    program: &'a mut ProgramBuilder,
    container: NodeParent,
    kind: NodeKind,
    name: Option<String>,
    modifiers: ModifierFlags,
    type_annotation: Option<String>,
    doc: Option<String>,
    detached: bool,
}

impl<'a> NodeBuilder<'a> {
    fn new(program: &'a mut ProgramBuilder, container: NodeParent, kind: NodeKind) -> Self {
        Self {
            program,
            container,
            kind,
            name: None,
            modifiers: ModifierFlags::empty(),
            type_annotation: None,
            doc: None,
            detached: false,
        }
    }

    pub fn name<S: AsRef<str>>(mut self, value: S) -> Self {
        self.name = Some(value.as_ref().to_owned());
        self
    }

    pub fn modifiers(mut self, flags: ModifierFlags) -> Self {
        self.modifiers |= flags;
        self
    }

    pub fn annotate<S: AsRef<str>>(mut self, value: S) -> Self {
        self.type_annotation = Some(value.as_ref().to_owned());
        self
    }

    pub fn doc<S: AsRef<str>>(mut self, value: S) -> Self {
        self.doc = Some(value.as_ref().to_owned());
        self
    }

    /// Keeps the node listed by its container but drops the parent reference, the way
    /// synthesized nodes look to a checker.
    pub fn detached(mut self) -> Self {
        self.detached = true;
        self
    }

    pub fn finish(self) -> NodeId {
        let module = self.program.owning_module(self.container);
        let arena = &mut self.program.arena;
        let mut node = DeclarationNode::new(self.kind, module);
        node.name = self.name.map(|value| arena.intern_string(value));
        node.type_annotation = self.type_annotation.map(|value| arena.intern_string(value));
        node.doc = self.doc.map(|value| arena.intern_string(value));
        node.modifiers = self.modifiers;
        if !self.detached {
            node.parent = Some(self.container);
        }
        let id = arena.push_node(node);
        self.program.link(self.container, id);
        id
    }
}

#[cfg(test)]
mod tests {
    //! Builder coverage to ensure fluent setters wire through to the declaration tree.
    use super::*;

    #[test]
    fn builder_links_nodes_into_containers() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/shapes.ts");
        let class = builder
            .node(module, NodeKind::Class)
            .name("Circle")
            .modifiers(ModifierFlags::EXPORT)
            .finish();
        let radius = builder
            .node(class, NodeKind::Property)
            .name("radius")
            .modifiers(ModifierFlags::READONLY)
            .finish();
        let program = builder.finish();
        assert_eq!(
            program.module(module).declarations.as_slice(),
            &[class],
            "Top-level nodes belong to the module"
        );
        assert_eq!(program.children(class), &[radius], "Members belong to the class");
        assert_eq!(program.node(radius).module, module, "Members inherit the owning module");
        assert!(program.node(class).is_top_level());
        assert!(program.node(class).modifiers.contains(ModifierFlags::EXPORT));
    }

    #[test]
    fn modifiers_accumulate_across_calls() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/a.ts");
        let node = builder
            .node(module, NodeKind::Property)
            .name("n")
            .modifiers(ModifierFlags::STATIC)
            .modifiers(ModifierFlags::READONLY)
            .finish();
        let program = builder.finish();
        assert_eq!(
            program.node(node).modifiers,
            ModifierFlags::STATIC | ModifierFlags::READONLY,
            "Each modifiers() call should add to the set"
        );
    }

    #[test]
    fn detached_nodes_stay_listed_without_parent() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/a.ts");
        let node = builder.node(module, NodeKind::Enum).name("E").detached().finish();
        let program = builder.finish();
        assert!(program.parent_of(node).is_none(), "Detached nodes carry no parent reference");
        assert_eq!(
            program.module(module).declarations.as_slice(),
            &[node],
            "Containment is kept so traversal still reaches the node"
        );
    }

    #[test]
    fn modules_keep_registration_order_and_foreign_flag() {
        let mut builder = ProgramBuilder::new();
        let local = builder.module("src/a.ts");
        let vendored = builder.foreign_module("node_modules/lib.d.ts");
        assert_eq!(builder.module_count(), 2);
        let program = builder.finish();
        assert_eq!(program.modules()[0].id, local);
        assert!(program.module(vendored).foreign, "foreign_module should flag the module");
    }
}
