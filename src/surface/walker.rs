//! Depth-first walk over a module's declarations that dispatches each node to its handler.

use ahash::AHashSet;
use smallvec::SmallVec;

use crate::checker::{Checker, Symbol};
use crate::program::{describe_node, DeclarationKind, Module, NodeId, Program};

use super::error::{SerializeError, SurfaceError, SurfaceResult};
use super::fmt::describe_record;
use super::record::SymbolRecord;
use super::serialize::SymbolSerializer;
use super::visibility::VisibilityClassifier;

#[derive(Clone, Copy, Debug)]
struct Frame {
    node: NodeId,
    require_exported: bool,
}

/// Emits records in pre-order: a node's own record precedes those of its members.
pub struct DeclarationWalker<'a, C: Checker + ?Sized> {
    program: &'a Program,
    checker: &'a C,
    visibility: VisibilityClassifier<'a, C>,
    serializer: SymbolSerializer<'a, C>,
    stack: SmallVec<[Frame; 16]>,
    visited: AHashSet<NodeId>,
    records: Vec<SymbolRecord>,
}

impl<'a, C: Checker + ?Sized> DeclarationWalker<'a, C> {
    pub fn new(program: &'a Program, checker: &'a C) -> Self {
        Self {
            program,
            checker,
            visibility: VisibilityClassifier::new(program, checker),
            serializer: SymbolSerializer::new(checker),
            stack: SmallVec::new(),
            visited: AHashSet::new(),
            records: Vec::new(),
        }
    }

    /// Visits every top-level declaration of `module`, returning how many records it emitted.
    pub fn walk_module(&mut self, module: &Module) -> SurfaceResult<usize> {
        let before = self.records.len();
        for node in &module.declarations {
            self.visit(*node, true)?;
        }
        Ok(self.records.len() - before)
    }

    pub fn visit(&mut self, node: NodeId, require_exported: bool) -> SurfaceResult<()> {
        self.stack.push(Frame {
            node,
            require_exported,
        });
        while let Some(frame) = self.stack.pop() {
            let step = if self.visited.insert(frame.node) {
                self.dispatch(frame)
            } else {
                Err(SurfaceError::RevisitedNode {
                    module: self.module_name(frame.node),
                    node: frame.node,
                    label: describe_node(self.program, frame.node).to_string(),
                })
            };
            if step.is_err() {
                self.stack.clear();
            }
            step?;
        }
        Ok(())
    }

    pub fn records(&self) -> &[SymbolRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SymbolRecord> {
        self.records
    }

    fn dispatch(&mut self, frame: Frame) -> SurfaceResult<()> {
        let program = self.program;
        let node = program.node(frame.node);
        log::trace!("visiting {}", describe_node(program, frame.node));
        match node.declaration_kind() {
            DeclarationKind::Module => {
                self.push_children(frame.node, frame.require_exported);
            }
            DeclarationKind::Class => {
                if node.name.is_none()
                    || !self.visibility.is_public(frame.node, frame.require_exported)
                {
                    return Ok(());
                }
                if let Some(symbol) = self.resolve(frame.node) {
                    let record = self
                        .serializer
                        .serialize_class(&symbol)
                        .map_err(|source| self.serialize_error(frame.node, source))?;
                    self.emit(record);
                }
                self.push_children(frame.node, false);
            }
            DeclarationKind::Property => {
                if !self.visibility.is_public(frame.node, frame.require_exported) {
                    return Ok(());
                }
                self.emit_symbol(frame.node)?;
            }
            DeclarationKind::Enum => {
                if node.name.is_none()
                    || !self.visibility.is_public(frame.node, frame.require_exported)
                {
                    return Ok(());
                }
                self.emit_symbol(frame.node)?;
            }
            DeclarationKind::Other => {}
        }
        Ok(())
    }

    fn emit_symbol(&mut self, node: NodeId) -> SurfaceResult<()> {
        if let Some(symbol) = self.resolve(node) {
            let record = self
                .serializer
                .serialize_symbol(&symbol)
                .map_err(|source| self.serialize_error(node, source))?;
            self.emit(record);
        }
        Ok(())
    }

    /// Unbound declarations and symbols without a value declaration are skipped, not fatal.
    fn resolve(&self, node: NodeId) -> Option<Symbol> {
        match self.checker.resolve_symbol(node) {
            Some(symbol) if symbol.has_value_declaration() => Some(symbol),
            Some(symbol) => {
                log::warn!(
                    "skipping {}: symbol `{}` has no value declaration",
                    describe_node(self.program, node),
                    symbol.name
                );
                None
            }
            None => {
                log::warn!(
                    "skipping {}: no symbol could be resolved",
                    describe_node(self.program, node)
                );
                None
            }
        }
    }

    fn emit(&mut self, record: SymbolRecord) {
        log::debug!("emitting {}", describe_record(&record));
        self.records.push(record);
    }

    fn push_children(&mut self, node: NodeId, require_exported: bool) {
        for child in self.program.children(node).iter().rev() {
            self.stack.push(Frame {
                node: *child,
                require_exported,
            });
        }
    }

    fn module_name(&self, node: NodeId) -> String {
        let module = self.program.node(node).module;
        self.program.module(module).name.clone()
    }

    fn serialize_error(&self, node: NodeId, source: SerializeError) -> SurfaceError {
        SurfaceError::Serialize {
            module: self.module_name(node),
            node,
            label: describe_node(self.program, node).to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{Signature, TableChecker};
    use crate::program::{ModifierFlags, NodeKind, NodeParent, ProgramBuilder};

    fn names(records: &[SymbolRecord]) -> Vec<&str> {
        records.iter().map(|record| record.name.as_str()).collect()
    }

    #[test]
    fn class_members_follow_their_class() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/a.ts");
        let class = builder
            .node(module, NodeKind::Class)
            .name("A")
            .modifiers(ModifierFlags::EXPORT)
            .finish();
        builder.node(class, NodeKind::Property).name("x").annotate("number").finish();
        builder.node(class, NodeKind::Method).name("run").finish();
        builder.node(class, NodeKind::Property).name("y").annotate("string").finish();
        builder.node(module, NodeKind::Enum).name("E").finish();
        let program = builder.finish();
        let checker = TableChecker::new(&program);
        let mut walker = DeclarationWalker::new(&program, &checker);
        let emitted = walker.walk_module(program.module(module)).expect("walk");
        assert_eq!(emitted, 4);
        assert_eq!(
            names(walker.records()),
            vec!["A", "x", "y", "E"],
            "Members come right after their class, methods are skipped"
        );
        assert!(walker.records()[0].constructors.is_some());
        assert!(walker.records()[1].constructors.is_none());
    }

    #[test]
    fn namespaces_pass_the_export_requirement_through() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/a.ts");
        let outer = builder.node(module, NodeKind::Namespace).name("Outer").finish();
        builder.node(outer, NodeKind::Class).name("B").finish();
        builder
            .node(outer, NodeKind::Class)
            .name("C")
            .modifiers(ModifierFlags::EXPORT)
            .finish();
        let inner = builder.node(outer, NodeKind::Namespace).name("Inner").finish();
        builder
            .node(inner, NodeKind::Enum)
            .name("D")
            .modifiers(ModifierFlags::EXPORT)
            .finish();
        builder.node(inner, NodeKind::Property).name("loose").finish();
        let program = builder.finish();
        let checker = TableChecker::new(&program);
        let mut walker = DeclarationWalker::new(&program, &checker);
        walker.walk_module(program.module(module)).expect("walk");
        assert_eq!(
            names(walker.records()),
            vec!["C", "D"],
            "Non-exported nested declarations stay hidden"
        );
    }

    #[test]
    fn members_of_admitted_classes_skip_the_gate() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/a.ts");
        let namespace = builder.node(module, NodeKind::Namespace).name("N").finish();
        let class = builder
            .node(namespace, NodeKind::Class)
            .name("Shown")
            .modifiers(ModifierFlags::EXPORT)
            .finish();
        let inner = builder.node(class, NodeKind::Property).name("inner").finish();
        let program = builder.finish();
        let checker = TableChecker::new(&program);
        assert!(
            !VisibilityClassifier::new(&program, &checker).is_public(inner, true),
            "The member alone would not pass the export gate"
        );
        let mut walker = DeclarationWalker::new(&program, &checker);
        walker.walk_module(program.module(module)).expect("walk");
        assert_eq!(names(walker.records()), vec!["Shown", "inner"]);
    }

    #[test]
    fn anonymous_classes_and_enums_are_skipped() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/a.ts");
        let class = builder.node(module, NodeKind::Class).finish();
        builder.node(class, NodeKind::Property).name("x").finish();
        builder.node(module, NodeKind::Enum).finish();
        let program = builder.finish();
        let checker = TableChecker::new(&program);
        let mut walker = DeclarationWalker::new(&program, &checker);
        walker.walk_module(program.module(module)).expect("walk");
        assert!(walker.records().is_empty(), "Nameless classes are not descended into either");
    }

    #[test]
    fn unresolved_symbols_skip_only_their_own_record() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/a.ts");
        let broken = builder.node(module, NodeKind::Class).name("Broken").finish();
        builder.node(broken, NodeKind::Property).name("kept").finish();
        let ghost = builder.node(module, NodeKind::Property).name("ghost").finish();
        builder.node(module, NodeKind::Enum).name("After").finish();
        let program = builder.finish();
        let mut checker = TableChecker::new(&program);
        checker.facts_mut().unbind(broken);
        checker.facts_mut().unbind(ghost);
        let mut walker = DeclarationWalker::new(&program, &checker);
        walker.walk_module(program.module(module)).expect("unresolved symbols are not fatal");
        assert_eq!(names(walker.records()), vec!["kept", "After"]);
    }

    #[test]
    fn revisiting_a_node_aborts_with_context() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/cyclic.ts");
        let class = builder.node(module, NodeKind::Class).name("Twice").finish();
        builder.link(NodeParent::SourceFile(module), class);
        let program = builder.finish();
        let checker = TableChecker::new(&program);
        let mut walker = DeclarationWalker::new(&program, &checker);
        let err = walker.walk_module(program.module(module)).expect_err("node listed twice");
        assert!(matches!(err, SurfaceError::RevisitedNode { node, .. } if node == class));
        assert_eq!(err.module(), "src/cyclic.ts");
        assert!(err.to_string().contains("class `Twice`"), "Abort message must name the node");
    }

    /// Resolves every named node but drops the value declaration of parameters.
    struct ParameterlessChecker<'p> {
        inner: TableChecker<'p>,
    }

    impl Checker for ParameterlessChecker<'_> {
        fn modifier_flags(&self, node: NodeId) -> ModifierFlags {
            self.inner.modifier_flags(node)
        }

        fn resolve_symbol(&self, node: NodeId) -> Option<Symbol> {
            self.inner.resolve_symbol(node)
        }

        fn resolve_type(&self, symbol: &Symbol) -> String {
            self.inner.resolve_type(symbol)
        }

        fn construct_signatures(&self, symbol: &Symbol) -> Vec<Signature> {
            let mut signatures = self.inner.construct_signatures(symbol);
            for signature in &mut signatures {
                signature.parameters.push(Symbol::new("rest", ModifierFlags::empty(), None));
            }
            signatures
        }

        fn documentation(&self, signature: &Signature) -> Vec<String> {
            self.inner.documentation(signature)
        }
    }

    #[test]
    fn serializer_failures_are_fatal_and_named() {
        let mut builder = ProgramBuilder::new();
        let module = builder.module("src/a.ts");
        builder.node(module, NodeKind::Class).name("A").finish();
        let program = builder.finish();
        let checker = ParameterlessChecker {
            inner: TableChecker::new(&program),
        };
        let mut walker = DeclarationWalker::new(&program, &checker);
        let err = walker
            .walk_module(program.module(module))
            .expect_err("parameter lacks a declaration");
        match err {
            SurfaceError::Serialize { module, label, source, .. } => {
                assert_eq!(module, "src/a.ts");
                assert_eq!(label, "class `A` (#0)");
                assert_eq!(
                    source,
                    SerializeError::MissingValueDeclaration { symbol: "rest".into() }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
