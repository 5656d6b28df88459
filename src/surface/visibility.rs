//! Decides which declarations belong to the public surface.

use crate::checker::Checker;
use crate::program::{ModifierFlags, NodeId, Program};

pub struct VisibilityClassifier<'a, C: Checker + ?Sized> {
    program: &'a Program,
    checker: &'a C,
}

impl<'a, C: Checker + ?Sized> VisibilityClassifier<'a, C> {
    pub fn new(program: &'a Program, checker: &'a C) -> Self {
        Self { program, checker }
    }

    /// With `require_exported` unset every node passes. Otherwise a node passes when it carries
    /// an export modifier or sits directly at its module's top level. Detached nodes only pass
    /// through the modifier.
    pub fn is_public(&self, node: NodeId, require_exported: bool) -> bool {
        if !require_exported {
            return true;
        }
        self.checker.modifier_flags(node).contains(ModifierFlags::EXPORT)
            || self.program.node(node).is_top_level()
    }
}
