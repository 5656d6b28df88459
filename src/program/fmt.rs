//! Formatting helpers for diagnostics and logs.

use std::fmt;

use super::id::NodeId;
use super::tree::Program;

pub struct NodeFormatter<'a> {
    program: &'a Program,
    node: NodeId,
}

impl<'a> NodeFormatter<'a> {
    pub fn new(program: &'a Program, node: NodeId) -> Self {
        Self { program, node }
    }
}

impl fmt::Display for NodeFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.program.node(self.node).kind.keyword();
        match self.program.name_of(self.node) {
            Some(name) => write!(f, "{kind} `{name}` ({})", self.node),
            None => write!(f, "{kind} <anonymous> ({})", self.node),
        }
    }
}

pub fn describe_node(program: &Program, node: NodeId) -> NodeFormatter<'_> {
    NodeFormatter::new(program, node)
}
