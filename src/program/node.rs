//! Declaration node data structures and the kind classification used by the walker.

use smallvec::SmallVec;

use super::id::{ModuleId, NodeId, StringId};
use super::modifiers::ModifierFlags;

/// Syntactic kind recorded for every node in the declaration tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Class,
    Namespace,
    Property,
    Enum,
    EnumMember,
    Constructor,
    Parameter,
    Method,
    Function,
    Variable,
    Interface,
    TypeAlias,
}

impl NodeKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "class" => NodeKind::Class,
            "namespace" | "module" => NodeKind::Namespace,
            "property" => NodeKind::Property,
            "enum" => NodeKind::Enum,
            "enumMember" => NodeKind::EnumMember,
            "constructor" => NodeKind::Constructor,
            "parameter" => NodeKind::Parameter,
            "method" => NodeKind::Method,
            "function" => NodeKind::Function,
            "variable" => NodeKind::Variable,
            "interface" => NodeKind::Interface,
            "typeAlias" => NodeKind::TypeAlias,
            _ => return None,
        };
        Some(kind)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            NodeKind::Class => "class",
            NodeKind::Namespace => "namespace",
            NodeKind::Property => "property",
            NodeKind::Enum => "enum",
            NodeKind::EnumMember => "enumMember",
            NodeKind::Constructor => "constructor",
            NodeKind::Parameter => "parameter",
            NodeKind::Method => "method",
            NodeKind::Function => "function",
            NodeKind::Variable => "variable",
            NodeKind::Interface => "interface",
            NodeKind::TypeAlias => "typeAlias",
        }
    }

    pub fn declaration_kind(self) -> DeclarationKind {
        match self {
            NodeKind::Class => DeclarationKind::Class,
            NodeKind::Namespace => DeclarationKind::Module,
            NodeKind::Property => DeclarationKind::Property,
            NodeKind::Enum => DeclarationKind::Enum,
            NodeKind::EnumMember
            | NodeKind::Constructor
            | NodeKind::Parameter
            | NodeKind::Method
            | NodeKind::Function
            | NodeKind::Variable
            | NodeKind::Interface
            | NodeKind::TypeAlias => DeclarationKind::Other,
        }
    }
}

/// Closed set of shapes the surface walker knows how to handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Module,
    Property,
    Enum,
    Other,
}

/// Syntactic parent of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeParent {
    SourceFile(ModuleId),
    Declaration(NodeId),
}

impl From<ModuleId> for NodeParent {
    fn from(module: ModuleId) -> Self {
        NodeParent::SourceFile(module)
    }
}

impl From<NodeId> for NodeParent {
    fn from(node: NodeId) -> Self {
        NodeParent::Declaration(node)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationNode {
    pub kind: NodeKind,
    pub name: Option<StringId>,
    pub module: ModuleId,
    /// `None` for detached or synthetic nodes; containment is tracked separately.
    pub parent: Option<NodeParent>,
    pub children: SmallVec<[NodeId; 4]>,
    pub modifiers: ModifierFlags,
    pub type_annotation: Option<StringId>,
    pub doc: Option<StringId>,
}

impl DeclarationNode {
    pub fn new(kind: NodeKind, module: ModuleId) -> Self {
        Self {
            kind,
            name: None,
            module,
            parent: None,
            children: SmallVec::new(),
            modifiers: ModifierFlags::empty(),
            type_annotation: None,
            doc: None,
        }
    }

    pub fn declaration_kind(&self) -> DeclarationKind {
        self.kind.declaration_kind()
    }

    pub fn is_top_level(&self) -> bool {
        matches!(self.parent, Some(NodeParent::SourceFile(_)))
    }
}
