//! Entry point for the `program` subsystem: the declaration tree handed to the surface engine.

pub mod arena;
pub mod builder;
pub mod error;
pub mod fmt;
pub mod id;
pub mod loader;
pub mod modifiers;
pub mod module;
pub mod node;
pub mod tree;

pub use arena::DeclarationArena;
pub use builder::{NodeBuilder, ProgramBuilder};
pub use error::{LoadError, LoadResult};
pub use fmt::{describe_node, NodeFormatter};
pub use id::{ModuleId, NodeId, StringId};
pub use loader::{LoadedProgram, ProgramLoader};
pub use modifiers::ModifierFlags;
pub use module::Module;
pub use node::{DeclarationKind, DeclarationNode, NodeKind, NodeParent};
pub use tree::Program;
