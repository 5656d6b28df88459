//! Entry point for the `surface` subsystem: visibility gating, serialization and the walk that
//! turns a program into its public symbol graph.

pub mod builder;
pub mod error;
pub mod fmt;
pub mod graph;
pub mod record;
pub mod serialize;
pub mod visibility;
pub mod walker;

pub use builder::{build_surface, SurfaceBuilder};
pub use error::{SerializeError, SurfaceError, SurfaceResult};
pub use fmt::{describe_record, RecordFormatter};
pub use graph::SurfaceGraph;
pub use record::{SignatureRecord, SymbolRecord};
pub use serialize::SymbolSerializer;
pub use visibility::VisibilityClassifier;
pub use walker::DeclarationWalker;
