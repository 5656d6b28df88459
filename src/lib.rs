//! Extracts the public API surface of a typed program into an ordered symbol graph.
//!
//! A [`program::Program`] holds the declaration tree, a [`checker::Checker`] answers semantic
//! questions about it, and [`surface::build_surface`] produces the [`surface::SurfaceGraph`].

pub mod checker;
pub mod program;
pub mod surface;

pub use checker::{Checker, TableChecker};
pub use program::{Program, ProgramBuilder, ProgramLoader};
pub use surface::{build_surface, SurfaceError, SurfaceGraph};
