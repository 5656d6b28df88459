//! Entry point for the `checker` subsystem: the semantic oracle the surface engine queries.
//!
//! The engine never computes types or binds names itself. Every semantic fact comes through
//! [`Checker`], which is passed explicitly to each component that needs it.

pub mod facts;
pub mod symbol;
pub mod table;

pub use facts::CheckerFacts;
pub use symbol::{Rejection, Signature, Symbol};
pub use table::TableChecker;

use crate::program::{ModifierFlags, Module, NodeId};

pub trait Checker {
    /// Combined modifier flags of the declaration at `node`.
    fn modifier_flags(&self, node: NodeId) -> ModifierFlags;

    /// Binds `node` to a symbol, or `None` when the declaration is unbound or malformed.
    fn resolve_symbol(&self, node: NodeId) -> Option<Symbol>;

    /// Canonical rendering of the symbol's type at its value declaration.
    fn resolve_type(&self, symbol: &Symbol) -> String;

    /// Construct signatures of the symbol's type, in the type's own order.
    fn construct_signatures(&self, symbol: &Symbol) -> Vec<Signature>;

    /// Display parts of the doc comment attached to `signature`.
    fn documentation(&self, signature: &Signature) -> Vec<String>;

    /// Whole-module validation run before any declaration is walked.
    fn check_module(&self, _module: &Module) -> Result<(), Rejection> {
        Ok(())
    }
}
