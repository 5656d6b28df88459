//! In-memory checker that answers oracle queries from a program plus recorded facts.

use crate::program::{ModifierFlags, Module, NodeId, NodeKind, Program};

use super::facts::CheckerFacts;
use super::symbol::{Rejection, Signature, Symbol};
use super::Checker;

pub struct TableChecker<'p> {
    program: &'p Program,
    facts: CheckerFacts,
}

impl<'p> TableChecker<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self::with_facts(program, CheckerFacts::default())
    }

    pub fn with_facts(program: &'p Program, facts: CheckerFacts) -> Self {
        Self { program, facts }
    }

    pub fn program(&self) -> &'p Program {
        self.program
    }

    pub fn facts(&self) -> &CheckerFacts {
        &self.facts
    }

    pub fn facts_mut(&mut self) -> &mut CheckerFacts {
        &mut self.facts
    }

    fn annotation_or_any(&self, node: NodeId) -> String {
        self.program.annotation_of(node).unwrap_or("any").to_owned()
    }

    /// Binds a constructor parameter. Every parameter yields a symbol so signature arity is
    /// kept: unnamed (destructured) parameters get the positional name `__N`, and unbound ones
    /// come back without a value declaration.
    fn parameter_symbol(&self, position: usize, parameter: NodeId) -> Symbol {
        let name = match self.program.name_of(parameter) {
            Some(name) => name.to_owned(),
            None => format!("__{position}"),
        };
        let declaration = (!self.facts.is_unbound(parameter)).then_some(parameter);
        Symbol::new(name, self.modifier_flags(parameter), declaration)
    }

    fn constructor_signature(&self, class: &Symbol, constructor: NodeId) -> Signature {
        let parameters = self
            .program
            .children(constructor)
            .iter()
            .copied()
            .filter(|child| self.program.node(*child).kind == NodeKind::Parameter)
            .enumerate()
            .map(|(position, child)| self.parameter_symbol(position, child))
            .collect();
        Signature {
            parameters,
            return_type: class.name.clone(),
            declaration: Some(constructor),
        }
    }
}

impl Checker for TableChecker<'_> {
    fn modifier_flags(&self, node: NodeId) -> ModifierFlags {
        self.program.node(node).modifiers
    }

    fn resolve_symbol(&self, node: NodeId) -> Option<Symbol> {
        if self.facts.is_unbound(node) {
            return None;
        }
        let name = self.program.name_of(node)?;
        Some(Symbol::new(name, self.modifier_flags(node), Some(node)))
    }

    fn resolve_type(&self, symbol: &Symbol) -> String {
        let Some(declaration) = symbol.value_declaration else {
            return "any".to_owned();
        };
        if let Some(rendered) = self.facts.resolved_type(declaration) {
            return rendered.to_owned();
        }
        match self.program.node(declaration).kind {
            NodeKind::Class | NodeKind::Enum | NodeKind::Namespace => {
                format!("typeof {}", symbol.name)
            }
            NodeKind::EnumMember => match self.program.parent_name_of(declaration) {
                Some(owner) => format!("{owner}.{}", symbol.name),
                None => symbol.name.clone(),
            },
            NodeKind::Interface | NodeKind::TypeAlias => symbol.name.clone(),
            NodeKind::Property
            | NodeKind::Parameter
            | NodeKind::Variable
            | NodeKind::Method
            | NodeKind::Function
            | NodeKind::Constructor => self.annotation_or_any(declaration),
        }
    }

    fn construct_signatures(&self, symbol: &Symbol) -> Vec<Signature> {
        let Some(declaration) = symbol.value_declaration else {
            return Vec::new();
        };
        if self.program.node(declaration).kind != NodeKind::Class {
            return Vec::new();
        }
        let constructors: Vec<NodeId> = self
            .program
            .children(declaration)
            .iter()
            .copied()
            .filter(|child| self.program.node(*child).kind == NodeKind::Constructor)
            .collect();
        if constructors.is_empty() {
            // Implicit constructor; it borrows the class declaration and its doc comment.
            return vec![Signature {
                parameters: Vec::new(),
                return_type: symbol.name.clone(),
                declaration: Some(declaration),
            }];
        }
        constructors
            .into_iter()
            .map(|constructor| self.constructor_signature(symbol, constructor))
            .collect()
    }

    fn documentation(&self, signature: &Signature) -> Vec<String> {
        signature
            .declaration
            .and_then(|node| self.program.doc_of(node))
            .map(|doc| vec![doc.to_owned()])
            .unwrap_or_default()
    }

    fn check_module(&self, module: &Module) -> Result<(), Rejection> {
        match self.facts.rejection(module.id) {
            Some(rejection) => Err(rejection.clone()),
            None => Ok(()),
        }
    }
}
