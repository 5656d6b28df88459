//! Converts resolved symbols and signatures into output records.

use crate::checker::{Checker, Signature, Symbol};

use super::error::SerializeError;
use super::record::{SignatureRecord, SymbolRecord};

pub struct SymbolSerializer<'a, C: Checker + ?Sized> {
    checker: &'a C,
}

impl<'a, C: Checker + ?Sized> SymbolSerializer<'a, C> {
    pub fn new(checker: &'a C) -> Self {
        Self { checker }
    }

    /// Callers must only pass symbols with a value declaration; anything else is an
    /// internal-consistency error.
    pub fn serialize_symbol(&self, symbol: &Symbol) -> Result<SymbolRecord, SerializeError> {
        if symbol.name.is_empty() {
            return Err(SerializeError::EmptyName);
        }
        if !symbol.has_value_declaration() {
            return Err(SerializeError::MissingValueDeclaration {
                symbol: symbol.name.clone(),
            });
        }
        Ok(SymbolRecord {
            name: symbol.name.clone(),
            flags: symbol.flags.render(),
            type_text: self.checker.resolve_type(symbol),
            constructors: None,
        })
    }

    pub fn serialize_signature(
        &self,
        signature: &Signature,
    ) -> Result<SignatureRecord, SerializeError> {
        let parameters = signature
            .parameters
            .iter()
            .map(|parameter| self.serialize_symbol(parameter))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SignatureRecord {
            parameters,
            return_type: signature.return_type.clone(),
            documentation: self.checker.documentation(signature).concat(),
        })
    }

    /// Symbol record plus one constructor entry per construct signature of the class type.
    pub fn serialize_class(&self, symbol: &Symbol) -> Result<SymbolRecord, SerializeError> {
        let mut record = self.serialize_symbol(symbol)?;
        let constructors = self
            .checker
            .construct_signatures(symbol)
            .iter()
            .map(|signature| self.serialize_signature(signature))
            .collect::<Result<Vec<_>, _>>()?;
        record.constructors = Some(constructors);
        Ok(record)
    }
}
