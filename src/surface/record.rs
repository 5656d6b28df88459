//! Serialized output units of the surface graph.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRecord {
    pub name: String,
    pub flags: String,
    #[serde(rename = "type")]
    pub type_text: String,
    /// Only class-derived records carry constructors; the key is omitted otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructors: Option<Vec<SignatureRecord>>,
}

impl SymbolRecord {
    pub fn is_class(&self) -> bool {
        self.constructors.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRecord {
    pub parameters: Vec<SymbolRecord>,
    pub return_type: String,
    pub documentation: String,
}
