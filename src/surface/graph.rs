//! The ordered result of one surface run and its JSON encoding.

use std::io;

use serde::{Deserialize, Serialize};

use super::record::SymbolRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceGraph {
    records: Vec<SymbolRecord>,
}

impl SurfaceGraph {
    pub fn from_records(records: Vec<SymbolRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SymbolRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SymbolRecord> {
        self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record emitted under `name`.
    pub fn find(&self, name: &str) -> Option<&SymbolRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json<W: io::Write>(&self, writer: W, pretty: bool) -> serde_json::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        }
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl<'a> IntoIterator for &'a SurfaceGraph {
    type Item = &'a SymbolRecord;
    type IntoIter = std::slice::Iter<'a, SymbolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
