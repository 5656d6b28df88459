//! One-line record summaries for logs and the command line `--summary` mode.

use std::fmt;

use super::record::SymbolRecord;

pub struct RecordFormatter<'a> {
    record: &'a SymbolRecord,
}

impl<'a> RecordFormatter<'a> {
    pub fn new(record: &'a SymbolRecord) -> Self {
        Self { record }
    }
}

impl fmt::Display for RecordFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        write!(f, "{} [{}]: {}", record.name, record.flags, record.type_text)?;
        if let Some(constructors) = &record.constructors {
            write!(f, "; {} constructor(s)", constructors.len())?;
        }
        Ok(())
    }
}

pub fn describe_record(record: &SymbolRecord) -> RecordFormatter<'_> {
    RecordFormatter::new(record)
}
