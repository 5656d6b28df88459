//! Loading pipeline that turns JSON program dumps from a parser front end into a declaration
//! tree plus the checker facts recorded alongside it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::checker::{CheckerFacts, TableChecker};

use super::builder::ProgramBuilder;
use super::error::{LoadError, LoadResult};
use super::modifiers::ModifierFlags;
use super::node::{NodeKind, NodeParent};
use super::tree::Program;

#[derive(Debug, Deserialize)]
struct ProgramDump {
    #[serde(default)]
    modules: Vec<ModuleDump>,
}

#[derive(Debug, Deserialize)]
struct ModuleDump {
    name: String,
    #[serde(default)]
    foreign: bool,
    #[serde(default)]
    declarations: Vec<DeclarationDump>,
}

#[derive(Debug, Deserialize)]
struct DeclarationDump {
    kind: String,
    name: Option<String>,
    #[serde(default)]
    modifiers: Vec<String>,
    annotation: Option<String>,
    doc: Option<String>,
    #[serde(rename = "type")]
    resolved_type: Option<String>,
    #[serde(default)]
    unresolved: bool,
    #[serde(default)]
    detached: bool,
    error: Option<String>,
    #[serde(default)]
    children: Vec<DeclarationDump>,
}

/// A program together with the facts the front end's checker reported for it.
#[derive(Debug)]
pub struct LoadedProgram {
    pub program: Program,
    pub facts: CheckerFacts,
}

impl LoadedProgram {
    pub fn checker(&self) -> TableChecker<'_> {
        TableChecker::with_facts(&self.program, self.facts.clone())
    }
}

#[derive(Default)]
pub struct ProgramLoader {
    builder: ProgramBuilder,
    facts: CheckerFacts,
}

impl ProgramLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads one dump from disk, appending its modules after any loaded so far.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> LoadResult<usize> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&path.display().to_string(), &text)
    }

    /// Parses one dump, returning the number of modules it contributed.
    pub fn load_str(&mut self, name: &str, text: &str) -> LoadResult<usize> {
        let dump: ProgramDump = serde_json::from_str(text).map_err(|source| LoadError::Json {
            name: name.to_owned(),
            source,
        })?;
        let count = dump.modules.len();
        for module in dump.modules {
            let id = if module.foreign {
                self.builder.foreign_module(module.name)
            } else {
                self.builder.module(module.name)
            };
            for declaration in &module.declarations {
                self.declare(name, NodeParent::SourceFile(id), declaration)?;
            }
        }
        log::debug!("loaded {count} module(s) from `{name}`");
        Ok(count)
    }

    pub fn finish(self) -> LoadedProgram {
        LoadedProgram {
            program: self.builder.finish(),
            facts: self.facts,
        }
    }

    fn declare(
        &mut self,
        source: &str,
        container: NodeParent,
        dump: &DeclarationDump,
    ) -> LoadResult<()> {
        let kind = NodeKind::from_keyword(&dump.kind).ok_or_else(|| LoadError::UnknownKind {
            name: source.to_owned(),
            kind: dump.kind.clone(),
        })?;
        let mut modifiers = ModifierFlags::empty();
        for keyword in &dump.modifiers {
            modifiers |=
                ModifierFlags::from_keyword(keyword).ok_or_else(|| LoadError::UnknownModifier {
                    name: source.to_owned(),
                    modifier: keyword.clone(),
                })?;
        }

        let mut node = self.builder.node(container, kind).modifiers(modifiers);
        if let Some(name) = &dump.name {
            node = node.name(name);
        }
        if let Some(annotation) = &dump.annotation {
            node = node.annotate(annotation);
        }
        if let Some(doc) = &dump.doc {
            node = node.doc(doc);
        }
        if dump.detached {
            node = node.detached();
        }
        let id = node.finish();

        if let Some(resolved) = &dump.resolved_type {
            self.facts.resolve_as(id, resolved.clone());
        }
        if dump.unresolved {
            self.facts.unbind(id);
        }
        if let Some(reason) = &dump.error {
            let module = self.builder.module_of(id);
            self.facts.reject(module, id, reason.clone());
        }

        for child in &dump.children {
            self.declare(source, NodeParent::Declaration(id), child)?;
        }
        Ok(())
    }
}
