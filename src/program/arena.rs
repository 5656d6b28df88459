//! Stores declaration nodes plus the interned strings they reference.

use ahash::AHashMap;

use super::id::{NodeId, StringId};
use super::node::DeclarationNode;

#[derive(Default, Debug)]
struct StringPool {
    values: Vec<String>,
    lookup: AHashMap<String, StringId>,
}

impl StringPool {
    fn intern<S: AsRef<str>>(&mut self, value: S) -> StringId {
        let value_ref = value.as_ref();
        if let Some(id) = self.lookup.get(value_ref) {
            return *id;
        }
        let owned = value_ref.to_owned();
        let id = StringId::from_index(self.values.len());
        self.values.push(owned.clone());
        self.lookup.insert(owned, id);
        id
    }

    fn resolve(&self, id: StringId) -> &str {
        &self.values[id.index()]
    }
}

#[derive(Default, Debug)]
pub struct DeclarationArena {
    nodes: Vec<DeclarationNode>,
    strings: StringPool,
}

impl DeclarationArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_node(&mut self, node: DeclarationNode) -> NodeId {
        self.nodes.push(node);
        NodeId::from_index(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &DeclarationNode {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut DeclarationNode {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn intern_string<S: AsRef<str>>(&mut self, value: S) -> StringId {
        self.strings.intern(value)
    }

    pub fn resolve_string(&self, id: StringId) -> &str {
        self.strings.resolve(id)
    }
}
