//! Identifier helpers used by the declaration tree.

use std::fmt;
use std::num::NonZeroU32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    pub fn from_index(index: usize) -> Self {
        let raw = NonZeroU32::new((index as u32) + 1).expect("node index overflow");
        Self(raw)
    }

    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u32);

impl ModuleId {
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < (u32::MAX as usize),
            "ModuleId index exceeded u32::MAX range"
        );
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StringId(NonZeroU32);

impl StringId {
    pub(crate) fn from_index(index: usize) -> Self {
        let raw = NonZeroU32::new((index as u32) + 1).expect("string index overflow");
        Self(raw)
    }

    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
