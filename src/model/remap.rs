//! Canonical name remapping.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::legacy::OldModel;

/// Canonical name -> alternatives to try, in priority order.
///
/// Consulted only when the primary name is absent from the old-part
/// mapping. An entry mapping a name to itself is inert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RemapTable {
    entries: IndexMap<SmolStr, Vec<SmolStr>>,
}

impl RemapTable {
    /// An empty table; nothing is remapped
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames seen in older humanoid models, where the limbs were split
    /// into upper/lower halves.
    pub fn humanoid() -> Self {
        let mut table = Self::new();
        table.insert("right_arm", ["upper_right_arm"]);
        table.insert("left_arm", ["upper_left_arm"]);
        table.insert("right_leg", ["upper_right_leg"]);
        table.insert("left_leg", ["upper_left_leg"]);
        table
    }

    /// Replace the alternatives for `name`
    pub fn insert<I, S>(&mut self, name: impl Into<SmolStr>, alternatives: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.entries
            .insert(name.into(), alternatives.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, name: &str) -> Option<&[SmolStr]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First alternative of `name` that exists in `model`, else `name` itself
    pub fn resolve<'a>(&'a self, name: &'a str, model: &OldModel) -> &'a str {
        self.get(name)
            .and_then(|alternatives| {
                alternatives
                    .iter()
                    .find(|alternative| model.contains(alternative))
            })
            .map(SmolStr::as_str)
            .unwrap_or(name)
    }
}
