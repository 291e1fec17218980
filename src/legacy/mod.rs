//! The mutable old-part graph.
//!
//! Records are created by the declaration pass and filled in by the later
//! passes of [`GraphBuilder`]. Nothing outside this module mutates them; the
//! tree converter only reads a finished [`OldModel`].

mod builder;


use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use smol_str::SmolStr;
use text_size::TextRange;
use thiserror::Error;

use crate::base::{Cuboid, Position2, TextureSize, Vector3};

pub use builder::GraphBuilder;

/// One legacy `ModelRenderer` field, keyed by its canonical name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OldPart {
    pub name: SmolStr,
    pub mirror: bool,
    /// Legacy pivot offset
    pub rotation_point: Vector3,
    /// Legacy pivot rotation (radians)
    pub rotation_angle: Vector3,
    pub texture_offset: Position2,
    /// In source order
    pub boxes: Vec<Cuboid>,
    /// Canonical names of attached children, in attachment order.
    /// The [`OldModel`] owns every record; these are lookups only.
    pub children: Vec<SmolStr>,
    /// Set when the part is first attached as someone's child
    pub has_parent: bool,
}

impl OldPart {
    pub fn new(name: impl Into<SmolStr>, texture_offset: Position2) -> Self {
        Self {
            name: name.into(),
            texture_offset,
            ..Self::default()
        }
    }

    /// Roots are never referenced as a child
    pub fn is_root(&self) -> bool {
        !self.has_parent
    }
}

/// The result of parsing one legacy source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OldModel {
    /// Canonical name -> record, in declaration order
    pub parts: IndexMap<SmolStr, OldPart>,
    pub texture: TextureSize,
    /// Matches skipped under [`MissingPolicy::Ignore`]
    pub diagnostics: Vec<MissingReference>,
}

impl OldModel {
    pub fn get(&self, name: &str) -> Option<&OldPart> {
        self.parts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Tree entry points, in declaration order.
    ///
    /// Every non-root record is reachable only through its parent's child
    /// list, so walking from these visits each record once.
    pub fn roots(&self) -> impl Iterator<Item = &OldPart> {
        self.parts.values().filter(|part| part.is_root())
    }
}

/// What to do when a call names a part that was never declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MissingPolicy {
    /// Report the reference and skip that one call
    #[default]
    Ignore,
    /// Abort the conversion
    Strict,
}

impl MissingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown missing-reference policy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown missing-reference policy `{0}` (expected `ignore` or `strict`)")]
pub struct ParsePolicyError(pub String);

impl FromStr for MissingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "strict" => Ok(Self::Strict),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// A call skipped because it referenced an undeclared part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    /// Pattern that produced the call
    pub pattern: &'static str,
    /// Canonical name that was looked up
    pub name: SmolStr,
    /// Source range of the whole call
    pub range: TextRange,
}

impl fmt::Display for MissingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {:?} references undeclared part `{}`",
            self.pattern, self.range, self.name
        )
    }
}
