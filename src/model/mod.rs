//! The new part tree.
//!
//! ## Shape
//!
//! ```text
//! LayerModel
//! ├── roots: IndexMap<name, RootPart>    (insertion order = emission order)
//! │   └── node: PartNode
//! │       ├── geometry: Option<CubeList> (None for placeholders)
//! │       ├── pose: PartPose
//! │       └── children: IndexMap<name, PartNode>
//! └── texture: TextureSize
//! ```
//!
//! Nodes are built bottom-up by [`TreeConverter`] and never change once they
//! are attached to a parent.

mod convert;
mod remap;


use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{Cuboid, Position2, TextureSize, Vector3};

pub use convert::TreeConverter;
pub use remap::RemapTable;

/// Parts every humanoid layer must define, in emission order
pub const HUMANOID_PARTS: [&str; 7] = [
    "head",
    "hat",
    "body",
    "right_arm",
    "left_arm",
    "right_leg",
    "left_leg",
];

/// Where a part sits relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PartPose {
    /// No explicit pose; the structural default
    #[default]
    Zero,
    OffsetAndRotation { offset: Vector3, rotation: Vector3 },
}

impl PartPose {
    /// The shared zero pose
    pub const ZERO: PartPose = PartPose::Zero;

    /// `Zero` only when both vectors are zero, otherwise an explicit pose
    pub fn from_legacy(rotation_point: Vector3, rotation_angle: Vector3) -> Self {
        if rotation_point.is_zero() && rotation_angle.is_zero() {
            Self::ZERO
        } else {
            Self::OffsetAndRotation {
                offset: rotation_point,
                rotation: rotation_angle,
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }
}

/// Cube geometry of one part
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CubeList {
    pub mirror: bool,
    pub texture_offset: Position2,
    pub boxes: Vec<Cuboid>,
}

/// An immutable node of the new part tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PartNode {
    name: SmolStr,
    geometry: Option<CubeList>,
    pose: PartPose,
    children: IndexMap<SmolStr, PartNode>,
}

impl PartNode {
    pub fn new(name: impl Into<SmolStr>, geometry: CubeList, pose: PartPose) -> Self {
        Self {
            name: name.into(),
            geometry: Some(geometry),
            pose,
            children: IndexMap::new(),
        }
    }

    /// A node with no geometry and no children, standing in for a part the
    /// legacy source never declared
    pub fn placeholder(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            geometry: None,
            pose: PartPose::ZERO,
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> Option<&CubeList> {
        self.geometry.as_ref()
    }

    pub fn pose(&self) -> PartPose {
        self.pose
    }

    pub fn children(&self) -> &IndexMap<SmolStr, PartNode> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&PartNode> {
        self.children.get(name)
    }

    pub fn boxes(&self) -> &[Cuboid] {
        self.geometry.as_ref().map(|g| g.boxes.as_slice()).unwrap_or(&[])
    }

    pub fn is_placeholder(&self) -> bool {
        self.geometry.is_none()
    }

    /// No boxes and no children: nothing worth emitting
    pub fn is_empty(&self) -> bool {
        self.boxes().is_empty() && self.children.is_empty()
    }

    /// Nodes in this subtree, this one included
    pub fn descendant_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(PartNode::descendant_count)
            .sum::<usize>()
    }

    /// Attach `child` under its own name; a child with the same name is replaced
    pub(crate) fn add_or_replace_child(&mut self, child: PartNode) {
        self.children.insert(child.name.clone(), child);
    }
}

/// A top-level entry of the layer
#[derive(Debug, Clone, PartialEq)]
pub struct RootPart {
    pub node: PartNode,
    /// Emitted even when empty
    pub forced: bool,
}

/// Every top-level part of one converted model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerModel {
    pub roots: IndexMap<SmolStr, RootPart>,
    pub texture: TextureSize,
}

impl LayerModel {
    pub fn new(texture: TextureSize) -> Self {
        Self {
            roots: IndexMap::new(),
            texture,
        }
    }

    pub fn get(&self, name: &str) -> Option<&PartNode> {
        self.roots.get(name).map(|root| &root.node)
    }

    pub fn add_or_replace_root(&mut self, node: PartNode, forced: bool) {
        self.roots
            .insert(SmolStr::new(node.name()), RootPart { node, forced });
    }

    pub fn root_names(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(SmolStr::as_str)
    }
}
