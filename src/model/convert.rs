//! Old-part graph -> new part tree.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::{CubeList, LayerModel, PartNode, PartPose, RemapTable};
use crate::legacy::{OldModel, OldPart};

/// Converts records of one finished [`OldModel`].
///
/// Conversion is a pure read of the model: the same record always converts
/// to the same node.
pub struct TreeConverter<'m> {
    model: &'m OldModel,
    remap: &'m RemapTable,
}

impl<'m> TreeConverter<'m> {
    pub fn new(model: &'m OldModel, remap: &'m RemapTable) -> Self {
        Self { model, remap }
    }

    /// Convert `part` and everything below it.
    ///
    /// The node takes `name_override` when given, else the record's name.
    /// Children keep their own names. A record reached twice in the subtree
    /// is converted under its first parent only.
    pub fn convert(&self, part: &OldPart, name_override: Option<&str>) -> PartNode {
        let mut visited = FxHashSet::default();
        self.convert_inner(part, name_override, &mut visited)
    }

    /// Convert the record called `name`, falling back to the remap table and
    /// finally to an empty placeholder named `name`
    pub fn convert_named(&self, name: &str) -> PartNode {
        match self.find(name) {
            Some(part) => self.convert(part, Some(name)),
            None => {
                debug!("[CONVERT] {} not found; emitting placeholder", name);
                PartNode::placeholder(name)
            }
        }
    }

    /// The record `convert_named` would use for `name`
    pub fn find(&self, name: &str) -> Option<&'m OldPart> {
        self.model.get(name).or_else(|| {
            let resolved = self.remap.resolve(name, self.model);
            let part = self.model.get(resolved);
            if part.is_some() {
                trace!("[CONVERT] {} remapped to {}", name, resolved);
            }
            part
        })
    }

    /// Build the whole layer.
    ///
    /// Each name in `forced` becomes a top-level entry that is emitted even
    /// when empty. Every remaining root follows in declaration order. Every
    /// record is converted exactly once across the layer: a base slot whose
    /// record is attached under a parent is left to that parent, and a
    /// record already converted is never repeated.
    pub fn build_layer<S: AsRef<str>>(&self, forced: &[S]) -> LayerModel {
        let mut layer = LayerModel::new(self.model.texture);
        let mut visited: FxHashSet<SmolStr> = FxHashSet::default();

        for name in forced {
            let name = name.as_ref();
            match self.find(name) {
                Some(part) if part.has_parent => {
                    warn!(
                        "[CONVERT] {} is attached under a parent; base slot {} left to it",
                        part.name, name
                    );
                }
                Some(part) if visited.contains(&part.name) => {
                    warn!(
                        "[CONVERT] {} already fills another base slot; skipping {}",
                        part.name, name
                    );
                }
                Some(part) => {
                    let node = self.convert_inner(part, Some(name), &mut visited);
                    layer.add_or_replace_root(node, true);
                }
                None => {
                    debug!("[CONVERT] {} not found; emitting placeholder", name);
                    layer.add_or_replace_root(PartNode::placeholder(name), true);
                }
            }
        }

        for root in self.model.roots() {
            if visited.contains(&root.name) {
                continue;
            }
            let node = self.convert_inner(root, None, &mut visited);
            layer.add_or_replace_root(node, false);
        }

        debug!(
            "[CONVERT] layer with {} top-level parts ({} forced), {} records converted",
            layer.roots.len(),
            forced.len(),
            visited.len()
        );
        layer
    }

    fn convert_inner(
        &self,
        part: &OldPart,
        name_override: Option<&str>,
        visited: &mut FxHashSet<SmolStr>,
    ) -> PartNode {
        let name = name_override.unwrap_or(part.name.as_str());
        let geometry = CubeList {
            mirror: part.mirror,
            texture_offset: part.texture_offset,
            boxes: part.boxes.clone(),
        };
        let pose = PartPose::from_legacy(part.rotation_point, part.rotation_angle);
        let mut node = PartNode::new(name, geometry, pose);

        visited.insert(part.name.clone());
        for child_name in &part.children {
            // The builder only attaches declared parts
            let Some(child) = self.model.get(child_name) else {
                continue;
            };
            // Covers cycles too: an ancestor is always already visited
            if !visited.insert(child.name.clone()) {
                warn!(
                    "[CONVERT] {} already converted; skipping its attachment under {}",
                    child_name, part.name
                );
                continue;
            }
            node.add_or_replace_child(self.convert_inner(child, None, visited));
        }

        node
    }
}
