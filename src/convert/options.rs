//! Per-conversion configuration.

use smol_str::SmolStr;

use crate::emit::EmitOptions;
use crate::legacy::MissingPolicy;
use crate::model::{HUMANOID_PARTS, RemapTable};

/// Everything one conversion can be tuned with.
///
/// The default converts humanoid models: the seven vanilla parts are forced
/// at the top of the layer and split limbs are remapped onto them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    /// What to do with calls on undeclared parts
    pub missing: MissingPolicy,
    /// Alternatives tried when a base part is not declared directly
    pub remap: RemapTable,
    /// Top-level parts emitted even when the legacy source lacks them
    pub base_parts: Vec<SmolStr>,
    pub emit: EmitOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            missing: MissingPolicy::default(),
            remap: RemapTable::humanoid(),
            base_parts: HUMANOID_PARTS.iter().map(SmolStr::new).collect(),
            emit: EmitOptions::default(),
        }
    }
}

impl ConvertOptions {
    pub fn with_missing(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    pub fn with_remap(mut self, remap: RemapTable) -> Self {
        self.remap = remap;
        self
    }

    pub fn with_base_parts<I, S>(mut self, base_parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.base_parts = base_parts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_emit(mut self, emit: EmitOptions) -> Self {
        self.emit = emit;
        self
    }

    /// Read options from JSON. Missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
