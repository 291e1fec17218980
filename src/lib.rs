//! # legacy-model-update
//!
//! Converts legacy `ModelRenderer` entity models into `LayerDefinition`
//! part trees.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert   → End-to-end entry points, options, batch helper
//!   ↓
//! emit      → Java source emitter
//!   ↓
//! model     → Immutable part tree, remap table, tree converter
//!   ↓
//! legacy    → Mutable old-part graph and its builder passes
//!   ↓
//! parser    → Logos lexer, token patterns, legacy pattern set
//!   ↓
//! base      → Primitives (Vector3, Cuboid, names, numeric literals)
//! ```
//!
//! ## Example
//!
//! ```
//! use modelupdate::{MissingPolicy, convert_contents};
//!
//! let source = "
//!     this.RightArm = new ModelRenderer(this, 0, 0);
//!     this.RightArm.addBox(-2.0F, -2.0F, 0.0F, 4, 12, 4);
//! ";
//! let java = convert_contents(source, "ArmModel", MissingPolicy::Strict).unwrap();
//! assert!(java.contains(".addBox(-2, -2, 0, 4, 12, 4)"));
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → legacy → model → emit → convert)
// ============================================================================

/// Foundation types: geometry, name normalization, numeric literals
pub mod base;

/// Parser: Logos lexer and token pattern matching
pub mod parser;

/// Old-part graph built from the legacy source
pub mod legacy;

/// New part tree and the graph-to-tree conversion
pub mod model;

/// Java source emission
pub mod emit;

/// End-to-end conversion
pub mod convert;

/// Crate-wide error type
pub mod error;

// Re-export the entry points
pub use convert::{
    ConvertOptions, convert_batch, convert_contents, convert_contents_with, convert_layer,
    output_type_name, parse_all_old_parts,
};
pub use error::{ConvertError, Result};
pub use legacy::{MissingPolicy, OldModel, OldPart};
pub use model::{LayerModel, PartNode, PartPose, RemapTable};

// Re-export foundation types
pub use base::{Cuboid, Position2, TextRange, TextSize, TextureSize, Vector3};
