//! Foundation types for the model updater.
//!
//! This module provides the value types every later stage shares:
//! - [`Vector3`], [`Position2`] - Legacy coordinates and texture offsets
//! - [`Cuboid`] - A single legacy box (offset, size, inflate)
//! - [`TextureSize`] - Texture sheet dimensions
//! - [`normalize`] - Canonical snake_case part names
//! - [`parse_numeric`], [`format_literal`] - Java numeric literals in and out
//!
//! This module has NO dependencies on other modelupdate modules.

mod geometry;
mod name;
mod number;

pub use geometry::{Cuboid, Position2, TextureSize, Vector3};
pub use name::normalize;
pub use number::{format_literal, parse_numeric};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
