//! End-to-end conversion entry points.
//!
//! ```text
//! source ──GraphBuilder──> OldModel ──TreeConverter──> LayerModel ──emit──> Java
//! ```
//!
//! Every call owns its whole pipeline, so independent sources can be
//! converted concurrently; [`convert_batch`] does exactly that with rayon.

mod options;


use std::sync::LazyLock;

use rayon::prelude::*;
use tracing::debug;

use crate::emit::emit;
use crate::error::Result;
use crate::legacy::{GraphBuilder, MissingPolicy, OldModel};
use crate::model::{LayerModel, TreeConverter};
use crate::parser::LegacyPatterns;

pub use options::ConvertOptions;

static PATTERNS: LazyLock<LegacyPatterns> = LazyLock::new(LegacyPatterns::model_renderer);

/// Parse `source` into its old-part graph.
///
/// Fails with [`ConvertError::MissingReference`](crate::error::ConvertError::MissingReference)
/// when `policy` is strict and a call names an undeclared part.
pub fn parse_all_old_parts(source: &str, policy: MissingPolicy) -> Result<OldModel> {
    GraphBuilder::new(&PATTERNS, policy).build(source)
}

/// Parse `source` and assemble its layer without rendering it
pub fn convert_layer(source: &str, options: &ConvertOptions) -> Result<LayerModel> {
    let model = parse_all_old_parts(source, options.missing)?;
    let converter = TreeConverter::new(&model, &options.remap);
    Ok(converter.build_layer(&options.base_parts))
}

/// Convert one legacy source into a `type_name` class with default options
pub fn convert_contents(source: &str, type_name: &str, policy: MissingPolicy) -> Result<String> {
    let options = ConvertOptions::default().with_missing(policy);
    convert_contents_with(source, type_name, &options)
}

pub fn convert_contents_with(
    source: &str,
    type_name: &str,
    options: &ConvertOptions,
) -> Result<String> {
    let layer = convert_layer(source, options)?;
    debug!(
        "[CONVERT] {}: {} top-level parts",
        type_name,
        layer.roots.len()
    );
    Ok(emit(&layer, type_name, &options.emit))
}

/// Convert `(type_name, source)` pairs in parallel.
///
/// Results come back in input order, one per input; a failing input does
/// not affect the others.
pub fn convert_batch<N, S>(inputs: &[(N, S)], options: &ConvertOptions) -> Vec<Result<String>>
where
    N: AsRef<str> + Sync,
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|(type_name, source)| {
            convert_contents_with(source.as_ref(), type_name.as_ref(), options)
        })
        .collect()
}

/// Class name for a converted file: `file_stem` with its first `Model`
/// removed, then `Model` appended (`ModelNinja` -> `NinjaModel`)
pub fn output_type_name(file_stem: &str) -> String {
    format!("{}Model", file_stem.replacen("Model", "", 1))
}
