//! Error types for conversion operations.

use smol_str::SmolStr;
use text_size::TextRange;
use thiserror::Error;

/// Errors that can occur while converting one legacy model.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A call referenced a part that was never declared (strict mode only).
    #[error("Missing reference: part `{name}` used by {pattern} at {range:?} was never declared")]
    MissingReference {
        name: SmolStr,
        pattern: &'static str,
        range: TextRange,
    },

    /// A captured number could not be parsed.
    #[error("Malformed numeric literal `{text}` in {pattern} at {range:?}")]
    MalformedNumericLiteral {
        text: String,
        pattern: &'static str,
        range: TextRange,
    },

    /// Options could not be read.
    #[cfg(feature = "serde")]
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ConvertError {
    /// Create a missing reference error.
    pub fn missing_reference(name: impl Into<SmolStr>, pattern: &'static str, range: TextRange) -> Self {
        Self::MissingReference {
            name: name.into(),
            pattern,
            range,
        }
    }

    /// Create a malformed literal error.
    pub fn malformed_number(text: impl Into<String>, pattern: &'static str, range: TextRange) -> Self {
        Self::MalformedNumericLiteral {
            text: text.into(),
            pattern,
            range,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
