//! Pattern extraction over legacy model sources
//!
//! There is no grammar here: legacy models are a flat list of a few call
//! shapes, so the source is lexed once and each shape is matched
//! independently over the token stream.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Pattern → Matches (lazy, source order, positional captures)
//!     ↓
//! legacy::builder → old-part graph
//! ```

mod legacy;
mod lexer;
mod pattern;

pub use legacy::LegacyPatterns;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use pattern::{Capture, CaptureKind, Match, Matches, Pattern, Step, significant_tokens};
