//! Conversion pipeline tests
//!
//! Tests through the public API only:
//! - Pattern extraction over real legacy sources
//! - Old-part graph construction and missing-reference policy
//! - Full conversion to Java source

mod tests_end_to_end;
mod tests_missing_policy;
mod tests_patterns;
