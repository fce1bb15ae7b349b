//! Segment grammars shared by names and paths.
//!
//! Two grammars are kept side by side and are intentionally not unified:
//!
//! - **Name**: `^[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$`, 2 to 63 characters.
//! - **Path segment**: `[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?`, 1 to 63 characters,
//!   repeated with the `:` separator and anchored over the whole path.
//!
//! In both, the first and last characters are lower-case ASCII letters or
//! digits and interior characters may also be hyphens. Upper-case letters,
//! underscores, slashes and non-ASCII letters are rejected anywhere.
//!
//! The compiled patterns are process-wide and read-only once built.

use once_cell::sync::Lazy;
use regex::Regex;

/// Character separating the segments of a path.
pub const SEPARATOR: char = ':';

/// Literal value of the wildcard path.
pub const WILDCARD_LITERAL: &str = "*";

/// Pattern a [`crate::Name`] must match in full.
pub const NAME_PATTERN: &str = "^[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$";

/// Pattern of a single path segment, unanchored.
pub const SEGMENT_PATTERN: &str = "[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?";

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(NAME_PATTERN).unwrap());

static PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{SEGMENT_PATTERN}({SEPARATOR}{SEGMENT_PATTERN})*$")).unwrap()
});

/// Returns true if `value` matches the name grammar.
pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// Returns true if `value` is one or more path segments joined by single separators.
///
/// The wildcard is not matched here; [`crate::Path::is_valid`] special-cases it.
pub fn is_valid_path(value: &str) -> bool {
    PATH_REGEX.is_match(value)
}
