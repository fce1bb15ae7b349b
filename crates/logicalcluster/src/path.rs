//! Logical cluster paths.
//!
//! A [`Path`] is a colon separated list of segments describing a location in
//! the logical cluster hierarchy, like a file path in a file-system. In the
//! following hierarchy:
//!
//! ```text
//! root/                    (62208dab)
//! ├── accounting           (c8a942c5)
//! │   └── us-west          (33bab531)
//! │       └── invoices     (f5865fce)
//! └── management           (e7e08986)
//!     └── us-west-invoices (f5865fce)
//! ```
//!
//! the `invoices` cluster is reachable through all of:
//! - `root:accounting:us-west:invoices`
//! - `62208dab:accounting:us-west:invoices`
//! - `c8a942c5:us-west:invoices`
//! - `33bab531:invoices`
//! - `f5865fce`
//! - `root:management:us-west-invoices`
//! - `e7e08986:us-west-invoices`
//!
//! All operations are plain string manipulations. Nothing is normalized and
//! nothing is validated unless [`Path::is_valid`] is called.

use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::LogicalClusterError,
    grammar::{self, SEPARATOR, WILDCARD_LITERAL},
    name::Name,
};

/// Path of requests spanning many logical clusters.
pub const WILDCARD: Path = Path { value: Cow::Borrowed(WILDCARD_LITERAL) };

const REQUEST_PATH_PREFIX: &str = "/clusters";

/// Colon separated list of segments addressing a logical cluster.
///
/// The empty path is the unset root value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    value: Cow<'static, str>,
}

impl Path {
    /// Wraps `value` as a path without validating it.
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: Cow::Owned(value.into()) }
    }

    /// Wraps `value` as a path and reports whether it is valid.
    pub fn new_validated(value: impl Into<String>) -> (Self, bool) {
        let path = Self::new(value);
        let valid = path.is_valid();
        (path, valid)
    }

    /// Returns true if the path is unset.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns true if this is the [`WILDCARD`] path.
    pub fn is_wildcard(&self) -> bool {
        *self == WILDCARD
    }

    /// Returns the stored value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the path as a name, or `None` if the path has a parent.
    pub fn name(&self) -> Option<Name> {
        if self.parent().is_some() {
            return None;
        }
        Some(Name::new(self.as_str()))
    }

    /// Returns the URL path used to reach the API of this logical cluster.
    ///
    /// The value is joined under `/clusters` and the result is lexically cleaned:
    /// repeated slashes collapse, `.` elements are dropped and `..` elements
    /// remove the preceding element without climbing above the root.
    pub fn request_path(&self) -> String {
        let mut elements: Vec<&str> = Vec::new();
        for element in REQUEST_PATH_PREFIX.split('/').chain(self.value.split('/')) {
            match element {
                "" | "." => {}
                ".." => {
                    elements.pop();
                }
                element => elements.push(element),
            }
        }
        format!("/{}", elements.join("/"))
    }

    /// Returns all but the last segment of the path.
    ///
    /// `None` is returned whenever the computed parent is empty. This covers
    /// both a path without separator and a path whose only separator is
    /// leading (`":a"`), the two cases are not distinguished.
    pub fn parent(&self) -> Option<Path> {
        let (parent, _) = self.split();
        if parent.is_empty() { None } else { Some(parent) }
    }

    /// Splits the path immediately following the final separator.
    ///
    /// Without separator the parent is empty and the whole value is returned
    /// as the trailing segment. Consecutive separators are kept literally.
    pub fn split(&self) -> (Path, &str) {
        let value = self.as_str();
        match value.rfind(SEPARATOR) {
            Some(i) => (Path::new(&value[..i]), &value[i + SEPARATOR.len_utf8()..]),
            None => (Path::default(), value),
        }
    }

    /// Returns the last segment of the path.
    pub fn base(&self) -> &str {
        let (_, base) = self.split();
        base
    }

    /// Returns a new path with `segment` appended after a separator.
    ///
    /// Joining onto the empty path yields `segment` alone.
    pub fn join(&self, segment: &str) -> Path {
        if self.value.is_empty() {
            return Path::new(segment);
        }
        Path::new(format!("{}{SEPARATOR}{segment}", self.value))
    }

    /// Returns true if the stored value starts with the value of `other`.
    ///
    /// This is a raw string prefix test: `elephant2` has the prefix `elephant`.
    pub fn has_prefix(&self, other: &Path) -> bool {
        self.value.starts_with(other.as_str())
    }

    /// Returns true if the path is the [`WILDCARD`] or a colon separated list of
    /// segments, each starting and ending with a lower-case letter or digit and
    /// containing only lower-case letters, digits and hyphens.
    pub fn is_valid(&self) -> bool {
        self.is_wildcard() || grammar::is_valid_path(&self.value)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl FromStr for Path {
    type Err = LogicalClusterError;

    /// Parses a path, rejecting values that are neither the wildcard nor valid segments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::new_validated(s) {
            (path, true) => Ok(path),
            (_, false) => {
                tracing::debug!(value = %s, "rejected logical cluster path");
                Err(LogicalClusterError::InvalidPath(s.to_string()))
            }
        }
    }
}
