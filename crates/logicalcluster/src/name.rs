//! Logical cluster names.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{error::LogicalClusterError, grammar, path::Path};

/// Value uniquely identifying a logical cluster.
///
/// A name can be used to access a cluster via `/clusters/<name>` and is part of
/// the storage key of every object the cluster holds. Construction never
/// validates, use [`Name::is_valid`] or the [`FromStr`] conversion to enforce
/// the name grammar. The empty name is the unset value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Wraps `value` as a name without validating it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns a path holding exactly this name as its only value.
    pub fn path(&self) -> Path {
        Path::new(self.0.clone())
    }

    /// Returns the stored value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the stored value matches the name grammar.
    ///
    /// A valid name starts and ends with a lower-case letter or digit, contains
    /// only lower-case letters, digits and hyphens, and is 2 to 63 characters long.
    pub fn is_valid(&self) -> bool {
        grammar::is_valid_name(&self.0)
    }

    /// Returns true if the name is unset.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for Name {
    type Err = LogicalClusterError;

    /// Parses a name, rejecting values outside the name grammar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = Self::new(s);
        if name.is_valid() {
            Ok(name)
        } else {
            tracing::debug!(value = %s, "rejected logical cluster name");
            Err(LogicalClusterError::InvalidName(s.to_string()))
        }
    }
}

impl From<Name> for Path {
    fn from(name: Name) -> Self {
        Path::new(name.0)
    }
}

impl TryFrom<Path> for Name {
    type Error = LogicalClusterError;

    /// Lowers a path without parent into a name.
    fn try_from(path: Path) -> Result<Self, Self::Error> {
        path.name().ok_or_else(|| {
            tracing::debug!(path = %path, "logical cluster path has a parent");
            LogicalClusterError::HasParent(path.to_string())
        })
    }
}
