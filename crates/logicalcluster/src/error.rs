use thiserror::Error;

/// Errors reported by the strict conversions of [`crate::Name`] and [`crate::Path`].
///
/// The value operations themselves never fail, absence is reported through
/// `Option` or the empty value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogicalClusterError {
    #[error("Logical cluster error, invalid name (value: {0:?})")]
    InvalidName(String),

    #[error("Logical cluster error, invalid path (value: {0:?})")]
    InvalidPath(String),

    #[error("Logical cluster error, path has a parent and is not a name (value: {0:?})")]
    HasParent(String),
}
