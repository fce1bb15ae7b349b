//! Logical cluster names and paths.
//!
//! A logical cluster is an addressable node in a hierarchy of workspaces inside
//! a multi-tenant control plane. This crate provides the two value types used
//! to identify and address them:
//!
//! - [`Name`]: a single hierarchy segment, or an opaque cluster identifier.
//! - [`Path`]: a colon separated list of segments, like a file path in a
//!   file-system (`root:accounting:us-west:invoices`).
//!
//! Both types are immutable wrappers around a string. Construction never
//! validates; callers that care about well-formedness ask explicitly with
//! `is_valid()`, or use the strict [`std::str::FromStr`] conversions which
//! report a [`LogicalClusterError`].
//!
//! ## Grammars
//!
//! Names and path segments follow two distinct grammars, see [`grammar`]. The
//! name grammar requires at least two characters, while a path segment may be a
//! single character.
//!
//! ## Objects
//!
//! Any type exposing a string to string annotation map can implement
//! [`Object`], and [`from_object`] reads its logical cluster from the
//! [`ANNOTATION_KEY`] annotation.

#[cfg(test)]
mod tests;

pub mod error;
pub mod grammar;
pub mod name;
pub mod object;
pub mod path;

pub use error::LogicalClusterError;
pub use name::Name;
pub use object::{ANNOTATION_KEY, Object, from_object};
pub use path::{Path, WILDCARD};

#[cfg(feature = "logicalcluster_tracing")]
pub mod logicalcluster_tracing {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: Once = Once::new();

    /// Initialize tracing for tests
    /// This sets up a tracing subscriber that will display logs during test execution.
    /// Call this at the beginning of tests that need to see tracing output.
    pub fn init() {
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("off"))
                .unwrap();

            fmt()
                .with_target(false)
                .with_test_writer()
                .with_env_filter(filter)
                .init();
        });
    }
}
