//! Logical cluster of annotated objects.

use std::collections::BTreeMap;

use crate::name::Name;

/// Annotation key denoting the logical cluster an object belongs to.
pub const ANNOTATION_KEY: &str = "kcp.dev/cluster";

/// An object carrying string annotations, such as the metadata of an API object.
///
/// Implementors only need to expose their annotation map. `None` stands for an
/// object without annotations.
pub trait Object {
    fn annotations(&self) -> Option<&BTreeMap<String, String>>;
}

impl<T: Object + ?Sized> Object for &T {
    fn annotations(&self) -> Option<&BTreeMap<String, String>> {
        (**self).annotations()
    }
}

/// Returns the logical cluster of `obj` from its [`ANNOTATION_KEY`] annotation.
///
/// A missing annotation, or missing annotations altogether, yields the empty name.
pub fn from_object<O: Object + ?Sized>(obj: &O) -> Name {
    match obj.annotations().and_then(|annotations| annotations.get(ANNOTATION_KEY)) {
        Some(value) => Name::new(value.as_str()),
        None => {
            tracing::trace!(key = ANNOTATION_KEY, "object has no logical cluster annotation");
            Name::default()
        }
    }
}
