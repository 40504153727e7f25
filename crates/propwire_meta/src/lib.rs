//! Type metadata for setter resolution.
//!
//! This crate models the host type system the resolver consults: type
//! descriptors with their primitive/boxed duality, per-class snapshots of
//! declared fields and methods, and the ancestry and assignability queries
//! derived from them.

pub mod descriptor;
pub mod host;
mod index;
mod loader;

pub use descriptor::{DescriptorError, JavaPrimitive, NumericKind, TypeDescriptor};
pub use host::{HierarchyError, OBJECT_FQCN, TypeHost};
pub use index::{AnnotationTag, FieldEntry, MethodEntry, TypeEntry, TypeIndex};
pub use loader::IndexError;
