//! The host type system seam consulted by the resolver.
//!
//! A host only has to describe individual types. Ancestry and assignability
//! are derived from those snapshots unless the host overrides them.

use crate::index::TypeEntry;
use std::collections::{HashSet, VecDeque};
use thiserror::Error;
use tracing::trace;

/// Root of every reference type hierarchy.
pub const OBJECT_FQCN: &str = "java.lang.Object";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    #[error("unknown type `{name}`")]
    UnknownType { name: String },
    #[error("superclass chain of `{name}` contains a cycle")]
    CyclicHierarchy { name: String },
}

pub trait TypeHost {
    /// Structural snapshot of the named type, if the host knows it.
    fn lookup_type(&self, name: &str) -> Option<&TypeEntry>;

    /// The queried type followed by each superclass up to the root.
    ///
    /// A superclass the host cannot describe terminates the chain.
    fn ancestry(&self, name: &str) -> Result<Vec<&TypeEntry>, HierarchyError> {
        if name.trim().is_empty() {
            return Err(HierarchyError::InvalidArgument {
                reason: "type name must not be blank".to_string(),
            });
        }

        let mut current = self
            .lookup_type(name)
            .ok_or_else(|| HierarchyError::UnknownType {
                name: name.to_string(),
            })?;
        let mut seen = HashSet::new();
        let mut chain = Vec::new();

        loop {
            if !seen.insert(current.fqcn.as_str()) {
                return Err(HierarchyError::CyclicHierarchy {
                    name: name.to_string(),
                });
            }
            chain.push(current);

            let Some(parent) = current.superclass.as_deref() else {
                break;
            };
            match self.lookup_type(parent) {
                Some(entry) => current = entry,
                None => {
                    trace!(ty = %current.fqcn, parent, "superclass outside host; ancestry ends");
                    break;
                }
            }
        }

        Ok(chain)
    }

    /// Whether a `subtype` value may be stored in a `supertype` slot.
    ///
    /// Follows superclasses and interfaces transitively. Every reference type
    /// is a subtype of `java.lang.Object`.
    fn is_supertype_of(&self, supertype: &str, subtype: &str) -> bool {
        if supertype == subtype || supertype == OBJECT_FQCN {
            return true;
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from([subtype]);
        while let Some(name) = queue.pop_front() {
            if !seen.insert(name) {
                continue;
            }
            let Some(entry) = self.lookup_type(name) else {
                continue;
            };
            for parent in entry.supertypes() {
                if parent == supertype {
                    return true;
                }
                queue.push_back(parent);
            }
        }
        false
    }
}
