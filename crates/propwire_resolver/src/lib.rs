//! propwire_resolver - setter discovery and compatibility resolution
//!
//! Given a type described by a [`TypeHost`](propwire_meta::TypeHost), finds
//! the getters and setters declared across its ancestry and decides which
//! setters accept a value of a given runtime type, exactly or under the loose
//! numeric-widening and boolean-boxing rules.
//!
//! Hierarchy queries never de-duplicate: a setter redeclared by a subtype is
//! reported once per declaring level. Use [`dedup_overrides`] for set
//! semantics.

pub mod annotations;
pub mod config;
pub mod duality;
pub mod lattice;
pub mod member;
pub mod resolver;
pub mod walker;

pub use annotations::{Annotated, Declared, has_all, has_any};
pub use config::{ConfigError, ResolutionMode, ResolverConfig};
pub use duality::is_boolean_mismatch;
pub use lattice::{WideningLattice, widens};
pub use member::{MemberDescriptor, MemberShape, dedup_overrides};
pub use resolver::{MatchKind, MemberResolver, SetterMatch};
pub use walker::HierarchyWalker;

use propwire_meta::HierarchyError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}
