//! Kinship Domain Layer
//!
//! Value types shared by the resolver and its callers. Nothing here
//! performs I/O; the persistence layer hands snapshots in through
//! [`traits::SnapshotSource`].
//!
//! ## Key Concepts
//!
//! - **User**: a group member with an optional gender
//! - **RawRelation**: a directed `parent`/`child` row or a symmetric
//!   `spouse`/`partner` row, as stored
//! - **Member**: group membership, optionally carrying parent/child overrides
//! - **Edge**: one direction of a relation in the family graph
//! - **Path / PathShape**: the route from ego to alter and its edge-type key
//! - **RelationshipResult**: label, path and step count for one pair

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod path;
pub mod relation;
pub mod snapshot;
pub mod traits;
pub mod user;

// Re-exports for convenience
pub use path::{Path, PathShape, PathStep, RelationshipResult};
pub use relation::{Edge, EdgeType, Member, RawRelation};
pub use snapshot::GroupSnapshot;
pub use user::{Gender, User, UserId};
