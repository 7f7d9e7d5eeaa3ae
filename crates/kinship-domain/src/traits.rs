//! Trait definitions for external interactions
//!
//! These traits define the boundary between kinship resolution and the
//! persistence layer that owns relation rows, memberships and profiles.

use crate::{GroupSnapshot, Member, RawRelation, User};
use std::convert::Infallible;

/// Source of a group's relation data
///
/// Implemented by whatever adapter reads the relational store. The
/// resolver never queries storage itself; it asks a source once per
/// graph build.
pub trait SnapshotSource {
    /// Error type for source operations
    type Error;

    /// Raw relation rows for the group
    fn relations(&self) -> Result<Vec<RawRelation>, Self::Error>;

    /// Memberships, with any parent/child override lists
    fn members(&self) -> Result<Vec<Member>, Self::Error>;

    /// Profiles of the users referenced by the group
    fn users(&self) -> Result<Vec<User>, Self::Error>;
}

impl SnapshotSource for GroupSnapshot {
    type Error = Infallible;

    fn relations(&self) -> Result<Vec<RawRelation>, Self::Error> {
        Ok(self.relations.clone())
    }

    fn members(&self) -> Result<Vec<Member>, Self::Error> {
        Ok(self.members.clone())
    }

    fn users(&self) -> Result<Vec<User>, Self::Error> {
        Ok(self.users.clone())
    }
}
