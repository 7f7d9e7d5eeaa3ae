//! Group snapshot - everything the resolver needs about one group

use super::{Member, RawRelation, User, UserId};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a group's relations, members and user profiles
///
/// The persistence layer owns fetching and caching; the resolver only
/// ever reads a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    /// Raw relation rows
    #[serde(default)]
    pub relations: Vec<RawRelation>,

    /// Group memberships
    #[serde(default)]
    pub members: Vec<Member>,

    /// User profiles of the members (and of anyone referenced by relations)
    #[serde(default)]
    pub users: Vec<User>,
}

impl GroupSnapshot {
    /// Look up a user profile by id
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Find a user by id string or by display name (case-insensitive)
    pub fn find_user(&self, key: &str) -> Option<&User> {
        if let Ok(id) = UserId::from_string(key) {
            if let Some(user) = self.user(id) {
                return Some(user);
            }
        }
        self.users.iter().find(|u| {
            u.name
                .as_deref()
                .is_some_and(|name| name.eq_ignore_ascii_case(key))
        })
    }

    /// Display name for an id, falling back to the id itself
    pub fn display_name(&self, id: UserId) -> String {
        self.user(id)
            .map(User::display_name)
            .unwrap_or_else(|| id.to_string())
    }
}
