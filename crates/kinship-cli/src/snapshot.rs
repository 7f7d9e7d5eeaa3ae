//! Group snapshot loading.

use crate::error::{CliError, Result};
use kinship_domain::{GroupSnapshot, UserId};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a group snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<GroupSnapshot> {
    let contents = fs::read_to_string(path)?;
    let snapshot: GroupSnapshot = serde_json::from_str(&contents)?;
    debug!(
        "Loaded snapshot {}: {} relations, {} members, {} users",
        path.display(),
        snapshot.relations.len(),
        snapshot.members.len(),
        snapshot.users.len()
    );
    Ok(snapshot)
}

/// Resolve a user given by id or display name.
///
/// A well-formed id that has no profile is still accepted, since
/// relations may reference users without one.
pub fn lookup_user(snapshot: &GroupSnapshot, key: &str) -> Result<UserId> {
    if let Some(user) = snapshot.find_user(key) {
        return Ok(user.id);
    }
    UserId::from_string(key).map_err(|_| CliError::UnknownUser(key.to_string()))
}
