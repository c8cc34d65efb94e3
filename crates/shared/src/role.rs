//! Role and role-snapshot types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Role identifier granting a category of dashboard access
///
/// Role ids are opaque strings assigned by the upstream role source. An id
/// that is not among the well-known ones simply never matches a membership
/// test, so a catalog entry referencing it stays hidden.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Create a role from an arbitrary id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Full administrative access
    pub fn admin() -> Self {
        Self::new("admin")
    }

    /// Collection-management access
    pub fn collector() -> Self {
        Self::new("collector")
    }

    /// Regular member access
    pub fn member() -> Self {
        Self::new("member")
    }

    /// Role id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Lifecycle state of a role snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotState {
    /// Roles have not been fetched yet
    Loading,
    /// Fetched, zero roles
    Empty,
    /// Fetched, one or more roles
    Populated,
}

/// The set of roles currently known for the active user
///
/// A snapshot is replaced wholesale whenever the upstream role source emits
/// a new value; it is never mutated in place. Roles are kept as a set, so
/// equality is independent of the order the source delivered them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSnapshot {
    roles: Option<BTreeSet<Role>>,
    loading: bool,
    error: Option<String>,
}

impl RoleSnapshot {
    /// Snapshot for a user whose roles have not been fetched yet
    pub fn loading() -> Self {
        Self {
            roles: None,
            loading: true,
            error: None,
        }
    }

    /// Snapshot holding a fetched set of roles
    pub fn loaded(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: Some(roles.into_iter().collect()),
            loading: false,
            error: None,
        }
    }

    /// Snapshot for a fetch that failed; no roles are known
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            roles: None,
            loading: false,
            error: Some(message.into()),
        }
    }

    /// Lifecycle state of this snapshot
    pub fn state(&self) -> SnapshotState {
        match &self.roles {
            None => SnapshotState::Loading,
            Some(roles) if roles.is_empty() => SnapshotState::Empty,
            Some(_) => SnapshotState::Populated,
        }
    }

    /// The fetched role set, if any
    pub fn roles(&self) -> Option<&BTreeSet<Role>> {
        self.roles.as_ref()
    }

    /// Whether a fetch is still in progress
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetch error reported by the role source, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check membership of a role in this snapshot
    ///
    /// Absent roles never match, so every capability derived from a
    /// loading or failed snapshot stays at its least-privileged value.
    pub fn contains(&self, role: &Role) -> bool {
        self.roles.as_ref().is_some_and(|r| r.contains(role))
    }

    /// Whether at least one role has arrived
    pub fn has_any_role(&self) -> bool {
        self.roles.as_ref().is_some_and(|r| !r.is_empty())
    }

    /// Whether the user holds more than one role
    pub fn has_multiple(&self) -> bool {
        self.roles.as_ref().is_some_and(|r| r.len() > 1)
    }

    /// Number of roles in the snapshot; zero while loading
    pub fn role_count(&self) -> usize {
        self.roles.as_ref().map_or(0, |r| r.len())
    }
}

impl Default for RoleSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}
