//! RoleAccessResolver - content-keyed capability memoization

use crate::capability::CapabilitySet;
use shared::{Role, RoleSnapshot};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Resolves role snapshots into capability sets, recomputing only when the
/// snapshot's role content changes
///
/// Consumers receive the same `Arc` back for as long as the content is
/// unchanged, so downstream caches keyed on pointer identity stay warm
/// across unrelated state churn.
#[derive(Debug, Default)]
pub struct RoleAccessResolver {
    /// Role content the cached set was derived from
    last_roles: Option<BTreeSet<Role>>,
    cached: Option<Arc<CapabilitySet>>,
    /// Number of derivations performed
    generation: u64,
}

impl RoleAccessResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a snapshot, reusing the cached capability set when the role
    /// content is unchanged
    pub fn resolve(&mut self, snapshot: &RoleSnapshot) -> Arc<CapabilitySet> {
        if let Some(cached) = &self.cached {
            if self.last_roles.as_ref() == snapshot.roles() {
                return Arc::clone(cached);
            }
        }

        let capabilities = Arc::new(CapabilitySet::derive(snapshot));
        self.last_roles = snapshot.roles().cloned();
        self.cached = Some(Arc::clone(&capabilities));
        self.generation += 1;
        capabilities
    }

    /// Number of derivations performed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop the cache; the next resolve derives fresh
    pub fn invalidate(&mut self) {
        self.last_roles = None;
        self.cached = None;
    }
}
