//! Capability derivation from a role snapshot

use serde::Serialize;
use shared::{Role, RoleSnapshot};

/// Navigation-scoped permissions derived from the base role flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavPermissions {
    /// Every viewer may see the landing destination
    pub can_access_dashboard: bool,
    pub can_access_users: bool,
    pub can_access_financials: bool,
    pub can_access_system: bool,
}

/// Capability flags derived from a role snapshot
///
/// A pure function of the snapshot's role content: two snapshots holding
/// the same roles derive equal capability sets, whatever order the roles
/// arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySet {
    pub is_admin: bool,
    pub is_collector: bool,
    pub is_member: bool,
    pub has_multiple_roles: bool,
    pub navigation: NavPermissions,
}

impl CapabilitySet {
    /// Derive capabilities from a snapshot
    ///
    /// Loading, empty, and failed snapshots derive the least-privileged
    /// set: every flag false except the dashboard.
    pub fn derive(snapshot: &RoleSnapshot) -> Self {
        let is_admin = snapshot.contains(&Role::admin());
        let is_collector = snapshot.contains(&Role::collector());
        let is_member = snapshot.contains(&Role::member());

        Self {
            is_admin,
            is_collector,
            is_member,
            has_multiple_roles: snapshot.has_multiple(),
            navigation: NavPermissions {
                can_access_dashboard: true,
                can_access_users: is_admin || is_collector,
                can_access_financials: is_admin || is_collector,
                can_access_system: is_admin,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_capabilities() {
        let caps = CapabilitySet::derive(&RoleSnapshot::loaded([Role::admin()]));

        assert!(caps.is_admin);
        assert!(!caps.is_collector);
        assert!(!caps.has_multiple_roles);
        assert!(caps.navigation.can_access_users);
        assert!(caps.navigation.can_access_financials);
        assert!(caps.navigation.can_access_system);
    }

    #[test]
    fn test_collector_capabilities() {
        let caps = CapabilitySet::derive(&RoleSnapshot::loaded([Role::collector()]));

        assert!(caps.is_collector);
        assert!(caps.navigation.can_access_users);
        assert!(caps.navigation.can_access_financials);
        assert!(!caps.navigation.can_access_system);
    }

    #[test]
    fn test_member_capabilities() {
        let caps = CapabilitySet::derive(&RoleSnapshot::loaded([Role::member()]));

        assert!(caps.is_member);
        assert!(!caps.navigation.can_access_users);
        assert!(!caps.navigation.can_access_financials);
        assert!(!caps.navigation.can_access_system);
    }

    #[test]
    fn test_dashboard_is_always_accessible() {
        for snapshot in [
            RoleSnapshot::loading(),
            RoleSnapshot::loaded([]),
            RoleSnapshot::loaded([Role::member()]),
            RoleSnapshot::failed("fetch failed"),
        ] {
            assert!(CapabilitySet::derive(&snapshot).navigation.can_access_dashboard);
        }
    }

    #[test]
    fn test_system_requires_admin() {
        let without_admin = [
            RoleSnapshot::loading(),
            RoleSnapshot::loaded([]),
            RoleSnapshot::loaded([Role::collector(), Role::member()]),
        ];

        for snapshot in without_admin {
            assert!(!CapabilitySet::derive(&snapshot).navigation.can_access_system);
        }

        let with_admin = RoleSnapshot::loaded([Role::member(), Role::admin()]);
        assert!(CapabilitySet::derive(&with_admin).navigation.can_access_system);
    }

    #[test]
    fn test_multiple_roles_flag() {
        let single = CapabilitySet::derive(&RoleSnapshot::loaded([Role::admin()]));
        let multiple =
            CapabilitySet::derive(&RoleSnapshot::loaded([Role::admin(), Role::member()]));

        assert!(!single.has_multiple_roles);
        assert!(multiple.has_multiple_roles);
    }

    #[test]
    fn test_derivation_is_order_independent() {
        let a = CapabilitySet::derive(&RoleSnapshot::loaded([Role::admin(), Role::collector()]));
        let b = CapabilitySet::derive(&RoleSnapshot::loaded([Role::collector(), Role::admin()]));

        assert_eq!(a, b);
    }

    #[test]
    fn test_loading_snapshot_is_least_privileged() {
        let caps = CapabilitySet::derive(&RoleSnapshot::loading());

        assert!(!caps.is_admin);
        assert!(!caps.is_collector);
        assert!(!caps.is_member);
        assert!(!caps.has_multiple_roles);
        assert!(!caps.navigation.can_access_users);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let caps = CapabilitySet::derive(&RoleSnapshot::loaded([Role::admin()]));
        let json = serde_json::to_string(&caps).unwrap();

        assert!(json.contains("\"isAdmin\":true"));
        assert!(json.contains("\"canAccessSystem\":true"));
    }
}
