//! Fail-closed visibility filtering of the navigation catalog

use shared::{NavCatalog, NavItem, RoleSnapshot};

/// Filter the catalog down to the items the current viewer may see
///
/// Without a session, or while roles are still loading, only `always_show`
/// items survive: unknown role state must never over-expose restricted
/// destinations. Otherwise an item renders if it is unrestricted or at
/// least one of its required roles is present. Catalog order is preserved.
pub fn filter_visible<'a>(
    catalog: &'a NavCatalog,
    has_session: bool,
    snapshot: &RoleSnapshot,
) -> Vec<&'a NavItem> {
    if !has_session || snapshot.is_loading() {
        return catalog.items().iter().filter(|i| i.always_show).collect();
    }

    catalog
        .items()
        .iter()
        .filter(|item| {
            item.always_show
                || match (&item.required_roles, snapshot.roles()) {
                    (None, _) => true,
                    (Some(required), Some(roles)) => required.iter().any(|r| roles.contains(r)),
                    // Roles never arrived; restricted items stay hidden
                    (Some(_), None) => false,
                }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{NavCatalog, NavItem, Role, TabId};

    fn catalog() -> NavCatalog {
        NavCatalog::default_dashboard()
    }

    fn tabs(items: &[&NavItem]) -> Vec<String> {
        items.iter().map(|i| i.tab.as_str().to_string()).collect()
    }

    #[test]
    fn test_loading_shows_only_always_show() {
        let catalog = catalog();
        let visible = filter_visible(&catalog, true, &RoleSnapshot::loading());

        assert_eq!(tabs(&visible), vec!["dashboard"]);
    }

    #[test]
    fn test_no_session_shows_only_always_show() {
        let snapshot = RoleSnapshot::loaded([Role::admin()]);
        let catalog = catalog();
        let visible = filter_visible(&catalog, false, &snapshot);

        assert_eq!(tabs(&visible), vec!["dashboard"]);
    }

    #[test]
    fn test_collector_sees_users_and_financials() {
        let snapshot = RoleSnapshot::loaded([Role::collector()]);
        let catalog = catalog();
        let visible = filter_visible(&catalog, true, &snapshot);

        assert_eq!(tabs(&visible), vec!["dashboard", "users", "financials"]);
    }

    #[test]
    fn test_admin_sees_everything() {
        let snapshot = RoleSnapshot::loaded([Role::admin()]);
        let catalog = catalog();
        let visible = filter_visible(&catalog, true, &snapshot);

        assert_eq!(tabs(&visible), vec!["dashboard", "users", "financials", "system"]);
    }

    #[test]
    fn test_member_sees_only_dashboard() {
        let snapshot = RoleSnapshot::loaded([Role::member()]);
        let catalog = catalog();
        let visible = filter_visible(&catalog, true, &snapshot);

        assert_eq!(tabs(&visible), vec!["dashboard"]);
    }

    #[test]
    fn test_three_item_catalog_for_collector() {
        let catalog = NavCatalog::new(vec![
            NavItem::new("Overview", "dashboard").with_always_show(),
            NavItem::new("Users", "users")
                .with_required_roles([Role::admin(), Role::collector()]),
            NavItem::new("System", "system").with_required_roles([Role::admin()]),
        ])
        .unwrap();

        let snapshot = RoleSnapshot::loaded([Role::collector()]);
        let visible = filter_visible(&catalog, true, &snapshot);

        assert_eq!(tabs(&visible), vec!["dashboard", "users"]);
    }

    #[test]
    fn test_unrestricted_item_visible_to_empty_role_set() {
        let catalog = NavCatalog::new(vec![
            NavItem::new("Help", "help"),
            NavItem::new("Users", "users").with_required_roles([Role::admin()]),
        ])
        .unwrap();

        let visible = filter_visible(&catalog, true, &RoleSnapshot::loaded([]));

        assert_eq!(tabs(&visible), vec!["help"]);
    }

    #[test]
    fn test_empty_required_roles_hides_from_everyone() {
        let catalog = NavCatalog::new(vec![
            NavItem::new("Vestigial", "vestigial").with_required_roles([]),
            NavItem::new("Pinned", "pinned").with_required_roles([]).with_always_show(),
        ])
        .unwrap();

        let snapshot = RoleSnapshot::loaded([Role::admin(), Role::collector(), Role::member()]);
        let visible = filter_visible(&catalog, true, &snapshot);

        assert_eq!(tabs(&visible), vec!["pinned"]);
    }

    #[test]
    fn test_undefined_role_requirement_never_matches() {
        let catalog = NavCatalog::new(vec![
            NavItem::new("Ops", "ops").with_required_roles([Role::new("superuser")]),
        ])
        .unwrap();

        let snapshot = RoleSnapshot::loaded([Role::admin()]);
        let visible = filter_visible(&catalog, true, &snapshot);

        assert!(visible.is_empty());
    }

    #[test]
    fn test_fetch_failure_keeps_restricted_items_hidden() {
        let catalog = catalog();
        let visible = filter_visible(&catalog, true, &RoleSnapshot::failed("timeout"));

        assert_eq!(tabs(&visible), vec!["dashboard"]);
    }

    #[test]
    fn test_order_follows_catalog() {
        let catalog = NavCatalog::new(vec![
            NavItem::new("Zeta", "zeta").with_always_show(),
            NavItem::new("Alpha", "alpha").with_always_show(),
        ])
        .unwrap();

        let visible = filter_visible(&catalog, true, &RoleSnapshot::loaded([Role::member()]));

        assert_eq!(tabs(&visible), vec!["zeta", "alpha"]);
        assert_eq!(visible[0].tab, TabId::new("zeta"));
    }
}
