//! Guarded tab transitions

use crate::visibility::filter_visible;
use shared::{NavCatalog, NavItem, Notification, NotificationSink, RoleSnapshot, TabId};
use std::sync::Arc;

/// Outcome of a tab-change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Role data had not arrived; the caller was notified and the active
    /// tab is unchanged
    NotReady,
    /// Target equals the active tab; nothing happened
    NoOp,
    /// The active tab was replaced and the change listener fired once
    Committed,
}

/// Observer of committed tab changes
pub trait TabChangeListener: Send + Sync {
    fn tab_changed(&self, from: &TabId, to: &TabId);
}

/// NavigationGate - filters the catalog and guards tab transitions
///
/// Owns the active tab. All mutation goes through [`request_tab_change`],
/// and each request fully resolves (rejected, suppressed, or committed)
/// before the next is considered.
///
/// [`request_tab_change`]: NavigationGate::request_tab_change
pub struct NavigationGate {
    catalog: NavCatalog,
    active_tab: TabId,
    notifier: Arc<dyn NotificationSink>,
    listener: Option<Arc<dyn TabChangeListener>>,
}

impl NavigationGate {
    /// Create a gate over a catalog, starting on `initial_tab`
    pub fn new(catalog: NavCatalog, initial_tab: TabId, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            catalog,
            active_tab: initial_tab,
            notifier,
            listener: None,
        }
    }

    /// Register the observer invoked on every committed transition
    pub fn set_listener(&mut self, listener: Arc<dyn TabChangeListener>) {
        self.listener = Some(listener);
    }

    pub fn catalog(&self) -> &NavCatalog {
        &self.catalog
    }

    pub fn active_tab(&self) -> &TabId {
        &self.active_tab
    }

    /// Items the current viewer may see, in catalog order
    pub fn visible_items(&self, has_session: bool, snapshot: &RoleSnapshot) -> Vec<&NavItem> {
        filter_visible(&self.catalog, has_session, snapshot)
    }

    /// Request a switch of the active tab
    ///
    /// The guard is temporal, not an authorization decision: it rejects
    /// requests made before any role has arrived, and suppresses requests
    /// for the already-active tab. It deliberately does not re-check
    /// visibility; the filtered item list is the sole gate on what the
    /// presentation layer offers.
    pub fn request_tab_change(
        &mut self,
        target: &TabId,
        snapshot: &RoleSnapshot,
    ) -> TransitionOutcome {
        if !snapshot.has_any_role() {
            self.notifier.notify(Notification::destructive(
                "Access Not Ready",
                "Please wait while your permissions are being loaded.",
            ));
            return TransitionOutcome::NotReady;
        }

        if *target == self.active_tab {
            return TransitionOutcome::NoOp;
        }

        let from = std::mem::replace(&mut self.active_tab, target.clone());
        if let Some(listener) = &self.listener {
            listener.tab_changed(&from, target);
        }
        TransitionOutcome::Committed
    }
}
