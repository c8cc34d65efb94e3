//! PanelCore - Central orchestrator for the navigation panel

use access::{CapabilitySet, RoleAccessResolver};
use audit::AuditLog;
use gate::{NavigationGate, TabChangeListener, TransitionOutcome};
use shared::{
    Logger, NavCatalog, NavItem, Notification, NotificationSink, RoleSnapshot, SessionSource,
    TabId,
};
use std::sync::Arc;

/// PanelCore configuration
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Tab selected at session start
    pub initial_tab: TabId,
    /// Audit log capacity
    pub audit_capacity: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial_tab: TabId::new("dashboard"),
            audit_capacity: 10_000,
        }
    }
}

/// PanelCore - the navigation panel orchestrator
///
/// Owns the resolver, the gate, the latest role snapshot, and the audit
/// log; collaborators (session source, notification sink, logger) are
/// injected. The presentation layer consumes `visible_items`,
/// `active_tab`, `request_tab_change`, and `sign_out`, and pushes new
/// role snapshots through `update_roles`.
pub struct PanelCore {
    logger: Arc<dyn Logger>,
    notifier: Arc<dyn NotificationSink>,
    session: Arc<dyn SessionSource>,
    resolver: RoleAccessResolver,
    gate: NavigationGate,
    snapshot: RoleSnapshot,
    capabilities: Arc<CapabilitySet>,
    audit: AuditLog,
}

impl PanelCore {
    /// Create a new PanelCore
    pub fn new(
        catalog: NavCatalog,
        session: Arc<dyn SessionSource>,
        notifier: Arc<dyn NotificationSink>,
        logger: Arc<dyn Logger>,
        config: PanelConfig,
    ) -> Self {
        let snapshot = RoleSnapshot::loading();
        let mut resolver = RoleAccessResolver::new();
        let capabilities = resolver.resolve(&snapshot);

        Self {
            gate: NavigationGate::new(catalog, config.initial_tab, Arc::clone(&notifier)),
            logger,
            notifier,
            session,
            resolver,
            snapshot,
            capabilities,
            audit: AuditLog::new(config.audit_capacity),
        }
    }

    /// Register the observer invoked on every committed tab change
    pub fn set_tab_listener(&mut self, listener: Arc<dyn TabChangeListener>) {
        self.gate.set_listener(listener);
    }

    /// Replace the role snapshot
    ///
    /// Capabilities are recomputed synchronously before this returns, so
    /// no consumer can observe the new snapshot with stale capabilities.
    pub fn update_roles(&mut self, snapshot: RoleSnapshot) {
        let before = self.resolver.generation();
        self.capabilities = self.resolver.resolve(&snapshot);

        if self.resolver.generation() != before {
            self.audit.log_roles_refreshed(snapshot.role_count());
            self.logger.debug(
                &format!("role snapshot updated ({} roles)", snapshot.role_count()),
                None,
            );
        }

        self.snapshot = snapshot;
    }

    /// Capability set for the current snapshot
    ///
    /// The same `Arc` is returned for as long as the role content is
    /// unchanged.
    pub fn capabilities(&self) -> Arc<CapabilitySet> {
        Arc::clone(&self.capabilities)
    }

    /// The current role snapshot
    pub fn snapshot(&self) -> &RoleSnapshot {
        &self.snapshot
    }

    /// The currently active tab
    pub fn active_tab(&self) -> &TabId {
        self.gate.active_tab()
    }

    /// Whether a session is currently authenticated
    pub fn has_session(&self) -> bool {
        self.session.current_session().is_some()
    }

    /// Navigation items the current viewer may see, in catalog order
    pub fn visible_items(&self) -> Vec<&NavItem> {
        self.gate.visible_items(self.has_session(), &self.snapshot)
    }

    /// Request a switch of the active tab
    pub fn request_tab_change(&mut self, target: TabId) -> TransitionOutcome {
        let from = self.gate.active_tab().clone();
        let outcome = self.gate.request_tab_change(&target, &self.snapshot);

        match outcome {
            TransitionOutcome::Committed => {
                self.audit.log_tab_committed(from.as_str(), target.as_str());
                self.logger
                    .info(&format!("tab changed: {} -> {}", from, target), None);
            }
            TransitionOutcome::NotReady => {
                self.audit.log_tab_denied(target.as_str(), "role data not loaded");
            }
            TransitionOutcome::NoOp => {}
        }

        outcome
    }

    /// Guarded sign-out
    ///
    /// The session collaborator's failure is fully absorbed: the user is
    /// notified, the failure is logged and audited, and the call returns
    /// normally either way. A second invocation while one is pending is a
    /// caller-layer concern; no internal deduplication is performed.
    pub async fn sign_out(&mut self) {
        match self.session.sign_out(false).await {
            Ok(()) => {
                self.audit.log_sign_out(true, None);
                self.notifier.notify(Notification::success(
                    "Signed Out",
                    "You have been successfully signed out.",
                ));
            }
            Err(err) => {
                self.logger.error(&format!("sign-out failed: {}", err), None);
                self.audit.log_sign_out(false, Some(err.message.as_str()));
                self.notifier.notify(Notification::destructive(
                    "Error",
                    "Failed to sign out. Please try again.",
                ));
            }
        }
    }

    /// Diagnostic event log
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}
