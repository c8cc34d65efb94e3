//! AuditLog - Diagnostic event log for the navigation panel

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub event_type: AuditEventType,
    pub tab: Option<String>,
    pub success: bool,
    pub reason: Option<String>,
}

/// Types of audit events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    TabCommitted,
    TabDenied,
    RolesRefreshed,
    SignOut,
    SignOutFailed,
}

/// Bounded in-memory audit log
///
/// Oldest entries are evicted once capacity is reached.
#[derive(Debug)]
pub struct AuditLog {
    entries: VecDeque<AuditEntry>,
    max_entries: usize,
}

impl AuditLog {
    /// Create a new AuditLog
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: AuditEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Log a committed tab change
    pub fn log_tab_committed(&mut self, from: &str, to: &str) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::TabCommitted,
            tab: Some(to.to_string()),
            success: true,
            reason: Some(format!("Switched from '{}'", from)),
        });
    }

    /// Log a tab change rejected by the load guard
    pub fn log_tab_denied(&mut self, target: &str, reason: &str) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::TabDenied,
            tab: Some(target.to_string()),
            success: false,
            reason: Some(reason.to_string()),
        });
    }

    /// Log a role snapshot refresh
    pub fn log_roles_refreshed(&mut self, role_count: usize) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::RolesRefreshed,
            tab: None,
            success: true,
            reason: Some(format!("{} roles", role_count)),
        });
    }

    /// Log a sign-out attempt
    pub fn log_sign_out(&mut self, success: bool, reason: Option<&str>) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: if success {
                AuditEventType::SignOut
            } else {
                AuditEventType::SignOutFailed
            },
            tab: None,
            success,
            reason: reason.map(|s| s.to_string()),
        });
    }

    /// Get recent entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Get recent denials, newest first
    pub fn recent_denials(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !e.success)
            .take(limit)
            .collect()
    }

    /// Get statistics
    pub fn stats(&self) -> AuditStats {
        let total = self.entries.len();
        let denials = self.entries.iter().filter(|e| !e.success).count();

        AuditStats {
            total_entries: total,
            denial_count: denials,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

/// Audit statistics
#[derive(Debug, Clone)]
pub struct AuditStats {
    pub total_entries: usize,
    pub denial_count: usize,
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new(10000)
    }
}
