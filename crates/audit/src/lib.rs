//! # Atrium Audit
//!
//! Diagnostic event log for the Atrium dashboard panel.
//!
//! ## Components
//!
//! - `AuditLog` - Bounded in-memory log of panel events

pub mod audit_log;

pub use audit_log::{AuditEntry, AuditEventType, AuditLog, AuditStats};
