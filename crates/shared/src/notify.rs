//! Notification sink port

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Destructive,
}

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    /// Create a notification
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    /// Informational notification
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Info)
    }

    /// Success notification
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Success)
    }

    /// Destructive (error) notification
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Destructive)
    }
}

/// One-way notification port
///
/// Delivery is fire-and-forget: no return value is consumed and
/// implementations must not block the caller.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that drops all notifications
#[derive(Debug, Clone, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: Notification) {}
}

/// Sink that records notifications in memory
///
/// Useful for testing and development.
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications delivered so far
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered.lock().map(|d| d.clone()).unwrap_or_default()
    }

    /// Number of notifications delivered
    pub fn count(&self) -> usize {
        self.delivered.lock().map(|d| d.len()).unwrap_or(0)
    }

    /// Number of notifications delivered with the given severity
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.delivered
            .lock()
            .map(|d| d.iter().filter(|n| n.severity == severity).count())
            .unwrap_or(0)
    }

    /// Forget everything delivered so far
    pub fn clear(&self) {
        if let Ok(mut delivered) = self.delivered.lock() {
            delivered.clear();
        }
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut delivered) = self.delivered.lock() {
            delivered.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records() {
        let sink = MemorySink::new();

        sink.notify(Notification::success("Signed Out", "Goodbye"));
        sink.notify(Notification::destructive("Error", "Try again"));

        assert_eq!(sink.count(), 2);
        assert_eq!(sink.count_by_severity(Severity::Success), 1);
        assert_eq!(sink.count_by_severity(Severity::Destructive), 1);
        assert_eq!(sink.delivered()[0].title, "Signed Out");
    }

    #[test]
    fn test_memory_sink_clear() {
        let sink = MemorySink::new();
        sink.notify(Notification::info("Hello", ""));

        sink.clear();
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_notification_serialization() {
        let json = serde_json::to_string(&Notification::destructive("Error", "boom")).unwrap();

        assert!(json.contains("\"severity\":\"destructive\""));
        assert!(json.contains("\"title\":\"Error\""));
    }
}
