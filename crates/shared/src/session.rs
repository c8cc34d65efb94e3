//! Session types and the session collaborator port

use crate::error::AuthError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated dashboard session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session identifier
    pub id: Uuid,

    /// Authenticated user id
    pub user_id: String,

    /// Session expiry, if the transport reports one
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session for a user
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            expires_at: None,
        }
    }

    /// Builder: set the expiry timestamp
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// Session collaborator port
///
/// The implementation owns token storage and the network transport; this
/// core only reads session presence and requests termination.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Currently authenticated session, if any
    fn current_session(&self) -> Option<Session>;

    /// Terminate the session. `terminate_all_sessions` ends the user's
    /// sessions on every device instead of just this one.
    async fn sign_out(&self, terminate_all_sessions: bool) -> Result<(), AuthError>;
}
