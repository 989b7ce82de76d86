use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuditAction {
    CreateUser,
}

#[derive(Clone, Debug)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub user_id: String,
    pub action: AuditAction,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    // Payload is stored as JSON text
    pub fn new<T: Serialize>(
        user_id: &str,
        action: AuditAction,
        payload: &T,
        created_at: DateTime<Utc>,
    ) -> Self {
        AuditLogEntry {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            action,
            payload: serde_json::to_string(payload).unwrap_or_default(),
            created_at,
        }
    }
}
