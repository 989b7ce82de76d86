use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RegistryError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a user with a fresh v4 id, stamped with the current time.
    pub fn new(name: String, age: i64, email: Option<String>) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name,
            age,
            email,
            created_at: Utc::now(),
        }
    }

    /// Non-blank name and a positive age. Not enforced on creation.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.age > 0
    }

    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string(self)?)
    }
}
