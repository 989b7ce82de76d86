use crate::logger::AuditLogger;
use crate::logger::in_memory::InMemoryAuditLogger;
use crate::models::*;
use crate::storage::Storage;
use crate::storage::in_memory::InMemoryStorage;
use log::{debug, info};

/// Owns every user it creates. The database URL is kept as given and never
/// opened.
pub struct UserRegistry<S: Storage = InMemoryStorage, A: AuditLogger = InMemoryAuditLogger> {
    database_url: String,
    storage: S,
    audit_logger: A,
}

impl UserRegistry {
    pub fn new(database_url: impl Into<String>) -> Self {
        UserRegistry::with_parts(
            database_url,
            InMemoryStorage::new(),
            InMemoryAuditLogger::new(),
        )
    }
}

impl<S: Storage, A: AuditLogger> UserRegistry<S, A> {
    pub fn with_parts(database_url: impl Into<String>, storage: S, audit_logger: A) -> Self {
        let database_url = database_url.into();
        info!("Initializing UserRegistry");
        Self {
            database_url,
            storage,
            audit_logger,
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    // USER MANAGEMENT

    pub fn create_user(&mut self, name: String, age: i64, email: Option<String>) -> User {
        info!("Creating user with name: {}", name);
        let user = User::new(name, age, email);

        self.storage.insert(user.clone());
        debug!("User created with ID: {}", user.id);

        self.audit_logger.log(AuditLogEntry::new(
            &user.id,
            AuditAction::CreateUser,
            &serde_json::json!({ "user_id": user.id }),
            user.created_at,
        ));

        user
    }

    /// `None` means no user with this id was ever created here.
    pub fn get_user(&self, user_id: &str) -> Option<&User> {
        debug!("Fetching user with ID: {}", user_id);
        self.storage.get(user_id)
    }

    /// In no particular order.
    pub fn list_users(&self) -> Vec<&User> {
        self.storage.all()
    }

    pub fn user_count(&self) -> usize {
        self.storage.len()
    }

    pub fn users_older_than(&self, age: i64) -> Vec<&User> {
        self.storage
            .all()
            .into_iter()
            .filter(|user| user.age > age)
            .collect()
    }

    pub fn audit_logs(&self) -> Vec<AuditLogEntry> {
        self.audit_logger.get_logs()
    }
}
