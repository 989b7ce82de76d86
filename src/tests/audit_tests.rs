use crate::logger::AuditLogger;
use crate::models::AuditAction;
use crate::storage::Storage;
use crate::tests::create_test_registry;
use crate::{InMemoryAuditLogger, InMemoryStorage, UserRegistry};

#[test]
fn test_create_user_is_audited() {
    let mut registry = create_test_registry();
    let alice = registry.create_user("Alice".to_string(), 30, None);
    let bob = registry.create_user("Bob".to_string(), 25, None);

    let logs = registry.audit_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l.action == AuditAction::CreateUser));
    assert_eq!(logs[0].user_id, alice.id);
    assert_eq!(logs[1].user_id, bob.id);
    assert_eq!(logs[0].created_at, alice.created_at);

    let payload: serde_json::Value = serde_json::from_str(&logs[0].payload).unwrap();
    assert_eq!(payload["user_id"], alice.id.as_str());
}

#[test]
fn test_with_parts_uses_given_seams() {
    let _ = env_logger::try_init();
    let mut storage = InMemoryStorage::new();
    let seed = crate::User::new("Seed".to_string(), 50, None);
    storage.insert(seed.clone());
    assert!(!storage.is_empty());

    let mut registry =
        UserRegistry::with_parts("sqlite::memory:", storage, InMemoryAuditLogger::new());
    assert_eq!(registry.database_url(), "sqlite::memory:");
    assert_eq!(registry.get_user(&seed.id), Some(&seed));

    registry.create_user("Alice".to_string(), 30, None);
    assert_eq!(registry.user_count(), 2);
    // Seeded directly, so only the registry-created user is audited
    assert_eq!(registry.audit_logs().len(), 1);
}

#[test]
fn test_in_memory_logger_keeps_order() {
    let mut logger = InMemoryAuditLogger::new();
    for id in ["a", "b", "c"] {
        logger.log(crate::models::AuditLogEntry::new(
            id,
            AuditAction::CreateUser,
            &serde_json::json!({ "user_id": id }),
            chrono::Utc::now(),
        ));
    }
    let ids: Vec<String> = logger.get_logs().into_iter().map(|l| l.user_id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}
