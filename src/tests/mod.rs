mod audit_tests;

use crate::registry::UserRegistry;

pub const TEST_DATABASE_URL: &str = "postgres://localhost:5432/test";

pub fn create_test_registry() -> UserRegistry {
    let _ = env_logger::try_init();
    UserRegistry::new(TEST_DATABASE_URL)
}
