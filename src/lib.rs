pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod registry;
pub mod storage;

pub use error::RegistryError;
pub use logger::in_memory::InMemoryAuditLogger;
pub use models::User;
pub use registry::UserRegistry;
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests; // Include integration tests
