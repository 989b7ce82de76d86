pub mod audit;
pub mod user;

pub use audit::{AuditAction, AuditLogEntry};
pub use user::User;
