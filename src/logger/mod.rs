use crate::models::AuditLogEntry;

pub trait AuditLogger {
    fn log(&mut self, entry: AuditLogEntry);
    fn get_logs(&self) -> Vec<AuditLogEntry>;
}

pub mod in_memory;
