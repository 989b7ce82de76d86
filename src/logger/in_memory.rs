use crate::logger::AuditLogger;
use crate::models::AuditLogEntry;
use log::debug;

#[derive(Debug, Default)]
pub struct InMemoryAuditLogger {
    logs: Vec<AuditLogEntry>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        InMemoryAuditLogger { logs: Vec::new() }
    }
}

impl AuditLogger for InMemoryAuditLogger {
    fn log(&mut self, entry: AuditLogEntry) {
        debug!("Audit {:?} for user {}", entry.action, entry.user_id);
        self.logs.push(entry);
    }

    fn get_logs(&self) -> Vec<AuditLogEntry> {
        self.logs.clone()
    }
}
