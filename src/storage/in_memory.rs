use crate::models::User;
use crate::storage::Storage;
use std::collections::HashMap;

/// Users keyed by their own `id`.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    users: HashMap<String, User>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: HashMap::new(),
        }
    }
}

impl Storage for InMemoryStorage {
    fn insert(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    fn get(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    fn all(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}
