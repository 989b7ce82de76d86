use crate::models::User;

pub trait Storage {
    fn insert(&mut self, user: User);
    fn get(&self, user_id: &str) -> Option<&User>;
    fn all(&self) -> Vec<&User>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub mod in_memory;
