//! In-process implementation of the user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Default)]
struct Store {
    last_id: i64,
    users: Vec<User>,
}

/// Repository that keeps users in memory, owned by the instance.
///
/// Ids follow the same rules as the SQLite table: assigned on insert,
/// increasing, never reused. Insertion order is the listing order.
#[derive(Default)]
pub struct MemoryUserRepository {
    store: RwLock<Store>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let user = new_user.with_id(store.last_id);
        store.users.push(user.clone());

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.store.read().await.users.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update_by_id(&self, user: User) -> Result<Option<User>, AppError> {
        let mut store = self.store.write().await;

        match store.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        let before = store.users.len();

        store.users.retain(|u| u.id != id);

        Ok(store.users.len() < before)
    }
}
