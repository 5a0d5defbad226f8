//! In-memory user store implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use usercache_core::context::Context;
use usercache_core::storage::{Result, UserStore};
use usercache_core::user::{User, UserFields, UserId};

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the last clone is dropped.
/// Clones share the same map and id sequence.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    /// Creates a new empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, ctx: &Context, fields: &UserFields) -> Result<UserId> {
        let mut users = ctx.run(self.users.write()).await?;
        let id = UserId(self.next_id.fetch_add(1, Ordering::Relaxed));
        users.insert(id, User::from_fields(id, fields.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, ctx: &Context, id: UserId) -> Result<Option<User>> {
        let users = ctx.run(self.users.read()).await?;
        Ok(users.get(&id).cloned())
    }

    async fn update_by_id(&self, ctx: &Context, id: UserId, fields: &UserFields) -> Result<bool> {
        let mut users = ctx.run(self.users.write()).await?;
        match users.get_mut(&id) {
            Some(user) => {
                user.email = fields.email.clone();
                user.name = fields.name.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, ctx: &Context, id: UserId) -> Result<bool> {
        let mut users = ctx.run(self.users.write()).await?;
        Ok(users.remove(&id).is_some())
    }
}
