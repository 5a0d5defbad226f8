use async_trait::async_trait;

use crate::context::Context;
use crate::user::{User, UserFields, UserId};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by ID. Fails with `NotFound` if the user does not exist.
    async fn get_user(&self, ctx: &Context, id: UserId) -> Result<User>;

    /// Creates a new user and returns it with its assigned ID.
    async fn create_user(&self, ctx: &Context, fields: &UserFields) -> Result<User>;

    /// Replaces the fields of an existing user.
    async fn update_user(&self, ctx: &Context, id: UserId, fields: &UserFields) -> Result<()>;

    /// Deletes a user by ID.
    async fn delete_user(&self, ctx: &Context, id: UserId) -> Result<()>;
}
