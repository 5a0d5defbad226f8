use async_trait::async_trait;

use crate::context::Context;
use crate::user::{User, UserFields, UserId};

use super::Result;

/// Authoritative storage for user records.
///
/// Absence is reported through `Option`/`bool` rather than as an error so
/// that callers decide how to surface it. Every call receives the caller's
/// [`Context`] and must stop waiting once it is canceled or expired.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user and returns the identifier assigned to it.
    async fn insert(&self, ctx: &Context, fields: &UserFields) -> Result<UserId>;

    /// Finds a user by ID.
    async fn find_by_id(&self, ctx: &Context, id: UserId) -> Result<Option<User>>;

    /// Replaces the fields of an existing user. Returns `false` if the ID is unknown.
    async fn update_by_id(&self, ctx: &Context, id: UserId, fields: &UserFields) -> Result<bool>;

    /// Deletes a user. Returns `false` if the ID is unknown.
    async fn delete_by_id(&self, ctx: &Context, id: UserId) -> Result<bool>;
}
