//! SQLite user store implementation.
//!
//! Implements [`UserStore`] from `usercache_core::storage` using SQLite.
//!
//! Each call runs as a closure on the connection's background thread and is
//! raced against the caller's [`Context`]. When the context wins, the caller
//! gets `Canceled`/`DeadlineExceeded` but a closure that already started
//! still completes on the SQLite thread.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use usercache_core::context::Context;
use usercache_core::storage::{Result, StoreError, UserStore};
use usercache_core::user::{User, UserFields, UserId};

use super::conversions::row_to_user;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based user store.
pub struct SqliteUserStore {
    conn: Connection,
}

impl SqliteUserStore {
    /// Opens a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn insert(&self, ctx: &Context, fields: &UserFields) -> Result<UserId> {
        let email = fields.email.clone();
        let name = fields.name.clone();

        let call = self.conn.call(move |conn| {
            conn.execute(schema::INSERT_USER, [&email, &name])
                .map_err(wrap_err)?;
            Ok(UserId(conn.last_insert_rowid()))
        });

        ctx.run(call).await?.map_err(map_tokio_rusqlite_error)
    }

    async fn find_by_id(&self, ctx: &Context, id: UserId) -> Result<Option<User>> {
        let call = self.conn.call(move |conn| {
            let mut stmt = conn
                .prepare_cached(schema::SELECT_USER_BY_ID)
                .map_err(wrap_err)?;
            match stmt.query_row([id.get()], row_to_user) {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        });

        ctx.run(call).await?.map_err(map_tokio_rusqlite_error)
    }

    async fn update_by_id(&self, ctx: &Context, id: UserId, fields: &UserFields) -> Result<bool> {
        let email = fields.email.clone();
        let name = fields.name.clone();

        let call = self.conn.call(move |conn| {
            let rows = conn
                .execute(schema::UPDATE_USER, rusqlite::params![id.get(), email, name])
                .map_err(wrap_err)?;
            Ok(rows > 0)
        });

        ctx.run(call).await?.map_err(map_tokio_rusqlite_error)
    }

    async fn delete_by_id(&self, ctx: &Context, id: UserId) -> Result<bool> {
        let call = self.conn.call(move |conn| {
            let rows = conn
                .execute(schema::DELETE_USER, [id.get()])
                .map_err(wrap_err)?;
            Ok(rows > 0)
        });

        ctx.run(call).await?.map_err(map_tokio_rusqlite_error)
    }
}
