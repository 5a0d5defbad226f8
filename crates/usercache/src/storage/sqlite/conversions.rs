//! SQLite row conversion functions.

use rusqlite::Row;

use usercache_core::user::{User, UserId};

/// Convert a SQLite row to a User.
///
/// Expected columns: id, email, name
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: UserId(row.get(0)?),
        email: row.get(1)?,
        name: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::schema;

    #[test]
    fn test_row_to_user() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(schema::CREATE_TABLES).unwrap();
        conn.execute(schema::INSERT_USER, ["a@x.com", "A"]).unwrap();

        let user = conn
            .query_row(schema::SELECT_USER_BY_ID, [1], row_to_user)
            .unwrap();

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name, "A");
    }

    #[test]
    fn test_row_with_null_column_fails() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let result = conn.query_row("SELECT 1, NULL, 'A'", [], row_to_user);
        assert!(result.is_err());
    }
}
