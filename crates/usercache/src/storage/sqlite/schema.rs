//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the users table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL,
    name TEXT NOT NULL
);
"#;

pub const INSERT_USER: &str = r#"
INSERT INTO users (email, name)
VALUES (?1, ?2)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, email, name
FROM users
WHERE id = ?1
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET email = ?2, name = ?3
WHERE id = ?1
"#;

pub const DELETE_USER: &str = r#"
DELETE FROM users
WHERE id = ?1
"#;
