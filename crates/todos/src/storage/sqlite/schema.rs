//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// `AUTOINCREMENT` keeps identifiers unique for the lifetime of the table and
/// registers the table in `sqlite_sequence`, which truncation resets.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (name)
VALUES (?1)
RETURNING id
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, name
FROM todos
WHERE id = ?1
"#;

pub const SELECT_ALL_TODOS: &str = r#"
SELECT id, name
FROM todos
ORDER BY id ASC
"#;

pub const UPDATE_TODO: &str = r#"
UPDATE todos
SET name = ?2
WHERE id = ?1
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;

/// SQLite has no `TRUNCATE`; clearing the rows and the sequence entry is the
/// equivalent.
pub const TRUNCATE_TODOS: &str = r#"
DELETE FROM todos;
DELETE FROM sqlite_sequence WHERE name = 'todos';
"#;

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS todos"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_TODO.contains("RETURNING id"));
        assert!(SELECT_TODO_BY_ID.contains("WHERE id = ?1"));
        assert!(SELECT_ALL_TODOS.contains("ORDER BY id"));
        assert!(UPDATE_TODO.contains("SET name = ?2"));
        assert!(DELETE_TODO.contains("DELETE"));
        assert!(TRUNCATE_TODOS.contains("sqlite_sequence"));
    }
}
