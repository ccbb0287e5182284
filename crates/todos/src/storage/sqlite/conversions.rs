//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use rusqlite::Row;
use todos_core::todo::Todo;

/// Convert a SQLite row to a Todo.
///
/// Expected columns: id, name
pub fn row_to_todo(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
