//! SQLite repository implementation.
//!
//! Implements the repository traits from `todos_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{Todo, TodoId};

use super::conversions::row_to_todo;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

const ENTITY: &str = "Todo";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// All statements run on the single background thread owned by
/// `tokio_rusqlite::Connection`, one auto-committed statement per call.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn create_todo(&self, name: &str) -> Result<TodoId> {
        let name = name.to_string();

        let id = self
            .conn
            .call(move |conn| {
                match conn.query_row(schema::INSERT_TODO, [&name], |row| row.get::<_, TodoId>(0)) {
                    Ok(id) => Ok(Some(id)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))?;

        id.ok_or_else(|| {
            RepositoryError::NotSupported("insert did not report the generated id".to_string())
        })
    }

    async fn get_todo(&self, id: TodoId) -> Result<Todo> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_TODO_BY_ID).map_err(wrap_err)?;
                stmt.query_row([id], row_to_todo).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_TODOS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                let mut todos = Vec::new();
                for row_result in rows {
                    todos.push(row_result.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn update_todo(&self, id: TodoId, name: &str) -> Result<Todo> {
        let todo = Todo::new(id, name);
        let new_name = todo.name.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_TODO, rusqlite::params![id, new_name])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))?;

        Ok(todo)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_TODO, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn delete_all_todos(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::TRUNCATE_TODOS).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }
}
