use async_trait::async_trait;

use crate::todo::{Todo, TodoId};

use super::Result;

/// Repository for todo operations.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts a new todo and returns the identifier assigned by the store.
    async fn create_todo(&self, name: &str) -> Result<TodoId>;

    /// Gets a todo by its ID. Fails with `NotFound` when no row matches.
    async fn get_todo(&self, id: TodoId) -> Result<Todo>;

    /// Lists every todo, ordered by ID. Empty when the table is empty.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Renames an existing todo and returns the updated record.
    async fn update_todo(&self, id: TodoId, name: &str) -> Result<Todo>;

    /// Deletes a todo by its ID. Fails with `NotFound` when no row matches.
    async fn delete_todo(&self, id: TodoId) -> Result<()>;

    /// Removes every todo and resets identifier assignment.
    async fn delete_all_todos(&self) -> Result<()>;

    /// Round trip to the store without touching data.
    async fn ping(&self) -> Result<()>;
}
