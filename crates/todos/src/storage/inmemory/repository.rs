//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{Todo, TodoId};

/// Table contents plus the next identifier to hand out.
#[derive(Debug)]
struct Table {
    rows: BTreeMap<TodoId, String>,
    next_id: TodoId,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory storage backend.
///
/// Identifiers are assigned from a counter guarded by the same lock as the
/// rows, so concurrent inserts never observe the same value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn create_todo(&self, name: &str) -> Result<TodoId> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id.checked_add(1).ok_or_else(|| {
            RepositoryError::QueryFailed("identifier space exhausted".to_string())
        })?;
        table.rows.insert(id, name.to_string());
        Ok(id)
    }

    async fn get_todo(&self, id: TodoId) -> Result<Todo> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .map(|name| Todo::new(id, name.clone()))
            .ok_or_else(|| RepositoryError::todo_not_found(id))
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .map(|(id, name)| Todo::new(*id, name.clone()))
            .collect())
    }

    async fn update_todo(&self, id: TodoId, name: &str) -> Result<Todo> {
        let mut table = self.table.write().await;
        let stored = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::todo_not_found(id))?;
        *stored = name.to_string();
        Ok(Todo::new(id, name))
    }

    async fn delete_todo(&self, id: TodoId) -> Result<()> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::todo_not_found(id))
    }

    async fn delete_all_todos(&self) -> Result<()> {
        *self.table.write().await = Table::default();
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
