//! Todo API operations.

use todos_core::todo::{Todo, TodoId, TodoInput};

use super::TodosClient;
use crate::error::Result;

impl TodosClient {
    /// List all todos.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let response = self.client.get(self.url("/rest/todos/")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new todo and return its ID.
    pub async fn create_todo(&self, name: &str) -> Result<TodoId> {
        let response = self
            .client
            .post(self.url("/rest/todos/"))
            .json(&TodoInput::new(name))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get todo by ID.
    pub async fn get_todo(&self, id: TodoId) -> Result<Todo> {
        let response = self
            .client
            .get(self.url(&format!("/rest/todos/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Rename todo by ID.
    pub async fn update_todo(&self, id: TodoId, name: &str) -> Result<Todo> {
        let response = self
            .client
            .put(self.url(&format!("/rest/todos/{}", id)))
            .json(&TodoInput::new(name))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete todo by ID.
    pub async fn delete_todo(&self, id: TodoId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/rest/todos/{}", id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }

    /// Delete every todo.
    pub async fn delete_all_todos(&self) -> Result<()> {
        let response = self.client.delete(self.url("/rest/todos/")).send().await?;
        self.handle_delete_response(response).await
    }
}
