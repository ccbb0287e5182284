use serde::{Deserialize, Serialize};

/// Identifier of a todo. Assigned by the storage backend on insert.
pub type TodoId = i64;

/// A single todo record as stored and as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
}

impl Todo {
    /// Creates a todo with a known identifier.
    pub fn new(id: TodoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Request body for creating or renaming a todo.
///
/// Unknown fields are ignored, so a client-supplied `id` never reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoInput {
    pub name: String,
}

impl TodoInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
