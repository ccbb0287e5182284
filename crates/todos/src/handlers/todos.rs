//! Todo CRUD handlers.
//!
//! Each handler parses its inputs, makes one repository call and renders the
//! result as JSON. Failures surface as [`ApiError`], which picks the status.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use todos_core::todo::{parse_todo_id, Todo, TodoId, TodoInput};

use crate::{handlers::ApiError, state::AppState};

/// Resolves the `{id}` segment, turning both extractor and parse failures
/// into bad requests.
fn todo_id(path: Result<Path<String>, PathRejection>) -> Result<TodoId, ApiError> {
    let Path(raw) = path?;
    Ok(parse_todo_id(&raw)?)
}

/// Decodes a todo body as JSON whatever `Content-Type` the client sent.
fn todo_input(body: Result<Bytes, BytesRejection>) -> Result<TodoInput, ApiError> {
    let bytes = body?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// List all todos (GET /rest/todos/).
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todo_repo.list_todos().await?;

    Ok(Json(todos))
}

/// Get a single todo by ID (GET /rest/todos/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = todo_id(path)?;
    let todo = state.todo_repo.get_todo(id).await?;

    Ok(Json(todo))
}

/// Create a new todo (POST /rest/todos/).
///
/// Responds with the bare identifier assigned by storage.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TodoId>, ApiError> {
    let payload = todo_input(body)?;
    tracing::debug!(payload = ?payload, "Received create todo request");

    let id = state.todo_repo.create_todo(&payload.name).await?;

    tracing::info!(todo_id = id, name = %payload.name, "Created new todo");

    Ok(Json(id))
}

/// Rename a todo by ID (PUT /rest/todos/{id}).
///
/// The identifier always comes from the path.
pub async fn update_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = todo_id(path)?;
    let payload = todo_input(body)?;
    tracing::debug!(todo_id = id, payload = ?payload, "Received update todo request");

    let todo = state.todo_repo.update_todo(id, &payload.name).await?;

    tracing::info!(todo_id = id, "Updated todo");

    Ok(Json(todo))
}

/// Delete a todo by ID (DELETE /rest/todos/{id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = todo_id(path)?;
    state.todo_repo.delete_todo(id).await?;

    tracing::info!(todo_id = id, "Deleted todo");

    Ok(StatusCode::OK)
}

/// Delete every todo (DELETE /rest/todos/).
pub async fn delete_all_todos(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.todo_repo.delete_all_todos().await?;

    tracing::info!("Deleted all todos");

    Ok(StatusCode::OK)
}
