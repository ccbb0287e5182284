mod id;
mod types;

pub use id::{parse_todo_id, InvalidTodoId};
pub use types::{Todo, TodoId, TodoInput};
