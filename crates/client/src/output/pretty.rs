//! Pretty output formatting.

use todos_core::todo::Todo;

/// Format a todo for display.
pub fn format_todo(todo: &Todo) -> String {
    format!("#{} {}", todo.id, todo.name)
}

/// Format todos for display.
pub fn format_todos(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }
    let mut output = format!("TODOS ({})\n", todos.len());
    output.push_str(&"-".repeat(40));
    for todo in todos {
        output.push_str(&format!("\n{}", format_todo(todo)));
    }
    output
}
