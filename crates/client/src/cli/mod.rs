//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use todos_core::todo::TodoId;

/// CLI client for the todos API.
#[derive(Debug, Parser)]
#[command(name = "todos-client")]
#[command(about = "CLI client for the todos API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "TODOS_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all todos.
    List,
    /// Get todo by ID.
    Get {
        /// Todo ID.
        id: TodoId,
    },
    /// Create a new todo.
    Create {
        /// Todo name.
        #[arg(long)]
        name: String,
    },
    /// Rename a todo.
    Update {
        /// Todo ID.
        id: TodoId,
        /// New name.
        #[arg(long)]
        name: String,
    },
    /// Delete todo by ID.
    Delete {
        /// Todo ID.
        id: TodoId,
    },
    /// Delete every todo.
    DeleteAll,
}
