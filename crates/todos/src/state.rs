//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The repository is a trait object so handlers never
//! depend on the backend selected by feature flags.

use std::sync::Arc;

use todos_core::storage::TodoRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler; the clone only bumps the repository's
/// reference count.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository for the active storage backend.
    pub todo_repo: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates an AppState around an already constructed repository.
    pub fn with_repository(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repo }
    }
}

// ============================================================================
// Factory functions for each storage backend
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = if config.database_path == ":memory:" {
                SqliteRepository::new_in_memory().await?
            } else {
                SqliteRepository::new(&config.database_path).await?
            };

            tracing::info!(path = %config.database_path, "Opened SQLite storage");

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage");

            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}
