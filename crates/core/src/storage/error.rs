use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Backends classify driver failures into these variants at the source, so
/// callers never need to inspect error text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Not supported: {0}")]
    NotSupported(String),
}

impl RepositoryError {
    /// Shorthand for a missing todo.
    pub fn todo_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Todo",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Todo",
            id: "3".to_string(),
        };
        assert_eq!(error.to_string(), "Todo not found: 3");
    }

    #[test]
    fn test_todo_not_found_shorthand() {
        assert_eq!(
            RepositoryError::todo_not_found(7),
            RepositoryError::NotFound {
                entity_type: "Todo",
                id: "7".to_string(),
            }
        );
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("unable to open database file".to_string());
        assert_eq!(
            error.to_string(),
            "Connection failed: unable to open database file"
        );
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: todos".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: todos");
    }

    #[test]
    fn test_repository_error_not_supported_display() {
        let error = RepositoryError::NotSupported("insert returned no id".to_string());
        assert_eq!(error.to_string(), "Not supported: insert returned no id");
    }
}
