//! Path identifier parsing.
//!
//! Pure validation of the `{id}` path segment, kept apart from the HTTP layer
//! so the accepted grammar is testable without a router.

use thiserror::Error;

use super::TodoId;

/// Errors produced while parsing a todo identifier from a URL path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidTodoId {
    #[error("Invalid todo id: empty")]
    Empty,
    #[error("Invalid todo id: {0:?} is not a non-negative integer")]
    NotANumber(String),
    #[error("Invalid todo id: {0} is out of range")]
    OutOfRange(String),
}

/// Parses a todo identifier from its path segment.
///
/// Accepts a non-empty run of ASCII digits that fits in a [`TodoId`]. Signs,
/// whitespace and any other characters are rejected.
///
/// # Examples
///
/// ```
/// use todos_core::todo::{parse_todo_id, InvalidTodoId};
///
/// assert_eq!(parse_todo_id("3"), Ok(3));
/// assert!(matches!(parse_todo_id("abc"), Err(InvalidTodoId::NotANumber(_))));
/// ```
pub fn parse_todo_id(raw: &str) -> Result<TodoId, InvalidTodoId> {
    if raw.is_empty() {
        return Err(InvalidTodoId::Empty);
    }

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidTodoId::NotANumber(raw.to_string()));
    }

    raw.parse::<TodoId>()
        .map_err(|_| InvalidTodoId::OutOfRange(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_digits() {
        assert_eq!(parse_todo_id("0"), Ok(0));
        assert_eq!(parse_todo_id("42"), Ok(42));
        assert_eq!(parse_todo_id("007"), Ok(7));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(parse_todo_id(""), Err(InvalidTodoId::Empty));
    }

    #[test]
    fn test_rejects_signs_and_whitespace() {
        for raw in ["-1", "+1", " 1", "1 "] {
            assert!(
                matches!(parse_todo_id(raw), Err(InvalidTodoId::NotANumber(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_letters() {
        assert_eq!(
            parse_todo_id("abc"),
            Err(InvalidTodoId::NotANumber("abc".to_string()))
        );
        assert!(parse_todo_id("12a").is_err());
    }

    #[test]
    fn test_rejects_overflow() {
        assert_eq!(
            parse_todo_id("9223372036854775808"),
            Err(InvalidTodoId::OutOfRange("9223372036854775808".to_string()))
        );
        assert_eq!(parse_todo_id("9223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            InvalidTodoId::NotANumber("x".to_string()).to_string(),
            "Invalid todo id: \"x\" is not a non-negative integer"
        );
    }
}
