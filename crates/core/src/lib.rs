//! Core library for the todos service.
//!
//! Holds the backend-agnostic pieces: the `Todo` domain type, identifier
//! parsing, the repository contract every storage backend implements, and
//! the pure mapping from repository errors to HTTP status codes.

pub mod storage;
pub mod todo;
