//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores all data in a BTreeMap wrapped in `Arc<RwLock<_>>`. This is useful
//! for development scenarios where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use todos::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
