//! Repository Module
//!
//! CRUD operations per aggregate over the embedded SurrealDB store.
//!
//! # ID convention
//!
//! Models carry full `"table:id"` strings. Queries always project
//! `type::string(id) AS id` so records deserialize into plain strings,
//! and [`bare_id`] strips the table prefix for point lookups.

pub mod business;
pub mod note;
pub mod service;
pub mod user;

pub use business::BusinessRepository;
pub use note::NoteRepository;
pub use service::ServiceRepository;
pub use user::UserRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Shared database handle for repositories
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Strip a `table:` prefix from an id, if present
pub fn bare_id<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Build the full `table:id` form
pub fn full_id(table: &str, id: &str) -> String {
    format!("{table}:{}", bare_id(table, id))
}

/// Generate a fresh record id (uuid, no hyphens)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id() {
        assert_eq!(bare_id("note", "note:abc"), "abc");
        assert_eq!(bare_id("note", "abc"), "abc");
        assert_eq!(bare_id("note", "notebook"), "notebook");
    }

    #[test]
    fn test_full_id_idempotent() {
        assert_eq!(full_id("note", "abc"), "note:abc");
        assert_eq!(full_id("note", "note:abc"), "note:abc");
    }
}
