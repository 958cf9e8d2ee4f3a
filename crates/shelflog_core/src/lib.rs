//! Core domain logic for the shelflog reading log.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::book::{
    parse_optional_text, parse_rating, parse_read_date, parse_title, Book, BookId,
    BookValidationError, NewBook, RATING_MAX, RATING_MIN,
};
pub use repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
pub use service::book_service::BookService;

/// Version string reported by the interactive banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::VERSION;

    #[test]
    fn version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }
}
