//! Book use-case service.
//!
//! # Responsibility
//! - Provide stable add/list entry points for UI callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::book::{Book, BookId, NewBook};
use crate::repo::book_repo::{BookRepository, RepoResult};
use log::{error, info};

/// Use-case service wrapper for book operations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records one book through repository persistence.
    ///
    /// Returns repository-level validation or storage errors unchanged.
    pub fn add_book(&self, draft: &NewBook) -> RepoResult<BookId> {
        match self.repo.insert(draft) {
            Ok(id) => {
                info!("event=book_add module=service status=ok id={id}");
                Ok(id)
            }
            Err(err) => {
                error!("event=book_add module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Lists every recorded book in insertion order.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        match self.repo.list_all() {
            Ok(books) => {
                info!(
                    "event=book_list module=service status=ok count={}",
                    books.len()
                );
                Ok(books)
            }
            Err(err) => {
                error!("event=book_list module=service status=error error={err}");
                Err(err)
            }
        }
    }
}
