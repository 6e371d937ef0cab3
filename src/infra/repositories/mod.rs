//! Repository layer - Data access abstraction
//!
//! Services only see the traits; `BookStore` and `UserStore` are the
//! Postgres implementations wired in by the service container.

mod book_repository;
pub(crate) mod entities;
mod user_repository;

pub use book_repository::{BookRepository, BookStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use book_repository::MockBookRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
