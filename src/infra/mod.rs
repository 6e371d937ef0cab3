//! Infrastructure layer - External systems integration
//!
//! - Database pool, migrations and health probes
//! - SeaORM-backed repositories for books and users

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{BookRepository, BookStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockBookRepository, MockUserRepository};
