//! Application services layer - Use cases and business logic.
//!
//! Services are the only place business rules are enforced. They depend on
//! the repository traits, never on SeaORM directly.

mod book_service;
pub mod container;
mod user_service;

pub use container::{ServiceContainer, Services};

pub use book_service::{BookManager, BookService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
