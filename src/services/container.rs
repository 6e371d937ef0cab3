//! Service Container - Centralized service access.
//!
//! The composition root builds one `Services` from the pooled connection;
//! handlers only ever see the service traits.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{BookManager, BookService, UserManager, UserService};
use crate::infra::{BookStore, UserStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get book service
    fn books(&self) -> Arc<dyn BookService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    book_service: Arc<dyn BookService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(book_service: Arc<dyn BookService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            book_service,
            user_service,
        }
    }

    /// Wire the Postgres repositories into their services
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let book_repo = Arc::new(BookStore::new(db.clone()));
        let user_repo = Arc::new(UserStore::new(db));

        Self::new(
            Arc::new(BookManager::new(book_repo)),
            Arc::new(UserManager::new(user_repo)),
        )
    }
}

impl ServiceContainer for Services {
    fn books(&self) -> Arc<dyn BookService> {
        self.book_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
