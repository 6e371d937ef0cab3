//! Application state shared by every handler.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{BookService, ServiceContainer, Services, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Book service
    pub book_service: Arc<dyn BookService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database handle, used by the health probe
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the Postgres-backed services on top of `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database)
    }

    /// Take the services out of any container (a mock one in tests).
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self::new(container.books(), container.users(), database)
    }

    /// Create new application state with manually injected services.
    pub fn new(
        book_service: Arc<dyn BookService>,
        user_service: Arc<dyn UserService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            book_service,
            user_service,
            database,
        }
    }
}
