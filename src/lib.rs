//! BookFlow - book catalogue and user accounts service
//!
//! A layered axum + SeaORM service. Handlers translate HTTP into service
//! calls; services own every business rule; repositories own storage.
//!
//! # Architecture Layers
//!
//! - **cli** / **commands**: `serve` and `migrate` subcommands
//! - **config**: Environment-driven settings and constants
//! - **domain**: Book, User and the Password value object
//! - **services**: Book and user use cases
//! - **infra**: Database pool, migrations and repositories
//! - **api**: HTTP handlers, routes and OpenAPI document
//! - **types**: Pagination and response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Book, BookStatus, Password, User};
pub use errors::{AppError, AppResult};
