//! API layer - HTTP handlers and routing
//!
//! - Request handlers for books, users, auth and health
//! - Validated JSON extractor
//! - Route definitions and OpenAPI document

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
