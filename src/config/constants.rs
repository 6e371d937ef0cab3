//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Page size used when the requested size is out of range
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// Authentication
// =============================================================================

/// Credential handed back on successful login.
///
/// Session tokens are not issued by this service; clients only get a
/// fixed value to carry around.
pub const PLACEHOLDER_SESSION_TOKEN: &str = "token123";

/// Shortest password accepted on signup or password change
pub const MIN_PASSWORD_LENGTH: usize = 6;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default runtime environment name
pub const DEFAULT_APP_ENV: &str = "development";

// =============================================================================
// Database
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";
pub const DEFAULT_DB_NAME: &str = "bookflow";
pub const DEFAULT_DB_SSLMODE: &str = "disable";

/// Upper bound on pooled connections
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;

/// Connections kept open while idle
pub const DEFAULT_DB_MIN_CONNECTIONS: u32 = 5;

/// Table probed by the health check to confirm the schema is in place
pub const HEALTH_PROBE_TABLE: &str = "books";
