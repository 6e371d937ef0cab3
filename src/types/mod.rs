//! Shared request/response types.

mod pagination;
mod response;

pub use pagination::{PageQuery, PaginationParams};
pub use response::{Created, NoContent};
