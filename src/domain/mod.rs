//! Domain layer - Core business entities
//!
//! Books, users and the password value object. Nothing in here touches
//! the database or HTTP.

pub mod book;
pub mod password;
pub mod user;

pub use book::{Book, BookStatus, CreateBook, UnknownBookStatus, UpdateBook};
pub use password::Password;
pub use user::{CreateUser, UpdateUser, User, UserResponse};
