//! OpenAPI documentation configuration.
//!
//! Served as Swagger UI under `/swagger-ui`.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, book_handler, health_handler, user_handler};
use crate::domain::{Book, BookStatus, UserResponse};

/// OpenAPI documentation for the BookFlow API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BookFlow API",
        version = "0.1.0",
        description = "Book catalogue and user accounts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        book_handler::list_books,
        book_handler::get_book,
        book_handler::create_book,
        book_handler::update_book,
        book_handler::delete_book,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        auth_handler::register,
        auth_handler::login,
        health_handler::health_check,
    ),
    components(
        schemas(
            Book,
            BookStatus,
            UserResponse,
            book_handler::BookRequest,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            auth_handler::RegisterResponse,
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "Books", description = "Book catalogue"),
        (name = "Users", description = "User management"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Health", description = "Liveness and schema probe")
    )
)]
pub struct ApiDoc;
