//! Book handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::book::deserialize_optional_status;
use crate::domain::{Book, BookStatus, CreateBook, UpdateBook};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, PageQuery};

/// Book create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "The Lord of the Rings")]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    #[schema(example = "J.R.R. Tolkien")]
    pub author: String,
    #[schema(example = "9788533615120")]
    pub isbn: Option<String>,
    pub description: Option<String>,
    /// Left unchanged on update when empty
    #[schema(example = "https://example.com/cover.jpg")]
    pub cover_url: Option<String>,
    /// Left unchanged on update when absent or empty
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<BookStatus>,
}

impl From<BookRequest> for CreateBook {
    fn from(req: BookRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
            isbn: req.isbn,
            description: req.description,
            cover_url: req.cover_url,
            status: req.status,
        }
    }
}

impl From<BookRequest> for UpdateBook {
    fn from(req: BookRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
            isbn: req.isbn,
            description: req.description,
            cover_url: req.cover_url,
            status: req.status,
        }
    }
}

/// Create book routes
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
}

/// List books, newest first
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "Books",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let page = query.params();
    let books = state
        .book_service
        .list_books(page.page, page.page_size)
        .await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.book_service.get_book(&id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "Books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookRequest>,
) -> AppResult<Created<Book>> {
    let book = state.book_service.create_book(payload.into()).await?;
    Ok(Created(book))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<BookRequest>,
) -> AppResult<Json<Book>> {
    let book = state.book_service.update_book(&id, payload.into()).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<NoContent> {
    state.book_service.delete_book(&id).await?;
    Ok(NoContent)
}
