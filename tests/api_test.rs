//! Integration tests for API endpoints.
//!
//! These tests drive the router with stub services, so no database is
//! needed. The health probe runs against a disconnected pool.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookflow::api::{create_router, AppState};
use bookflow::domain::{Book, BookStatus, CreateBook, CreateUser, UpdateBook, UpdateUser, User};
use bookflow::errors::{AppError, AppResult};
use bookflow::infra::Database;
use bookflow::services::{BookService, MockServiceContainer, UserService};

// =============================================================================
// Stub Services
// =============================================================================

/// Book service stub: only `book-1` exists
#[derive(Default)]
struct StubBookService {
    last_page: Mutex<Option<(i64, i64)>>,
}

fn sample_book(id: &str) -> Book {
    Book::new(
        id.to_string(),
        CreateBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            cover_url: Some("https://img.example.com/dune.jpg".to_string()),
            status: Some(BookStatus::Borrowed),
            ..Default::default()
        },
    )
}

#[async_trait]
impl BookService for StubBookService {
    async fn get_book(&self, id: &str) -> AppResult<Book> {
        if id == "book-1" {
            Ok(sample_book(id))
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn list_books(&self, page: i64, page_size: i64) -> AppResult<Vec<Book>> {
        *self.last_page.lock().unwrap() = Some((page, page_size));
        Ok(vec![sample_book("book-1")])
    }

    async fn create_book(&self, input: CreateBook) -> AppResult<Book> {
        Ok(Book::new("book-new".to_string(), input))
    }

    async fn update_book(&self, id: &str, input: UpdateBook) -> AppResult<Book> {
        let mut book = self.get_book(id).await?;
        book.apply_update(input);
        Ok(book)
    }

    async fn delete_book(&self, id: &str) -> AppResult<()> {
        self.get_book(id).await.map(|_| ())
    }
}

/// User service stub: only `ana@example.com` / `secret123` exists
struct StubUserService;

fn sample_user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        password_hash: "$argon2id$stub".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl UserService for StubUserService {
    async fn get_user(&self, id: &str) -> AppResult<User> {
        if id == "user-1" {
            Ok(sample_user(id))
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn list_users(&self, _page: i64, _page_size: i64) -> AppResult<Vec<User>> {
        Ok(vec![sample_user("user-1")])
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        if input.email == "ana@example.com" {
            return Err(AppError::invalid_input("email already in use"));
        }
        Ok(User::new(
            "user-new".to_string(),
            input.name,
            input.email,
            "$argon2id$stub".to_string(),
        ))
    }

    async fn update_user(&self, id: &str, input: UpdateUser) -> AppResult<User> {
        let mut user = self.get_user(id).await?;
        if let Some(name) = input.name.filter(|n| !n.is_empty()) {
            user.name = name;
        }
        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.get_user(id).await.map(|_| ())
    }

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        if email != "ana@example.com" {
            return Err(AppError::NotFound);
        }
        if password != "secret123" {
            return Err(AppError::invalid_input("invalid credentials"));
        }
        Ok(sample_user("user-1"))
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn test_app(books: Arc<StubBookService>) -> Router {
    let book_service: Arc<dyn BookService> = books;
    let user_service: Arc<dyn UserService> = Arc::new(StubUserService);

    let mut container = MockServiceContainer::new();
    container.expect_books().return_const(book_service);
    container.expect_users().return_const(user_service);

    let database = Arc::new(Database::from_connection(DatabaseConnection::Disconnected));
    create_router(AppState::from_container(&container, database))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// =============================================================================
// Books
// =============================================================================

#[tokio::test]
async fn test_list_books_falls_back_on_bad_paging() {
    let books = Arc::new(StubBookService::default());
    let app = test_app(books.clone());

    let (status, body) = send(app, Method::GET, "/api/books?page=abc&page_size=5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(1));
    assert_eq!(*books.last_page.lock().unwrap(), Some((1, 5)));
}

#[tokio::test]
async fn test_list_books_defaults_when_absent() {
    let books = Arc::new(StubBookService::default());
    let app = test_app(books.clone());

    let (status, _) = send(app, Method::GET, "/api/books", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(*books.last_page.lock().unwrap(), Some((1, 10)));
}

#[tokio::test]
async fn test_create_book_returns_created_echo() {
    let app = test_app(Arc::default());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "T", "author": "A", "status": "borrowed" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "book-new");
    assert_eq!(body["status"], "borrowed");
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[tokio::test]
async fn test_create_book_empty_status_defaults_to_available() {
    let app = test_app(Arc::default());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "T", "author": "A", "status": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "available");
}

#[tokio::test]
async fn test_create_book_rejects_empty_title() {
    let app = test_app(Arc::default());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "", "author": "A" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["message"], "title: Title is required");
}

#[tokio::test]
async fn test_create_book_rejects_malformed_body() {
    let app = test_app(Arc::default());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/books")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("malformed request body: "), "{}", message);
}

#[tokio::test]
async fn test_get_book_not_found() {
    let app = test_app(Arc::default());

    let (status, body) = send(app, Method::GET, "/api/books/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_book_keeps_status_when_absent() {
    let app = test_app(Arc::default());

    let (status, body) = send(
        app,
        Method::PUT,
        "/api/books/book-1",
        Some(json!({ "title": "Dune Messiah", "author": "Frank Herbert" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Dune Messiah");
    assert_eq!(body["status"], BookStatus::Borrowed.as_str());
}

#[tokio::test]
async fn test_update_book_empty_status_and_cover_leave_them_unchanged() {
    let app = test_app(Arc::default());

    let (status, body) = send(
        app,
        Method::PUT,
        "/api/books/book-1",
        Some(json!({ "title": "Dune", "author": "Frank Herbert", "status": "", "cover_url": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "borrowed");
    assert_eq!(body["cover_url"], "https://img.example.com/dune.jpg");
}

#[tokio::test]
async fn test_update_book_rejects_unknown_status() {
    let app = test_app(Arc::default());

    let (status, body) = send(
        app,
        Method::PUT,
        "/api/books/book-1",
        Some(json!({ "title": "Dune", "author": "Frank Herbert", "status": "misplaced" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_delete_book() {
    let (status, _) = send(test_app(Arc::default()), Method::DELETE, "/api/books/book-1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(test_app(Arc::default()), Method::DELETE, "/api/books/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Users and auth
// =============================================================================

#[tokio::test]
async fn test_get_user_hides_password() {
    let app = test_app(Arc::default());

    let (status, body) = send(app, Method::GET, "/api/users/user-1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ana@example.com");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = test_app(Arc::default());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Ana", "email": "ana@example.com", "password": "secret123" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "email already in use");
}

#[tokio::test]
async fn test_update_user_rejects_bad_email() {
    let app = test_app(Arc::default());

    let (status, _) = send(
        app,
        Method::PUT,
        "/api/users/user-1",
        Some(json!({ "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_password_length() {
    let (status, body) = send(
        test_app(Arc::default()),
        Method::PUT,
        "/api/users/user-1",
        Some(json!({ "password": "123" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "password: Password must be at least 6 characters"
    );

    let (status, _) = send(
        test_app(Arc::default()),
        Method::PUT,
        "/api/users/user-1",
        Some(json!({ "password": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        test_app(Arc::default()),
        Method::PUT,
        "/api/users/user-1",
        Some(json!({ "password": "n3w-secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_wraps_user() {
    let app = test_app(Arc::default());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/register",
        Some(json!({ "name": "Bruno", "email": "bruno@example.com", "password": "secret123" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["id"], "user-new");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = test_app(Arc::default());

    let (status, _) = send(
        app,
        Method::POST,
        "/api/register",
        Some(json!({ "name": "Bruno", "email": "bruno@example.com", "password": "12345" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success_returns_placeholder_token() {
    let app = test_app(Arc::default());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/login",
        Some(json!({ "email": "ana@example.com", "password": "secret123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], "token123");
    assert_eq!(body["user"]["id"], "user-1");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_failures_are_unauthorized() {
    for (email, password) in [
        ("ana@example.com", "wrong"),
        ("nobody@example.com", "secret123"),
    ] {
        let (status, body) = send(
            test_app(Arc::default()),
            Method::POST,
            "/api/login",
            Some(json!({ "email": email, "password": password })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_unavailable_without_database() {
    let app = test_app(Arc::default());

    let (status, body) = send(app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_root_and_openapi_served() {
    let response = test_app(Arc::default())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = send(
        test_app(Arc::default()),
        Method::GET,
        "/api-docs/openapi.json",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/books").is_some());
}
