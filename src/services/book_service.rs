//! Book service - Validation and lifecycle of the book catalogue.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Book, CreateBook, UpdateBook};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::BookRepository;
use crate::types::PaginationParams;

/// Book service trait for dependency injection.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Get book by ID
    async fn get_book(&self, id: &str) -> AppResult<Book>;

    /// List books newest first. Out-of-range paging values are coerced.
    async fn list_books(&self, page: i64, page_size: i64) -> AppResult<Vec<Book>>;

    /// Create a book and return it with its generated id and timestamps
    async fn create_book(&self, input: CreateBook) -> AppResult<Book>;

    /// Merge `input` into the stored book and return the result
    async fn update_book(&self, id: &str, input: UpdateBook) -> AppResult<Book>;

    /// Delete book by ID
    async fn delete_book(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of BookService using repository.
pub struct BookManager {
    repo: Arc<dyn BookRepository>,
}

impl BookManager {
    /// Create new book service instance with repository
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }
}

/// Title and author are mandatory on both create and update.
fn require_title_and_author(title: &str, author: &str) -> AppResult<()> {
    if title.is_empty() || author.is_empty() {
        return Err(AppError::invalid_input("title and author are required"));
    }
    Ok(())
}

#[async_trait]
impl BookService for BookManager {
    async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_books(&self, page: i64, page_size: i64) -> AppResult<Vec<Book>> {
        let params = PaginationParams::new(page, page_size).normalized();
        self.repo.find_all(params.limit(), params.offset()).await
    }

    async fn create_book(&self, input: CreateBook) -> AppResult<Book> {
        require_title_and_author(&input.title, &input.author)?;

        let book = Book::new(Uuid::new_v4().to_string(), input);
        self.repo.create(&book).await?;

        tracing::info!(book_id = %book.id, "Book created");
        Ok(book)
    }

    async fn update_book(&self, id: &str, input: UpdateBook) -> AppResult<Book> {
        require_title_and_author(&input.title, &input.author)?;

        let mut book = self.get_book(id).await?;
        book.apply_update(input);
        self.repo.update(&book).await?;

        tracing::info!(book_id = %book.id, "Book updated");
        Ok(book)
    }

    async fn delete_book(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await?;

        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }
}
