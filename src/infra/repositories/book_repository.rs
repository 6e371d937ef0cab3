//! Book repository: trait contract plus the SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use super::entities::book::{self, ActiveModel, Entity as BookEntity};
use crate::domain::Book;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Book repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find book by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>>;

    /// Page through books, newest first
    async fn find_all(&self, limit: u64, offset: u64) -> AppResult<Vec<Book>>;

    /// Insert a fully populated book
    async fn create(&self, book: &Book) -> AppResult<()>;

    /// Overwrite the stored row matching `book.id`.
    ///
    /// Returns `NotFound` when no row was changed.
    async fn update(&self, book: &Book) -> AppResult<()>;

    /// Delete book by ID, `NotFound` when nothing was removed
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Postgres-backed book repository
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        let result = BookEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Book::try_from).transpose()
    }

    async fn find_all(&self, limit: u64, offset: u64) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .order_by_desc(book::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(Book::try_from).collect()
    }

    async fn create(&self, book: &Book) -> AppResult<()> {
        ActiveModel::from(book)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        let mut changes = ActiveModel::from(book);
        changes.id = NotSet;
        changes.created_at = NotSet;

        let result = BookEntity::update_many()
            .set(changes)
            .filter(book::Column::Id.eq(book.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = BookEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
