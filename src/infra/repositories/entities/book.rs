//! Book database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Book, BookStatus};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fails when the stored status is not one the domain knows.
impl TryFrom<Model> for Book {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<BookStatus>()
            .map_err(|e| AppError::internal(format!("book {}: {}", model.id, e)))?;

        Ok(Book {
            id: model.id,
            title: model.title,
            author: model.author,
            isbn: model.isbn,
            description: model.description,
            cover_url: model.cover_url,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<&Book> for ActiveModel {
    fn from(book: &Book) -> Self {
        ActiveModel {
            id: Set(book.id.clone()),
            title: Set(book.title.clone()),
            author: Set(book.author.clone()),
            isbn: Set(book.isbn.clone()),
            description: Set(book.description.clone()),
            cover_url: Set(book.cover_url.clone()),
            status: Set(book.status.to_string()),
            created_at: Set(book.created_at),
            updated_at: Set(book.updated_at),
        }
    }
}
