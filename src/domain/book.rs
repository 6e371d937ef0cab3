//! Book domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Circulation state of a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
    Lost,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Borrowed => "borrowed",
            BookStatus::Lost => "lost",
        }
    }
}

/// A status string outside the known set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown book status '{0}'")]
pub struct UnknownBookStatus(pub String);

impl FromStr for BookStatus {
    type Err = UnknownBookStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(BookStatus::Available),
            "borrowed" => Ok(BookStatus::Borrowed),
            "lost" => Ok(BookStatus::Lost),
            other => Err(UnknownBookStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read an optional status where `null`, a missing field and `""` all mean
/// "not given". Anything else must be a known status.
pub fn deserialize_optional_status<'de, D>(deserializer: D) -> Result<Option<BookStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Book domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique book identifier
    #[schema(example = "e0c7f36a-9c5e-4c7d-b0a1-596b344f3a0b")]
    pub id: String,
    #[schema(example = "The Lord of the Rings")]
    pub title: String,
    #[schema(example = "J.R.R. Tolkien")]
    pub author: String,
    #[schema(example = "9788533615120")]
    pub isbn: Option<String>,
    #[schema(example = "An epic fantasy tale")]
    pub description: Option<String>,
    #[schema(example = "https://example.com/cover.jpg")]
    pub cover_url: Option<String>,
    pub status: BookStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a fresh book from creation input.
    ///
    /// Both timestamps are set to the same instant and a missing status
    /// falls back to [`BookStatus::Available`].
    pub fn new(id: String, input: CreateBook) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: input.title,
            author: input.author,
            isbn: input.isbn,
            description: input.description,
            cover_url: input.cover_url,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge an update into this book and refresh `updated_at`.
    ///
    /// Title, author, ISBN and description are always replaced, even by
    /// empty values. Cover URL and status only change when the update
    /// carries a non-empty value.
    pub fn apply_update(&mut self, update: UpdateBook) {
        self.title = update.title;
        self.author = update.author;
        self.isbn = update.isbn;
        self.description = update.description;

        if let Some(cover_url) = update.cover_url.filter(|url| !url.is_empty()) {
            self.cover_url = Some(cover_url);
        }
        if let Some(status) = update.status {
            self.status = status;
        }

        self.updated_at = Utc::now();
    }
}

/// Book creation input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    /// Defaults to `available`
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<BookStatus>,
}

/// Book update input (see [`Book::apply_update`] for merge rules)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<BookStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new(
            "book-1".to_string(),
            CreateBook {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                isbn: Some("9780441013593".to_string()),
                description: Some("Desert planet".to_string()),
                cover_url: Some("https://img.example.com/dune.jpg".to_string()),
                status: None,
            },
        )
    }

    #[test]
    fn test_new_book_defaults() {
        let book = sample_book();
        assert_eq!(book.status, BookStatus::Available);
        assert_eq!(book.created_at, book.updated_at);
    }

    #[test]
    fn test_update_keeps_cover_and_status_when_absent() {
        let mut book = sample_book();
        book.status = BookStatus::Borrowed;

        book.apply_update(UpdateBook {
            title: "Dune Messiah".to_string(),
            author: "Frank Herbert".to_string(),
            cover_url: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.cover_url.as_deref(), Some("https://img.example.com/dune.jpg"));
        assert_eq!(book.status, BookStatus::Borrowed);
        // isbn and description are overwritten unconditionally
        assert_eq!(book.isbn, None);
        assert_eq!(book.description, None);
        assert!(book.updated_at >= book.created_at);
    }

    #[test]
    fn test_update_replaces_cover_and_status_when_present() {
        let mut book = sample_book();

        book.apply_update(UpdateBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: Some(String::new()),
            cover_url: Some("https://img.example.com/new.jpg".to_string()),
            status: Some(BookStatus::Lost),
            ..Default::default()
        });

        assert_eq!(book.cover_url.as_deref(), Some("https://img.example.com/new.jpg"));
        assert_eq!(book.status, BookStatus::Lost);
        assert_eq!(book.description.as_deref(), Some(""));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("borrowed".parse(), Ok(BookStatus::Borrowed));
        assert_eq!("available".parse(), Ok(BookStatus::Available));
        assert_eq!("lost".parse::<BookStatus>().unwrap().to_string(), "lost");
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let err = "misplaced".parse::<BookStatus>().unwrap_err();
        assert_eq!(err, UnknownBookStatus("misplaced".to_string()));
        assert_eq!(err.to_string(), "unknown book status 'misplaced'");
        assert!("".parse::<BookStatus>().is_err());
    }

    #[test]
    fn test_empty_status_in_input_means_unset() {
        let input: UpdateBook =
            serde_json::from_str(r#"{"title":"T","author":"A","status":""}"#).unwrap();
        assert_eq!(input.status, None);

        let input: CreateBook = serde_json::from_str(r#"{"title":"T","author":"A"}"#).unwrap();
        assert_eq!(input.status, None);

        let input: CreateBook =
            serde_json::from_str(r#"{"title":"T","author":"A","status":"lost"}"#).unwrap();
        assert_eq!(input.status, Some(BookStatus::Lost));

        let result = serde_json::from_str::<CreateBook>(r#"{"title":"T","author":"A","status":"gone"}"#);
        assert!(result.is_err());
    }
}
