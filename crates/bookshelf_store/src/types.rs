//! Record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an author. Matches the GraphQL `Int` range.
pub type AuthorId = i32;

/// Identifier of a book. Matches the GraphQL `Int` range.
pub type BookId = i32;

/// A stored author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    /// Sequential id, assigned at creation.
    pub id: AuthorId,
    /// Display name.
    pub name: String,
}

impl Author {
    /// Creates an author record.
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "author:{} ({})", self.id, self.name)
    }
}

/// A stored book.
///
/// `author_id` is a plain reference. Nothing checks that the author exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Sequential id, assigned at creation.
    pub id: BookId,
    /// Title.
    pub name: String,
    /// Id of the author this book claims.
    pub author_id: AuthorId,
}

impl Book {
    /// Creates a book record.
    pub fn new(id: BookId, name: impl Into<String>, author_id: AuthorId) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "book:{} ({}) by author:{}", self.id, self.name, self.author_id)
    }
}
