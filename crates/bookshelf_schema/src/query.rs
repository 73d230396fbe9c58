//! Query root.

use crate::objects::{store, AuthorType, BookType};
use async_graphql::{Context, Object, Result};
use bookshelf_store::{AuthorId, BookId};

/// Read-only entry points.
#[derive(Debug, Default)]
pub struct QueryRoot;

/// Root query
#[Object]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<BookId>) -> Result<Option<BookType>> {
        Ok(store(ctx)?.book(id).map(BookType::from))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<BookType>> {
        Ok(store(ctx)?.books().into_iter().map(BookType::from).collect())
    }

    /// A single author, matched by id or by name
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<AuthorId>,
        name: Option<String>,
    ) -> Result<Option<AuthorType>> {
        Ok(store(ctx)?
            .author(id, name.as_deref())
            .map(AuthorType::from))
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<AuthorType>> {
        Ok(store(ctx)?
            .authors()
            .into_iter()
            .map(AuthorType::from)
            .collect())
    }
}
