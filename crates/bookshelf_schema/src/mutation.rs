//! Mutation root.

use crate::objects::{store, AuthorType, BookType};
use async_graphql::{Context, Object, Result};
use bookshelf_store::AuthorId;

/// Append-only entry points.
#[derive(Debug, Default)]
pub struct MutationRoot;

/// Root mutations
#[Object]
impl MutationRoot {
    /// Add a new book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        author_id: AuthorId,
        name: String,
    ) -> Result<BookType> {
        Ok(store(ctx)?.add_book(author_id, name).into())
    }

    /// Add a new author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<AuthorType> {
        Ok(store(ctx)?.add_author(name).into())
    }
}
