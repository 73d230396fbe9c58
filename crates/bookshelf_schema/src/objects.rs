//! GraphQL object types for stored records.

use async_graphql::{Context, Object, Result};
use bookshelf_store::{Author, AuthorId, Book, BookId, Store};
use std::sync::Arc;

/// Fetches the shared store from the request context.
pub(crate) fn store<'a>(ctx: &Context<'a>) -> Result<&'a Arc<Store>> {
    ctx.data::<Arc<Store>>()
}

/// GraphQL view of an [`Author`].
#[derive(Debug, Clone)]
pub struct AuthorType(pub Author);

/// This is the type of author
#[Object]
impl AuthorType {
    async fn id(&self) -> AuthorId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books whose authorId is this author's id
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<BookType>> {
        let books = store(ctx)?.books_by_author(self.0.id);
        Ok(books.into_iter().map(BookType).collect())
    }
}

impl From<Author> for AuthorType {
    fn from(author: Author) -> Self {
        Self(author)
    }
}

/// GraphQL view of a [`Book`].
#[derive(Debug, Clone)]
pub struct BookType(pub Book);

/// The book is written by an author
#[Object]
impl BookType {
    async fn id(&self) -> BookId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> AuthorId {
        self.0.author_id
    }

    /// The author this book references, or null if no such author exists
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<AuthorType>> {
        Ok(store(ctx)?.author_by_id(self.0.author_id).map(AuthorType))
    }
}

impl From<Book> for BookType {
    fn from(book: Book) -> Self {
        Self(book)
    }
}
