//! Schema assembly.

use crate::mutation::MutationRoot;
use crate::query::QueryRoot;
use async_graphql::{EmptySubscription, Schema};
use bookshelf_store::Store;
use std::sync::Arc;

/// The executable Bookshelf schema.
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with `store` as shared context data.
///
/// The schema is cheap to clone; clones share the same store.
pub fn build_schema(store: Arc<Store>) -> BookshelfSchema {
    tracing::debug!(
        authors = store.author_count(),
        books = store.book_count(),
        "building schema"
    );
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
