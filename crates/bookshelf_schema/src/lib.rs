//! # Bookshelf Schema
//!
//! GraphQL binding for the Bookshelf store.
//!
//! This crate provides:
//! - `BookType` and `AuthorType` object types with derived relationship fields
//! - The query root (`book`, `books`, `author`, `authors`)
//! - The mutation root (`addBook`, `addAuthor`)
//! - [`build_schema`], which wires a shared [`Store`] in as context data
//!
//! Resolvers only call store functions; they hold no state of their own.
//!
//! ```
//! use bookshelf_schema::build_schema;
//! use bookshelf_store::Store;
//! use std::sync::Arc;
//!
//! let schema = build_schema(Arc::new(Store::seeded()));
//! assert!(schema.sdl().contains("type BookType"));
//! ```
//!
//! [`Store`]: bookshelf_store::Store

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod mutation;
mod objects;
mod query;
mod schema;

pub use mutation::MutationRoot;
pub use objects::{AuthorType, BookType};
pub use query::QueryRoot;
pub use schema::{build_schema, BookshelfSchema};
