//! # Bookshelf Store
//!
//! In-memory record store behind the Bookshelf API.
//!
//! This crate provides:
//! - The [`Author`] and [`Book`] record types
//! - Point lookup and full listing for each record type
//! - Relationship traversal (`books_by_author`, `author_by_id`)
//! - Append-only creation with sequential ids
//! - The seed catalogue the server starts with
//!
//! # Concurrency
//!
//! Both collections live behind one lock. Id assignment and append happen
//! under the same write guard, so concurrent writers never observe the same
//! collection length.
//!
//! ```
//! use bookshelf_store::Store;
//!
//! let store = Store::seeded();
//! let author = store.add_author("New Author");
//! assert_eq!(author.id, 5);
//! assert_eq!(store.author(None, Some("New Author")), Some(author));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod seed;
mod store;
mod types;

pub use seed::{SEED_AUTHORS, SEED_BOOKS};
pub use store::Store;
pub use types::{Author, AuthorId, Book, BookId};
