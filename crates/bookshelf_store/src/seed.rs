//! Seed catalogue.

use crate::types::{AuthorId, BookId};

/// Authors present at startup, as `(id, name)`.
pub const SEED_AUTHORS: &[(AuthorId, &str)] = &[
    (1, "J. K. Rowling"),
    (2, "J. R. R. Tolkien"),
    (3, "Brent Weeks"),
    (4, "test"),
];

/// Books present at startup, as `(id, name, author_id)`.
pub const SEED_BOOKS: &[(BookId, &str, AuthorId)] = &[
    (1, "Harry Potter and the Chamber of Secrets", 1),
    (2, "Harry Potter and the Prisoner of Azkaban", 1),
    (3, "Harry Potter and the Goblet of Fire", 1),
    (4, "The Fellowship of the Ring", 2),
    (5, "The Two Towers", 2),
    (6, "The Return of the King", 2),
    (7, "The Way of Shadows", 3),
    (8, "Beyond the Shadows", 3),
    (9, "Beyond the Windows", 4),
];
