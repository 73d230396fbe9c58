//! The author and book store.

use crate::seed::{SEED_AUTHORS, SEED_BOOKS};
use crate::types::{Author, AuthorId, Book, BookId};
use parking_lot::RwLock;

/// Both collections, in insertion order.
#[derive(Debug, Default)]
struct Tables {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// In-memory store of authors and books.
///
/// Lookups are linear scans. Records are only ever appended, so insertion
/// order is also id order.
#[derive(Debug, Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the seed catalogue.
    pub fn seeded() -> Self {
        let authors = SEED_AUTHORS
            .iter()
            .map(|&(id, name)| Author::new(id, name))
            .collect();
        let books = SEED_BOOKS
            .iter()
            .map(|&(id, name, author_id)| Book::new(id, name, author_id))
            .collect();
        Self {
            tables: RwLock::new(Tables { authors, books }),
        }
    }

    /// Returns the first book with the given id.
    ///
    /// An absent id matches nothing.
    pub fn book(&self, id: Option<BookId>) -> Option<Book> {
        let id = id?;
        self.tables.read().books.iter().find(|b| b.id == id).cloned()
    }

    /// Returns all books in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.tables.read().books.clone()
    }

    /// Returns the first author whose id equals `id` **or** whose name
    /// equals `name`.
    ///
    /// Either argument may be absent; an absent argument never matches.
    /// Supplying both does not narrow the search.
    pub fn author(&self, id: Option<AuthorId>, name: Option<&str>) -> Option<Author> {
        self.tables
            .read()
            .authors
            .iter()
            .find(|a| id == Some(a.id) || name == Some(a.name.as_str()))
            .cloned()
    }

    /// Returns all authors in insertion order.
    pub fn authors(&self) -> Vec<Author> {
        self.tables.read().authors.clone()
    }

    /// Returns the author with the given id.
    pub fn author_by_id(&self, id: AuthorId) -> Option<Author> {
        self.tables
            .read()
            .authors
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// Returns the books whose `author_id` equals `author_id`, in insertion order.
    pub fn books_by_author(&self, author_id: AuthorId) -> Vec<Book> {
        self.tables
            .read()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Appends a book and returns it.
    ///
    /// The id is the current book count plus one. `author_id` is stored
    /// as given.
    pub fn add_book(&self, author_id: AuthorId, name: impl Into<String>) -> Book {
        let mut tables = self.tables.write();
        let book = Book::new(tables.books.len() as BookId + 1, name, author_id);
        tables.books.push(book.clone());
        tracing::debug!(id = book.id, author_id, name = %book.name, "added book");
        book
    }

    /// Appends an author and returns it.
    ///
    /// The id is the current author count plus one.
    pub fn add_author(&self, name: impl Into<String>) -> Author {
        let mut tables = self.tables.write();
        let author = Author::new(tables.authors.len() as AuthorId + 1, name);
        tables.authors.push(author.clone());
        tracing::debug!(id = author.id, name = %author.name, "added author");
        author
    }

    /// Returns the number of authors.
    pub fn author_count(&self) -> usize {
        self.tables.read().authors.len()
    }

    /// Returns the number of books.
    pub fn book_count(&self) -> usize {
        self.tables.read().books.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn empty_store() {
        let store = Store::new();
        assert_eq!(store.author_count(), 0);
        assert_eq!(store.book_count(), 0);
        assert!(store.books().is_empty());
        assert_eq!(store.book(Some(1)), None);
    }

    #[test]
    fn seeded_book_lookup() {
        let store = Store::seeded();
        let book = store.book(Some(1)).unwrap();
        assert_eq!(
            book,
            Book::new(1, "Harry Potter and the Chamber of Secrets", 1)
        );
        assert_eq!(
            store.author_by_id(book.author_id),
            Some(Author::new(1, "J. K. Rowling"))
        );
    }

    #[test]
    fn every_book_is_found_by_its_id() {
        let store = Store::seeded();
        for book in store.books() {
            assert_eq!(store.book(Some(book.id)).unwrap().id, book.id);
        }
    }

    #[test]
    fn book_without_id_is_absent() {
        let store = Store::seeded();
        assert_eq!(store.book(None), None);
        assert_eq!(store.book(Some(99)), None);
    }

    #[test]
    fn author_matches_id_or_name() {
        let store = Store::seeded();
        assert_eq!(store.author(Some(2), None).unwrap().name, "J. R. R. Tolkien");
        assert_eq!(store.author(None, Some("Brent Weeks")).unwrap().id, 3);

        // Both given but disagreeing: the first record matching either wins.
        let found = store.author(Some(3), Some("J. K. Rowling")).unwrap();
        assert_eq!(found.id, 1);

        // A non-matching id does not prevent a name match.
        assert_eq!(store.author(Some(42), Some("test")).unwrap().id, 4);
    }

    #[test]
    fn author_without_arguments_is_absent() {
        let store = Store::seeded();
        assert_eq!(store.author(None, None), None);
        assert_eq!(store.author(Some(42), Some("nobody")), None);
    }

    #[test]
    fn add_author_assigns_next_id() {
        let store = Store::seeded();
        let author = store.add_author("New Author");
        assert_eq!(author, Author::new(5, "New Author"));
        assert_eq!(store.author(None, Some("New Author")), Some(author));
        assert_eq!(store.author_count(), 5);
    }

    #[test]
    fn appends_after_seed_keep_ids_unique() {
        let store = Store::seeded();
        let author = store.add_author("Existing");
        let book = store.add_book(author.id, "Fresh");

        let author_ids: HashSet<_> = store.authors().iter().map(|a| a.id).collect();
        let book_ids: HashSet<_> = store.books().iter().map(|b| b.id).collect();
        assert_eq!(author_ids.len(), store.author_count());
        assert_eq!(book_ids.len(), store.book_count());
        assert_eq!((author.id, book.id), (5, 10));
    }

    #[test]
    fn author_without_books_has_empty_listing() {
        let store = Store::seeded();
        let author = store.add_author("Unpublished");
        assert_eq!(store.books_by_author(author.id), Vec::<Book>::new());
    }

    #[test]
    fn add_book_accepts_unknown_author() {
        let store = Store::seeded();
        let book = store.add_book(77, "Orphan");
        assert_eq!(book, Book::new(10, "Orphan", 77));
        assert_eq!(store.author_by_id(book.author_id), None);
        assert_eq!(store.books_by_author(77), vec![book]);
    }

    #[test]
    fn books_by_author_keeps_insertion_order() {
        let store = Store::seeded();
        let added = store.add_book(2, "The Silmarillion");
        let names: Vec<_> = store
            .books_by_author(2)
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "The Fellowship of the Ring",
                "The Two Towers",
                "The Return of the King",
                added.name.as_str(),
            ]
        );
    }

    #[test]
    fn concurrent_appends_get_distinct_ids() {
        let store = Arc::new(Store::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| store.add_book(t, format!("book {t}-{i}")).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(ids.len(), 400);
        assert_eq!(ids, (1..=400).collect::<HashSet<_>>());
    }

    proptest! {
        #[test]
        fn add_book_grows_list_by_one(
            ops in prop::collection::vec((0i32..6, "[a-zA-Z ]{0,16}"), 1..40)
        ) {
            let store = Store::seeded();
            for (author_id, name) in ops {
                let before = store.books().len();
                let book = store.add_book(author_id, name.clone());
                let books = store.books();
                prop_assert_eq!(books.len(), before + 1);
                prop_assert_eq!(books.last(), Some(&book));
                prop_assert_eq!(book.author_id, author_id);
                prop_assert_eq!(book.name, name);
            }
        }

        #[test]
        fn books_by_author_is_filtered_listing(
            author_ids in prop::collection::vec(0i32..5, 0..40),
            wanted in 0i32..5,
        ) {
            let store = Store::new();
            for (i, author_id) in author_ids.iter().enumerate() {
                store.add_book(*author_id, format!("book {i}"));
            }
            let expected: Vec<_> = store
                .books()
                .into_iter()
                .filter(|b| b.author_id == wanted)
                .collect();
            prop_assert_eq!(store.books_by_author(wanted), expected);
        }

        #[test]
        fn appended_books_are_found_by_id(
            ops in prop::collection::vec((0i32..6, "[a-z]{1,12}"), 0..40)
        ) {
            let store = Store::seeded();
            for (author_id, name) in ops {
                store.add_book(author_id, name);
            }
            for book in store.books() {
                prop_assert_eq!(store.book(Some(book.id)), Some(book.clone()));
            }
            let ids: Vec<_> = store.books().iter().map(|b| b.id).collect();
            let expected: Vec<_> = (1..=store.book_count() as i32).collect();
            prop_assert_eq!(ids, expected);
        }

        #[test]
        fn author_ids_are_sequential(names in prop::collection::vec("[a-z]{1,8}", 0..30)) {
            let store = Store::new();
            for name in &names {
                store.add_author(name.as_str());
            }
            let ids: Vec<_> = store.authors().iter().map(|a| a.id).collect();
            let expected: Vec<_> = (1..=names.len() as i32).collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
