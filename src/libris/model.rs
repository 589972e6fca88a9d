use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const DEFAULT_LIBRARY_NAME: &str = "City Library";

/// The two entity collections a catalog holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Book,
    Subscriber,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Book => "Book",
            EntityKind::Subscriber => "Subscriber",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Book => "book",
            EntityKind::Subscriber => "subscriber",
        }
    }

    /// The attribute uniqueness is checked on.
    pub fn identity(&self) -> &'static str {
        match self {
            EntityKind::Book => "title",
            EntityKind::Subscriber => "name",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRARY_NAME)
    }
}

/// Books compare by value: two books are the same book when title, author
/// and id all match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub book_id: i32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, book_id: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            book_id,
        }
    }

    pub fn has_title(&self, title: &str) -> bool {
        eq_ignore_case(&self.title, title)
    }

    /// Natural ordering: by title, case-sensitive.
    pub fn by_title(a: &Book, b: &Book) -> Ordering {
        a.title.cmp(&b.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub first_name: String,
    pub last_name: String,
    /// Name of the library the subscriber belongs to.
    pub library: String,
    #[serde(default)]
    pub borrowed_books: Vec<Book>,
}

impl Subscriber {
    pub fn new(
        library: &Library,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            library: library.name.clone(),
            borrowed_books: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        eq_ignore_case(&self.first_name, first_name) && eq_ignore_case(&self.last_name, last_name)
    }

    pub fn borrowed_book_count(&self) -> usize {
        self.borrowed_books.len()
    }

    pub fn has_borrowed(&self, book: &Book) -> bool {
        self.borrowed_books.contains(book)
    }

    /// Natural ordering: last name, then first name.
    pub fn by_name(a: &Subscriber, b: &Subscriber) -> Ordering {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    }

    /// Most borrowed books first.
    pub fn by_borrowed_count_desc(a: &Subscriber, b: &Subscriber) -> Ordering {
        b.borrowed_book_count().cmp(&a.borrowed_book_count())
    }
}

/// Case-insensitive comparison used by the duplicate checks.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_title_match_ignores_case() {
        let book = Book::new("Dune", "Herbert", 1);
        assert!(book.has_title("dune"));
        assert!(book.has_title("DUNE"));
        assert!(!book.has_title("Dune Messiah"));
    }

    #[test]
    fn book_equality_is_by_value() {
        assert_eq!(Book::new("Dune", "Herbert", 1), Book::new("Dune", "Herbert", 1));
        assert_ne!(Book::new("Dune", "Herbert", 1), Book::new("Dune", "Herbert", 2));
    }

    #[test]
    fn subscriber_binds_to_shared_library() {
        let library = Library::new("Harbor Branch");
        let sub = Subscriber::new(&library, "Ada", "Lovelace");
        assert_eq!(sub.library, "Harbor Branch");
        assert_eq!(sub.full_name(), "Ada Lovelace");
        assert_eq!(sub.borrowed_book_count(), 0);
    }

    #[test]
    fn subscriber_ordering_is_last_then_first() {
        let library = Library::default();
        let a = Subscriber::new(&library, "Zoe", "Adams");
        let b = Subscriber::new(&library, "Alan", "Baker");
        let c = Subscriber::new(&library, "Bea", "Adams");

        assert_eq!(Subscriber::by_name(&a, &b), Ordering::Less);
        assert_eq!(Subscriber::by_name(&c, &a), Ordering::Less);
    }

    #[test]
    fn subscriber_name_match_ignores_case() {
        let sub = Subscriber::new(&Library::default(), "Ada", "Lovelace");
        assert!(sub.has_name("ada", "LOVELACE"));
        assert!(!sub.has_name("Ada", "Byron"));
    }
}
