use super::DataStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, filename: &str) -> Result<Option<String>> {
        Ok(self.files.get(filename).cloned())
    }

    fn write(&mut self, filename: &str, content: &str) -> Result<()> {
        self.files.insert(filename.to_string(), content.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, Library, Subscriber};

    pub const BOOKS_FILE: &str = "books.json";
    pub const SUBSCRIBERS_FILE: &str = "subscribers.json";

    pub struct StoreFixture {
        pub store: InMemoryStore,
        books: Vec<Book>,
        subscribers: Vec<Subscriber>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                books: Vec::new(),
                subscribers: Vec::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.books
                    .push(Book::new(format!("Book {}", i + 1), "Author", i as i32 + 1));
            }
            self.flush()
        }

        pub fn with_subscriber(mut self, first: &str, last: &str) -> Self {
            self.subscribers
                .push(Subscriber::new(&Library::default(), first, last));
            self.flush()
        }

        fn flush(mut self) -> Self {
            self.store.save_books(&self.books, BOOKS_FILE).unwrap();
            self.store
                .save_subscribers(&self.subscribers, SUBSCRIBERS_FILE)
                .unwrap();
            self
        }
    }
}
