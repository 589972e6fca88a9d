//! # Catalog
//!
//! The in-memory state of the library: the shared [`Library`], the books and
//! the subscribers, both kept in insertion order until a sort rearranges them.
//!
//! Every mutation either commits completely or returns a rejection
//! ([`LibrisError::is_rejection`]) with the collections left exactly as they
//! were.
//!
//! ## Borrow workflow
//!
//! ```text
//! Idle ─► SelectingSubscriber ─► SelectingBook ─► Borrowed
//!   │              │                   │
//!   └──────────────┴───────────────────┴────────► Rejected
//! ```
//!
//! Nothing is written until both selections have been validated and the
//! containment check has passed.

use crate::error::{LibrisError, Result};
use crate::model::{Book, EntityKind, Library, Subscriber};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, info};

/// Stable in-place sort with an explicit comparator.
pub fn sort_stable<T, F>(items: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // slice::sort_by is a stable merge sort
    items.sort_by(compare);
}

pub fn format_book_line(book: &Book) -> String {
    format!(
        "Title: {}, Author: {}, Book ID: {}",
        book.title, book.author, book.book_id
    )
}

pub fn format_subscriber_line(subscriber: &Subscriber) -> String {
    format!("Name: {}", subscriber.full_name())
}

/// Where the borrow workflow was when it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowStage {
    Idle,
    SelectingSubscriber,
    SelectingBook,
    Borrowed,
    Rejected,
}

impl fmt::Display for BorrowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BorrowStage::Idle => "idle",
            BorrowStage::SelectingSubscriber => "selecting-subscriber",
            BorrowStage::SelectingBook => "selecting-book",
            BorrowStage::Borrowed => "borrowed",
            BorrowStage::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// A committed borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub subscriber: String,
    pub book: Book,
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has borrowed \"{}\" by {}",
            self.subscriber, self.book.title, self.book.author
        )
    }
}

/// One row of the borrowed-count report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowTally {
    pub name: String,
    pub borrowed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    library: Library,
    books: Vec<Book>,
    subscribers: Vec<Subscriber>,
}

impl Catalog {
    pub fn new(library: Library) -> Self {
        Self {
            library,
            books: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    pub fn replace_books(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    /// Loaded subscribers are rebound to this catalog's library.
    pub fn replace_subscribers(&mut self, mut subscribers: Vec<Subscriber>) {
        for subscriber in &mut subscribers {
            subscriber.library.clone_from(&self.library.name);
        }
        self.subscribers = subscribers;
    }

    /// Swaps the shared library and rebinds every subscriber to it.
    pub fn rename_library(&mut self, library: Library) {
        self.library = library;
        for subscriber in &mut self.subscribers {
            subscriber.library.clone_from(&self.library.name);
        }
    }

    pub fn add_book(&mut self, title: &str, author: &str, book_id: i32) -> Result<&Book> {
        if self.books.iter().any(|b| b.has_title(title)) {
            return Err(LibrisError::DuplicateEntity {
                kind: EntityKind::Book,
                name: title.to_string(),
            });
        }
        self.books.push(Book::new(title, author, book_id));
        info!(title, author, book_id, "book added");
        Ok(&self.books[self.books.len() - 1])
    }

    pub fn add_subscriber(&mut self, first_name: &str, last_name: &str) -> Result<&Subscriber> {
        if self
            .subscribers
            .iter()
            .any(|s| s.has_name(first_name, last_name))
        {
            return Err(LibrisError::DuplicateEntity {
                kind: EntityKind::Subscriber,
                name: format!("{} {}", first_name, last_name),
            });
        }
        self.subscribers
            .push(Subscriber::new(&self.library, first_name, last_name));
        info!(first_name, last_name, library = %self.library.name, "subscriber added");
        Ok(&self.subscribers[self.subscribers.len() - 1])
    }

    /// Formatted book lines. Clone the iterator to walk it again.
    pub fn book_lines(&self) -> impl Iterator<Item = String> + Clone + '_ {
        self.books.iter().map(format_book_line)
    }

    pub fn subscriber_lines(&self) -> impl Iterator<Item = String> + Clone + '_ {
        self.subscribers.iter().map(format_subscriber_line)
    }

    pub fn sort_books_by_title(&mut self) {
        sort_stable(&mut self.books, Book::by_title);
        debug!(count = self.books.len(), "books sorted by title");
    }

    pub fn sort_subscribers_by_name(&mut self) {
        sort_stable(&mut self.subscribers, Subscriber::by_name);
        debug!(count = self.subscribers.len(), "subscribers sorted by name");
    }

    /// Reorders subscribers by borrowed count, highest first, and returns the tally.
    pub fn group_subscribers_by_borrowed_count(&mut self) -> Vec<BorrowTally> {
        sort_stable(&mut self.subscribers, Subscriber::by_borrowed_count_desc);
        self.subscribers
            .iter()
            .map(|s| BorrowTally {
                name: s.full_name(),
                borrowed: s.borrowed_book_count(),
            })
            .collect()
    }

    /// Runs the borrow workflow against `session`.
    ///
    /// The stage the workflow stopped in is logged with the outcome. On
    /// success the loan is already recorded.
    pub fn borrow_book<S: crate::session::Session + ?Sized>(
        &mut self,
        session: &mut S,
    ) -> Result<Loan> {
        let mut stage = BorrowStage::Idle;
        let outcome = self.run_borrow(session, &mut stage);
        match &outcome {
            Ok(loan) => info!(
                %stage,
                subscriber = %loan.subscriber,
                title = %loan.book.title,
                "book borrowed"
            ),
            Err(e) => debug!(%stage, error = %e, "borrow rejected"),
        }
        outcome
    }

    fn run_borrow<S: crate::session::Session + ?Sized>(
        &mut self,
        session: &mut S,
        stage: &mut BorrowStage,
    ) -> Result<Loan> {
        if self.subscribers.is_empty() {
            return Err(Self::reject(stage, LibrisError::EmptyCollection(EntityKind::Subscriber)));
        }
        if self.books.is_empty() {
            return Err(Self::reject(stage, LibrisError::EmptyCollection(EntityKind::Book)));
        }

        *stage = BorrowStage::SelectingSubscriber;
        let names: Vec<String> = self.subscribers.iter().map(|s| s.full_name()).collect();
        let picked = match session.prompt_selection(EntityKind::Subscriber.singular(), &names) {
            Ok(n) => n,
            Err(e) => return Err(Self::reject(stage, e)),
        };
        let subscriber_idx = match to_index(picked, self.subscribers.len()) {
            Some(i) => i,
            None => {
                let err = LibrisError::InvalidSelection {
                    kind: EntityKind::Subscriber,
                    selection: picked,
                };
                return Err(Self::reject(stage, err));
            }
        };

        *stage = BorrowStage::SelectingBook;
        let titles: Vec<String> = self
            .books
            .iter()
            .map(|b| format!("{} by {}", b.title, b.author))
            .collect();
        let picked = match session.prompt_selection(EntityKind::Book.singular(), &titles) {
            Ok(n) => n,
            Err(e) => return Err(Self::reject(stage, e)),
        };
        let book_idx = match to_index(picked, self.books.len()) {
            Some(i) => i,
            None => {
                let err = LibrisError::InvalidSelection {
                    kind: EntityKind::Book,
                    selection: picked,
                };
                return Err(Self::reject(stage, err));
            }
        };

        let book = self.books[book_idx].clone();
        let subscriber = &mut self.subscribers[subscriber_idx];
        if subscriber.has_borrowed(&book) {
            let err = LibrisError::AlreadyBorrowed {
                subscriber: subscriber.full_name(),
                title: book.title,
            };
            return Err(Self::reject(stage, err));
        }

        subscriber.borrowed_books.push(book.clone());
        *stage = BorrowStage::Borrowed;
        Ok(Loan {
            subscriber: subscriber.full_name(),
            book,
        })
    }

    /// Every rejection passes through here so the stage it stopped at is logged.
    fn reject(stage: &mut BorrowStage, err: LibrisError) -> LibrisError {
        debug!(stopped_at = %stage, error = %err, "borrow workflow stopped");
        *stage = BorrowStage::Rejected;
        err
    }
}

/// Converts a 1-based selection into an index when it is within `[1, len]`.
fn to_index(selection: i64, len: usize) -> Option<usize> {
    usize::try_from(selection)
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
