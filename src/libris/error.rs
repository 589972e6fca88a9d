use crate::model::EntityKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("{} with this {} already exists: {name}", .kind.label(), .kind.identity())]
    DuplicateEntity { kind: EntityKind, name: String },

    #[error("{}", empty_collection_message(.0))]
    EmptyCollection(EntityKind),

    #[error("Invalid {} selection: {selection}", .kind.singular())]
    InvalidSelection { kind: EntityKind, selection: i64 },

    #[error("This book has already been borrowed by the subscriber ({subscriber}: {title}).")]
    AlreadyBorrowed { subscriber: String, title: String },

    #[error("Invalid input type. Please enter a valid number (got {0:?}).")]
    InputFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl LibrisError {
    /// Catalog rejections leave every collection untouched and never end the session.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LibrisError::DuplicateEntity { .. }
                | LibrisError::EmptyCollection(_)
                | LibrisError::InvalidSelection { .. }
                | LibrisError::AlreadyBorrowed { .. }
                | LibrisError::InputFormat(_)
        )
    }
}

fn empty_collection_message(kind: &EntityKind) -> &'static str {
    match kind {
        EntityKind::Book => "No books available to borrow.",
        EntityKind::Subscriber => "No subscribers available to borrow a book.",
    }
}

pub type Result<T> = std::result::Result<T, LibrisError>;
