use crate::catalog::{BorrowTally, Loan};
use crate::config::LibrisConfig;
use std::path::PathBuf;

pub mod add;
pub mod borrow;
pub mod config;
pub mod list;
pub mod sort;
pub mod storage;

/// Names of the files each collection is persisted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub books: String,
    pub subscribers: String,
}

impl DataFiles {
    pub fn from_config(config: &LibrisConfig) -> Self {
        Self {
            books: config.books_file.clone(),
            subscribers: config.subscribers_file.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LibrisPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Title printed above `lines`
    pub heading: Option<String>,
    pub lines: Vec<String>,
    pub tallies: Vec<BorrowTally>,
    pub loan: Option<Loan>,
    pub config: Option<LibrisConfig>,
    pub messages: Vec<CmdMessage>,
    /// The in-memory catalog differs from what was loaded
    pub changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, heading: &str, lines: impl IntoIterator<Item = String>) -> Self {
        self.heading = Some(heading.to_string());
        self.lines = lines.into_iter().collect();
        self
    }

    pub fn with_tallies(mut self, tallies: Vec<BorrowTally>) -> Self {
        self.tallies = tallies;
        self
    }

    pub fn with_loan(mut self, loan: Loan) -> Self {
        self.loan = Some(loan);
        self
    }

    pub fn with_config(mut self, config: LibrisConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn changed(mut self) -> Self {
        self.changed = true;
        self
    }
}
