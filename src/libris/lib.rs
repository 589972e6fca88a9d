//! # Libris Architecture
//!
//! Libris keeps a small library catalog: books, subscribers, and which
//! subscriber has borrowed which book. The catalog logic is a library; the
//! `libris` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, runs the menu shell    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the catalog, the store and the configuration        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) over Catalog (catalog.rs)    │
//! │  - Duplicate checks, sorting, grouping, borrowing           │
//! │  - Questions go through the Session trait (session.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load/save/clear named collection files  │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors Are Values
//!
//! A rejected operation (duplicate, empty collection, bad selection, book
//! already borrowed, malformed input) comes back as a [`error::LibrisError`]
//! with the catalog untouched. The caller decides what to tell the user; the
//! menu shell prints it and keeps going.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`catalog`]: In-memory collections and the borrow workflow
//! - [`commands`]: One function per user-facing operation
//! - [`session`]: Interactive prompts (terminal or scripted)
//! - [`store`]: Persistence gateway
//! - [`model`]: `Book`, `Subscriber`, `Library`
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and startup
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod session;
pub mod store;
