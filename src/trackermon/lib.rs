//! # Trackermon Architecture
//!
//! Trackermon is a **UI-agnostic show-tracking library**: a catalog of the shows
//! you watch, each with a status, tags and a comment. The CLI is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot or REPL input, coloured output                  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session and the store                           │
//! │  - Saves after every successful mutating command            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over a Session (catalog + filtered view)  │
//! │  - Command factory: text → typed Command                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Indexes
//!
//! Users refer to shows by their 1-based position in the list currently on
//! screen, which is the catalog narrowed by the last `find`. `delete 1` after
//! `find naruto` deletes the first *match*, wherever it sits in the catalog.
//! See [`index`] and [`session`].
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns regular Rust types (`Result<CmdResult>`)
//! and never writes to stdout/stderr. Diagnostics go through `tracing`; the
//! binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command, plus the command factory
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Entity model (`Name`, `Status`, `Comment`, `Show`)
//! - [`tags`]: `Tag` values and the tag name rule
//! - [`catalog`]: Ordered, duplicate-free collection of shows
//! - [`view`]: Filter predicates and the filtered view
//! - [`session`]: Catalog and view owned together
//! - [`index`]: Display indexing (1-based, over the visible list)
//! - [`config`]: Configuration management
//! - [`sample`]: First-run catalog
//! - [`error`]: Error types
//! - `cli`: REPL, argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod sample;
pub mod session;
pub mod store;
pub mod tags;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
