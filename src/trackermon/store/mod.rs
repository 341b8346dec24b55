//! # Storage Layer
//!
//! This module defines the persistence abstraction for trackermon. The
//! [`DataStore`] trait lets the API save and reload a whole [`Catalog`]
//! without knowing where it lives.
//!
//! ## Whole-Catalog Semantics
//!
//! Load and save always move the entire catalog. There are no partial reads or
//! incremental writes:
//! - **Load** validates every record; one bad record fails the whole load with
//!   a single [`TrackermonError::DataFormat`](crate::error::TrackermonError::DataFormat).
//!   The caller decides what to fall back to.
//! - **Save** replaces the previous contents atomically: either the new file is
//!   fully written or the old one is left untouched.
//!
//! ## Implementations
//!
//! - [`json::JsonFileStore`]: Production store, a single JSON file.
//! - [`memory::InMemoryStore`]: For testing without filesystem I/O. It still
//!   round-trips through the JSON representation, so load validation runs.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "shows": [
//!     { "name": "Naruto", "status": "WATCHING", "tagged": [ { "tagName": "Anime" } ], "comment": "believe it" }
//!   ]
//! }
//! ```
//!
//! `comment` is omitted when empty; `tagged` may be omitted when there are no tags.
//! See [`adapted`] for the record types and their validation.

use crate::catalog::Catalog;
use crate::error::Result;

pub mod adapted;
pub mod json;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait DataStore {
    /// Load the persisted catalog. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Catalog>>;

    /// Persist the whole catalog, replacing whatever was stored before.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;

    /// Human-readable location of the data, for messages and logs.
    fn describe(&self) -> String;
}
