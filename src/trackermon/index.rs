//! # Display Indexes
//!
//! Shows have no stable ID of their own; the user refers to them by their
//! 1-based position in the list currently on screen. That list is the
//! [`FilteredView`](crate::view::FilteredView), not the catalog, so after
//! `find naruto` the command `delete 1` targets the first *match*, wherever it
//! sits in the full catalog.
//!
//! - [`DisplayIndex`]: a parsed, 1-based position
//! - [`DisplayShow`]: a show paired with the index it was displayed under
//! - [`index_shows`]: numbers a visible sequence
//!
//! **Developer Note**: never number shows by enumerating the catalog directly.
//! Resolve indexes through [`Session::resolve_index`](crate::session::Session::resolve_index).

use crate::error::{Result, TrackermonError};
use crate::model::Show;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Returns `None` for zero.
    pub fn new(one_based: usize) -> Option<Self> {
        (one_based > 0).then_some(Self(one_based))
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = TrackermonError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(DisplayIndex::new)
            .ok_or_else(|| {
                TrackermonError::Validation("Index is not a non-zero unsigned integer.".to_string())
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayShow {
    pub show: Show,
    pub index: DisplayIndex,
}

/// Numbers `shows` from 1 in the order given.
pub fn index_shows<'a, I>(shows: I) -> Vec<DisplayShow>
where
    I: IntoIterator<Item = &'a Show>,
{
    shows
        .into_iter()
        .enumerate()
        .map(|(i, show)| DisplayShow {
            show: show.clone(),
            index: DisplayIndex(i + 1),
        })
        .collect()
}
