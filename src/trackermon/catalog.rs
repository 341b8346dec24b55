//! # Catalog Store
//!
//! [`Catalog`] is the authoritative, ordered list of shows. It enforces one
//! invariant: no two entries are ever the "same show" (see
//! [`Show::is_same_show`]). Every mutating operation checks the invariant
//! before touching the list, so a failed call leaves the catalog exactly as
//! it was.
//!
//! Entries keep insertion order; `replace` keeps the replaced entry's position.
//!
//! Removal and replacement locate their target by full equality. Callers that
//! start from a display index resolve it to a concrete [`Show`] first (see
//! [`crate::session::Session::resolve_index`]), which makes the lookup unambiguous.

use crate::error::{Result, TrackermonError};
use crate::model::Show;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    shows: Vec<Show>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from an ordered list, refusing duplicates.
    pub fn from_shows(shows: Vec<Show>) -> Result<Self> {
        let mut catalog = Self::new();
        for show in shows {
            catalog.add(show)?;
        }
        Ok(catalog)
    }

    /// True if a show with the same identity is present.
    pub fn contains(&self, show: &Show) -> bool {
        self.shows.iter().any(|existing| existing.is_same_show(show))
    }

    /// Appends `show` at the end of the catalog.
    pub fn add(&mut self, show: Show) -> Result<()> {
        if self.contains(&show) {
            return Err(TrackermonError::DuplicateShow);
        }
        self.shows.push(show);
        Ok(())
    }

    /// Removes the entry equal to `show` and returns it.
    pub fn remove(&mut self, show: &Show) -> Result<Show> {
        let pos = self.position_of(show)?;
        Ok(self.shows.remove(pos))
    }

    /// Substitutes `old` with `new` in place.
    ///
    /// Renaming to a name already held by a *different* entry fails with
    /// [`TrackermonError::DuplicateShow`]; keeping the same identity is always allowed.
    pub fn replace(&mut self, old: &Show, new: Show) -> Result<()> {
        let pos = self.position_of(old)?;
        let collides = self
            .shows
            .iter()
            .enumerate()
            .any(|(i, existing)| i != pos && existing.is_same_show(&new));
        if collides {
            return Err(TrackermonError::DuplicateShow);
        }
        self.shows[pos] = new;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.shows.clear();
    }

    pub fn all(&self) -> &[Show] {
        &self.shows
    }

    pub fn iter(&self) -> impl Iterator<Item = &Show> {
        self.shows.iter()
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    fn position_of(&self, show: &Show) -> Result<usize> {
        self.shows
            .iter()
            .position(|existing| existing == show)
            .ok_or_else(|| TrackermonError::ShowNotFound(show.name().to_string()))
    }
}
