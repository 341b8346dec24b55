//! # Session State
//!
//! A [`Session`] is everything that persists between two commands: the
//! [`Catalog`] and the [`FilteredView`]'s current predicate. Commands receive a
//! `&mut Session` and nothing else.
//!
//! The session owns both pieces so that index resolution always reads the
//! view against the catalog it belongs to.

use crate::catalog::Catalog;
use crate::error::{Result, TrackermonError};
use crate::index::{index_shows, DisplayIndex, DisplayShow};
use crate::model::Show;
use crate::view::{FilteredView, ShowPredicate};

#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    view: FilteredView,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            view: FilteredView::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn predicate(&self) -> &ShowPredicate {
        self.view.predicate()
    }

    pub fn set_predicate(&mut self, predicate: ShowPredicate) {
        tracing::debug!(?predicate, "filter predicate replaced");
        self.view.set_predicate(predicate);
    }

    pub fn reset_predicate(&mut self) {
        self.set_predicate(ShowPredicate::All);
    }

    /// Shows currently on screen, in catalog order.
    pub fn visible(&self) -> Vec<&Show> {
        self.view.visible(&self.catalog)
    }

    pub fn visible_len(&self) -> usize {
        self.view.size(&self.catalog)
    }

    /// The visible shows numbered as the user sees them.
    pub fn indexed_visible(&self) -> Vec<DisplayShow> {
        index_shows(self.visible())
    }

    /// Maps a display index to a snapshot of the show it points at.
    pub fn resolve_index(&self, index: DisplayIndex) -> Result<Show> {
        self.view
            .visible(&self.catalog)
            .get(index.zero_based())
            .map(|show| (*show).clone())
            .ok_or(TrackermonError::InvalidIndex(index.one_based()))
    }
}
