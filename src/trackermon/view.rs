//! # Filtered View
//!
//! The list the user sees is the catalog narrowed by a [`ShowPredicate`].
//! [`FilteredView`] stores only the predicate; the visible sequence is derived
//! from the catalog on every read, so it can never go stale after a mutation
//! and there is nothing to invalidate.
//!
//! Display indexes (the `1` in `delete 1`) always refer to positions in the
//! visible sequence, never to positions in the underlying catalog.

use crate::catalog::Catalog;
use crate::model::Show;
use std::fmt;
use std::sync::Arc;

/// Predicate over shows.
#[derive(Clone, Default)]
pub enum ShowPredicate {
    /// Matches every show. The reset state of the view.
    #[default]
    All,
    /// Matches shows having any name word equal to any keyword, ignoring case.
    NameKeywords(Vec<String>),
    /// Arbitrary predicate supplied by the caller.
    Custom(Arc<dyn Fn(&Show) -> bool + Send + Sync>),
}

impl ShowPredicate {
    pub fn name_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ShowPredicate::NameKeywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn custom(f: impl Fn(&Show) -> bool + Send + Sync + 'static) -> Self {
        ShowPredicate::Custom(Arc::new(f))
    }

    pub fn matches(&self, show: &Show) -> bool {
        match self {
            ShowPredicate::All => true,
            ShowPredicate::NameKeywords(keywords) => keywords
                .iter()
                .any(|keyword| contains_word_ignore_case(show, keyword)),
            ShowPredicate::Custom(f) => f(show),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ShowPredicate::All)
    }
}

fn contains_word_ignore_case(show: &Show, keyword: &str) -> bool {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return false;
    }
    show.name()
        .words()
        .any(|word| word.to_lowercase() == keyword)
}

impl PartialEq for ShowPredicate {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ShowPredicate::All, ShowPredicate::All) => true,
            (ShowPredicate::NameKeywords(a), ShowPredicate::NameKeywords(b)) => a == b,
            (ShowPredicate::Custom(a), ShowPredicate::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ShowPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowPredicate::All => f.write_str("All"),
            ShowPredicate::NameKeywords(k) => f.debug_tuple("NameKeywords").field(k).finish(),
            ShowPredicate::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    predicate: ShowPredicate,
}

impl FilteredView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predicate(&self) -> &ShowPredicate {
        &self.predicate
    }

    pub fn set_predicate(&mut self, predicate: ShowPredicate) {
        self.predicate = predicate;
    }

    pub fn reset(&mut self) {
        self.predicate = ShowPredicate::All;
    }

    /// The catalog-order subsequence of shows matching the current predicate.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Show> {
        catalog
            .iter()
            .filter(|show| self.predicate.matches(show))
            .collect()
    }

    pub fn size(&self, catalog: &Catalog) -> usize {
        catalog
            .iter()
            .filter(|show| self.predicate.matches(show))
            .count()
    }
}
