//! Tag support for trackermon.
//!
//! Tags are short labels attached to a show ("Anime", "Horror"). A show holds
//! a [`TagSet`]: duplicates collapse and iteration order is the tags' natural
//! ordering, so tag sets compare equal regardless of the order they were given in.
//!
//! ## Tag Naming Rules
//!
//! See [`validation`] for the full rules. In summary: one or more alphanumeric
//! characters, nothing else.

pub mod validation;

use crate::error::{Result, TrackermonError};
use std::collections::BTreeSet;
use std::fmt;

pub use validation::{validate_tag_name, TagValidationError};

/// A validated tag label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        validate_tag_name(name).map_err(|e| TrackermonError::Validation(e.to_string()))?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// The immutable set of tags carried by a show.
pub type TagSet = BTreeSet<Tag>;

/// Builds a tag set from raw names, failing on the first invalid one.
pub fn tag_set<I, S>(names: I) -> Result<TagSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(Tag::new).collect()
}
