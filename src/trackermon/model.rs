//! # Domain Model
//!
//! The value types that make up a catalog entry: [`Name`], [`Status`],
//! [`Comment`], and the aggregate [`Show`].
//!
//! Every type validates on construction and has no setters. "Editing" a show
//! means building a new [`Show`] from the old one's fields.
//!
//! ## Two Kinds of Equality
//!
//! - **Full equality** (`==`): all four fields match.
//! - **Same show** ([`Show::is_same_show`]): only the names match, compared
//!   case-insensitively. This is the identity key the catalog uses to refuse
//!   duplicates, so "naruto" and "Naruto" can never coexist.
//!
//! ## Format Rules
//!
//! | Type | Rule |
//! |------|------|
//! | `Name` | non-blank; first character alphanumeric, the rest alphanumeric or space |
//! | `Status` | one of `completed`, `watching`, `planning`, `dropped` (any case) |
//! | `Comment` | any text |
//! | `Tag` | see [`crate::tags`] |

use crate::error::{Result, TrackermonError};
use crate::tags::{Tag, TagSet};
use std::fmt;
use std::str::FromStr;

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

pub const STATUS_CONSTRAINTS: &str =
    "Status should be one of: completed, watching, planning, dropped";

/// The title of a show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let trimmed = raw.as_ref().trim();
        if !Self::is_valid(trimmed) {
            return Err(TrackermonError::Validation(NAME_CONSTRAINTS.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_valid(candidate: &str) -> bool {
        let mut chars = candidate.chars();
        match chars.next() {
            Some(first) if first.is_alphanumeric() => {
                chars.all(|ch| ch.is_alphanumeric() || ch == ' ')
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalized form used for "same show" comparisons.
    pub fn identity_key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Whitespace-separated words of the name, as typed.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Completed,
    Watching,
    Planning,
    Dropped,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Completed,
        Status::Watching,
        Status::Planning,
        Status::Dropped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::Watching => "watching",
            Status::Planning => "planning",
            Status::Dropped => "dropped",
        }
    }

    /// Upper-case form written to the data file.
    pub fn persisted_name(&self) -> &'static str {
        match self {
            Status::Completed => "COMPLETED",
            Status::Watching => "WATCHING",
            Status::Planning => "PLANNING",
            Status::Dropped => "DROPPED",
        }
    }

    /// Capitalized form for detail views, e.g. `Watching`.
    pub fn title_case(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl FromStr for Status {
    type Err = TrackermonError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackermonError::Validation(STATUS_CONSTRAINTS.to_string()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text note attached to a show. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Comment(String);

impl Comment {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked show. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    name: Name,
    status: Status,
    tags: TagSet,
    comment: Comment,
}

impl Show {
    pub fn new(name: Name, status: Status, tags: TagSet, comment: Comment) -> Self {
        Self {
            name,
            status,
            tags,
            comment,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    /// Identity comparison: true when both shows carry the same name,
    /// ignoring case. Weaker than `==`.
    pub fn is_same_show(&self, other: &Show) -> bool {
        self.name.identity_key() == other.name.identity_key()
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Status: {}", self.name, self.status)?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        if !self.comment.is_empty() {
            write!(f, "; Comment: {}", self.comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::tag_set;

    fn show(name: &str, status: Status, tags: &[&str]) -> Show {
        Show::new(
            Name::new(name).unwrap(),
            status,
            tag_set(tags.iter().copied()).unwrap(),
            Comment::empty(),
        )
    }

    #[test]
    fn test_name_valid() {
        assert!(Name::new("Naruto").is_ok());
        assert!(Name::new("Attack on Titan").is_ok());
        assert!(Name::new("86").is_ok());
        assert!(Name::new("Mob Psycho 100").is_ok());
    }

    #[test]
    fn test_name_trims_surrounding_whitespace() {
        assert_eq!(Name::new("  Bleach  ").unwrap().as_str(), "Bleach");
    }

    #[test]
    fn test_name_invalid() {
        for bad in ["", "   ", " ", "Re:Zero", "Steins;Gate", "-Naruto", "Naruto!"] {
            let err = Name::new(bad).unwrap_err();
            assert!(
                matches!(err, TrackermonError::Validation(ref m) if m == NAME_CONSTRAINTS),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!("watching".parse::<Status>().unwrap(), Status::Watching);
        assert_eq!("WATCHING".parse::<Status>().unwrap(), Status::Watching);
        assert_eq!(" Completed ".parse::<Status>().unwrap(), Status::Completed);
        assert_eq!("pLaNnInG".parse::<Status>().unwrap(), Status::Planning);
        assert_eq!("dropped".parse::<Status>().unwrap(), Status::Dropped);
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        for bad in ["", "watched", "on hold", "complete"] {
            let err = bad.parse::<Status>().unwrap_err();
            assert!(matches!(err, TrackermonError::Validation(ref m) if m == STATUS_CONSTRAINTS));
        }
    }

    #[test]
    fn test_status_forms() {
        assert_eq!(Status::Watching.to_string(), "watching");
        assert_eq!(Status::Watching.persisted_name(), "WATCHING");
        assert_eq!(Status::Planning.title_case(), "Planning");
    }

    #[test]
    fn test_comment_may_be_empty() {
        assert!(Comment::new("").is_empty());
        assert_eq!(Comment::new(" great fights ").as_str(), "great fights");
    }

    #[test]
    fn test_same_show_ignores_case_and_other_fields() {
        let a = show("Naruto", Status::Watching, &[]);
        let b = show("naruto", Status::Completed, &["Anime"]);
        assert!(a.is_same_show(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_full_equality_compares_all_fields() {
        let a = show("Bleach", Status::Completed, &["Anime"]);
        let b = show("Bleach", Status::Completed, &["Anime"]);
        let c = Show::new(
            Name::new("Bleach").unwrap(),
            Status::Completed,
            tag_set(["Anime"]).unwrap(),
            Comment::new("rewatch"),
        );
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.is_same_show(&c));
    }

    #[test]
    fn test_different_names_are_different_shows() {
        let a = show("Naruto", Status::Watching, &[]);
        let b = show("Naruto Shippuden", Status::Watching, &[]);
        assert!(!a.is_same_show(&b));
    }

    #[test]
    fn test_show_display() {
        let plain = show("Naruto", Status::Watching, &[]);
        assert_eq!(plain.to_string(), "Naruto; Status: watching");

        let full = Show::new(
            Name::new("Another").unwrap(),
            Status::Completed,
            tag_set(["Horror", "Anime"]).unwrap(),
            Comment::new("creepy"),
        );
        assert_eq!(
            full.to_string(),
            "Another; Status: completed; Tags: [Anime][Horror]; Comment: creepy"
        );
    }
}
