//! Tag name validation for trackermon.
//!
//! Valid tags are one or more alphanumeric characters. Spaces, punctuation
//! and separators are rejected so a tag always reads as a single word.

/// Validates a tag name according to trackermon tag naming rules.
///
/// # Examples
/// ```
/// use trackermon::tags::validation::validate_tag_name;
///
/// assert!(validate_tag_name("Anime").is_ok());
/// assert!(validate_tag_name("2024").is_ok());
/// assert!(validate_tag_name("Isekai2").is_ok());
///
/// assert!(validate_tag_name("").is_err());
/// assert!(validate_tag_name("slice of life").is_err());
/// assert!(validate_tag_name("sci-fi").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> Result<(), TagValidationError> {
    if name.is_empty() {
        return Err(TagValidationError::Empty);
    }

    match name.chars().find(|ch| !ch.is_alphanumeric()) {
        Some(ch) => Err(TagValidationError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

/// Error type for tag name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag name is empty
    Empty,
    /// Tag name contains a non-alphanumeric character
    InvalidCharacter(char),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "Tag names should not be empty"),
            TagValidationError::InvalidCharacter(ch) => write!(
                f,
                "Tag names should be alphanumeric, found '{}'",
                ch
            ),
        }
    }
}

impl std::error::Error for TagValidationError {}
