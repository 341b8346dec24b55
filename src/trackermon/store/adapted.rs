//! Serde-friendly mirrors of the domain types.
//!
//! Every field is optional at the serde level so that a missing field produces
//! a descriptive [`TrackermonError::DataFormat`] instead of a generic parse error.
//! [`JsonSerializableCatalog::to_model`] validates records in file order and,
//! within a record, checks name, then status, then tags.

use crate::catalog::Catalog;
use crate::error::{Result, TrackermonError};
use crate::model::{Comment, Name, Show, Status, NAME_CONSTRAINTS, STATUS_CONSTRAINTS};
use crate::tags::{validate_tag_name, Tag, TagSet};
use serde::{Deserialize, Serialize};

pub const MISSING_FIELD_MESSAGE_FORMAT: &str = "Show's {} field is missing!";
pub const MESSAGE_DUPLICATE_SHOW: &str = "Shows list contains duplicate show(s).";

fn missing_field(field: &str) -> TrackermonError {
    TrackermonError::DataFormat(MISSING_FIELD_MESSAGE_FORMAT.replace("{}", field))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedTag {
    #[serde(rename = "tagName")]
    pub tag_name: Option<String>,
}

impl JsonAdaptedTag {
    pub fn from_model(tag: &Tag) -> Self {
        Self {
            tag_name: Some(tag.as_str().to_string()),
        }
    }

    pub fn to_model(&self) -> Result<Tag> {
        let raw = self.tag_name.as_deref().ok_or_else(|| {
            TrackermonError::DataFormat("Tag's tagName field is missing!".to_string())
        })?;
        validate_tag_name(raw).map_err(|e| TrackermonError::DataFormat(e.to_string()))?;
        Tag::new(raw).map_err(|e| TrackermonError::DataFormat(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedShow {
    pub name: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub tagged: Vec<JsonAdaptedTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl JsonAdaptedShow {
    pub fn from_model(show: &Show) -> Self {
        Self {
            name: Some(show.name().to_string()),
            status: Some(show.status().persisted_name().to_string()),
            tagged: show.tags().iter().map(JsonAdaptedTag::from_model).collect(),
            comment: (!show.comment().is_empty()).then(|| show.comment().to_string()),
        }
    }

    pub fn to_model(&self) -> Result<Show> {
        let raw_name = self
            .name
            .as_deref()
            .ok_or_else(|| missing_field("Name"))?
            .trim();
        if !Name::is_valid(raw_name) {
            return Err(TrackermonError::DataFormat(NAME_CONSTRAINTS.to_string()));
        }
        let name =
            Name::new(raw_name).map_err(|e| TrackermonError::DataFormat(e.to_string()))?;

        let raw_status = self.status.as_deref().ok_or_else(|| missing_field("Status"))?;
        let status: Status = raw_status
            .parse()
            .map_err(|_| TrackermonError::DataFormat(STATUS_CONSTRAINTS.to_string()))?;

        let tags = self
            .tagged
            .iter()
            .map(JsonAdaptedTag::to_model)
            .collect::<Result<TagSet>>()?;

        let comment = self.comment.as_deref().map(Comment::new).unwrap_or_default();

        Ok(Show::new(name, status, tags, comment))
    }
}

/// Top-level document written to the data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableCatalog {
    #[serde(default)]
    pub shows: Vec<JsonAdaptedShow>,
}

impl JsonSerializableCatalog {
    pub fn from_model(catalog: &Catalog) -> Self {
        Self {
            shows: catalog.iter().map(JsonAdaptedShow::from_model).collect(),
        }
    }

    pub fn to_model(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for adapted in &self.shows {
            let show = adapted.to_model()?;
            if catalog.contains(&show) {
                return Err(TrackermonError::DataFormat(MESSAGE_DUPLICATE_SHOW.to_string()));
            }
            catalog.add(show)?;
        }
        Ok(catalog)
    }

    /// Parses and validates a whole document.
    pub fn parse(content: &str) -> Result<Catalog> {
        let doc: JsonSerializableCatalog = serde_json::from_str(content)
            .map_err(|e| TrackermonError::DataFormat(e.to_string()))?;
        doc.to_model()
    }

    pub fn render(catalog: &Catalog) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::from_model(catalog))?)
    }
}
