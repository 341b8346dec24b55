//! Catalog used on first run, before any data file exists.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{Comment, Name, Show, Status};
use crate::tags::tag_set;

pub fn sample_shows() -> Result<Vec<Show>> {
    Ok(vec![
        Show::new(
            Name::new("Attack on Titan")?,
            Status::Watching,
            tag_set(["Anime"])?,
            Comment::empty(),
        ),
        Show::new(
            Name::new("Another")?,
            Status::Completed,
            tag_set(["Anime", "Horror"])?,
            Comment::empty(),
        ),
    ])
}

pub fn sample_catalog() -> Result<Catalog> {
    Catalog::from_shows(sample_shows()?)
}
