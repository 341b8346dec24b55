use crate::catalog::Catalog;
use crate::model::{Comment, Name, Show, Status};
use crate::session::Session;
use crate::tags::tag_set;

pub const DEFAULT_NAME: &str = "Track Me";
pub const DEFAULT_STATUS: Status = Status::Completed;
pub const DEFAULT_COMMENT: &str = "HELP";

/// Fluent builder for shows in tests. Panics on invalid input.
pub struct ShowBuilder {
    name: String,
    status: Status,
    tags: Vec<String>,
    comment: String,
}

impl Default for ShowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowBuilder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            status: DEFAULT_STATUS,
            tags: Vec::new(),
            comment: DEFAULT_COMMENT.to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    pub fn build(self) -> Show {
        Show::new(
            Name::new(&self.name).expect("valid name"),
            self.status,
            tag_set(&self.tags).expect("valid tags"),
            Comment::new(&self.comment),
        )
    }
}

/// `("Naruto", watching, {})`, `("Bleach", completed, {Anime})`.
pub fn naruto_bleach_session() -> Session {
    let catalog = Catalog::from_shows(vec![
        ShowBuilder::new()
            .name("Naruto")
            .status(Status::Watching)
            .comment("")
            .build(),
        ShowBuilder::new()
            .name("Bleach")
            .status(Status::Completed)
            .tags(&["Anime"])
            .comment("")
            .build(),
    ])
    .expect("distinct names");
    Session::new(catalog)
}
