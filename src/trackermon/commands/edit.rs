use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrackermonError};
use crate::index::DisplayIndex;
use crate::model::{Comment, Name, Show, Status};
use crate::session::Session;
use crate::tags::TagSet;

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the details of the show identified by the index number used in the displayed show list. \
    Existing values will be overwritten by the input values.\n\
    Parameters: INDEX (must be a positive integer) [n/NAME] [s/STATUS] [t/TAG]... [c/COMMENT]\n\
    Example: edit 1 n/Attack on Titan s/watching";

/// Replacement values for an edit. Absent fields keep the show's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowPatch {
    pub name: Option<Name>,
    pub status: Option<Status>,
    /// `Some(empty)` clears every tag.
    pub tags: Option<TagSet>,
    pub comment: Option<Comment>,
}

impl ShowPatch {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.status.is_some() || self.tags.is_some() || self.comment.is_some()
    }

    /// Builds a new show from `show` with this patch laid over it.
    pub fn apply(&self, show: &Show) -> Show {
        Show::new(
            self.name.clone().unwrap_or_else(|| show.name().clone()),
            self.status.unwrap_or(show.status()),
            self.tags.clone().unwrap_or_else(|| show.tags().clone()),
            self.comment.clone().unwrap_or_else(|| show.comment().clone()),
        )
    }
}

/// Replaces the show at `index` in the visible list, then resets the view so
/// the whole catalog is visible again.
pub fn run(session: &mut Session, index: DisplayIndex, patch: &ShowPatch) -> Result<CmdResult> {
    if !patch.is_any_field_edited() {
        return Err(TrackermonError::NoFieldEdited);
    }

    let target = session.resolve_index(index)?;
    let edited = patch.apply(&target);

    if !target.is_same_show(&edited) && session.catalog().contains(&edited) {
        return Err(TrackermonError::DuplicateShow);
    }

    session.catalog_mut().replace(&target, edited.clone())?;
    session.reset_predicate();

    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success(format!("Edited Show: {}", edited)));
    Ok(result.with_affected_shows(vec![edited]))
}
