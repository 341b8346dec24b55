use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrackermonError};
use crate::model::Show;
use crate::session::Session;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a show to Trackermon.\n\
    Parameters: n/NAME s/STATUS [t/TAG]... [c/COMMENT]\n\
    Example: add n/Attack on Titan s/watching t/Anime c/Season 4 is out";

/// Appends `show` to the catalog. With `reset_filter`, the view is reset to
/// match-all so the new entry is visible; otherwise the current filter stays.
pub fn run(session: &mut Session, show: Show, reset_filter: bool) -> Result<CmdResult> {
    if session.catalog().contains(&show) {
        return Err(TrackermonError::DuplicateShow);
    }
    session.catalog_mut().add(show.clone())?;
    if reset_filter {
        session.reset_predicate();
    }

    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success(format!("New show added: {}", show)));
    Ok(result.with_affected_shows(vec![show]))
}
