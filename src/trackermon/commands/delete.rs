use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::session::Session;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the show identified by the index number used in the displayed show list.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: delete 1";

/// Removes the show at `index` in the *visible* list.
pub fn run(session: &mut Session, index: DisplayIndex) -> Result<CmdResult> {
    let target = session.resolve_index(index)?;
    let removed = session.catalog_mut().remove(&target)?;

    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success(format!("Deleted Show: {}", removed)));
    Ok(result.with_affected_shows(vec![removed]))
}
