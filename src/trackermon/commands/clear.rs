use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;

pub const COMMAND_WORD: &str = "clear";

pub const USAGE: &str = "clear: Removes every show from Trackermon.\n\
    Example: clear";

/// Empties the catalog. The filter predicate is left alone; there is
/// nothing left for it to hide.
pub fn run(session: &mut Session) -> Result<CmdResult> {
    let removed = session.catalog().all().to_vec();
    session.catalog_mut().clear();

    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success("Trackermon has been cleared!"));
    Ok(result.with_affected_shows(removed))
}
