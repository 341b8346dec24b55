use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "exit";

pub const USAGE: &str = "exit: Exits Trackermon.\n\
    Example: exit";

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult {
        exit: true,
        ..Default::default()
    };
    result.add_message(CmdMessage::info("Exiting Trackermon as requested ..."));
    Ok(result)
}
