use crate::commands::{add, clear, delete, edit, exit, find, list};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use once_cell::sync::Lazy;

pub const COMMAND_WORD: &str = "help";

pub const USAGE: &str = "help: Shows program usage instructions.\n\
    Example: help";

/// Usage of every command, in the order they are usually learned.
pub static HELP_TEXT: Lazy<String> = Lazy::new(|| {
    [
        add::USAGE,
        list::USAGE,
        find::USAGE,
        edit::USAGE,
        delete::USAGE,
        clear::USAGE,
        USAGE,
        exit::USAGE,
    ]
    .join("\n\n")
});

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult {
        show_help: true,
        ..Default::default()
    };
    result.add_message(CmdMessage::info(HELP_TEXT.as_str()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_help_with_every_usage() {
        let result = run().unwrap();
        assert!(result.show_help);
        let text = result.feedback();
        for word in ["add:", "list:", "find:", "edit:", "delete:", "clear:", "help:", "exit:"] {
            assert!(text.contains(word), "missing usage for {}", word);
        }
    }
}
