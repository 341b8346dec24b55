//! # Command Layer
//!
//! This module contains the **core business logic** of trackermon. Each command
//! lives in its own submodule as a plain function over a [`Session`]; the
//! [`Command`] enum is the closed set of typed commands a client can build and
//! execute.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate their targets against the *visible* list, never the raw catalog
//! - Mutate the [`Catalog`](crate::catalog::Catalog) and/or the view predicate
//! - Return a structured [`CmdResult`] with messages and the shows they touched
//!
//! ## What Commands Do NOT Do
//!
//! - **Persistence**: saving after a mutation is the API's job (see [`crate::api`])
//! - **Argument parsing**: see [`parser`] for the factory that builds commands
//! - **I/O**: no stdout, stderr, or terminal concerns
//!
//! ## All or Nothing
//!
//! A command that fails leaves the session exactly as it found it. Every check
//! (index range, duplicate names, empty edits) happens before the first write.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a new show
//! - [`delete`]: Remove a show by display index
//! - [`edit`]: Replace fields of a show by display index
//! - [`find`]: Narrow the view by name keywords
//! - [`list`]: Reset the view to every show
//! - [`clear`]: Empty the catalog
//! - [`help`]: Usage text
//! - [`exit`]: End the session
//! - [`parser`]: Command factory (`word` + argument payload → [`Command`])

use crate::error::Result;
use crate::index::{DisplayIndex, DisplayShow};
use crate::model::Show;
use crate::session::Session;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod parser;

pub use edit::ShowPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a successful command.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Shows created, removed or replaced by the command (post-edit values for edits).
    pub affected_shows: Vec<Show>,
    /// The visible list after the command ran, numbered.
    pub listed_shows: Vec<DisplayShow>,
    pub messages: Vec<CmdMessage>,
    /// The client should present the usage text.
    pub show_help: bool,
    /// The client should end the session.
    pub exit: bool,
    /// The catalog changed and must be persisted.
    pub modified: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_shows(mut self, shows: Vec<Show>) -> Self {
        self.affected_shows = shows;
        self
    }

    pub fn with_listed_shows(mut self, shows: Vec<DisplayShow>) -> Self {
        self.listed_shows = shows;
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }

    /// All message contents, one per line.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Knobs that change command behaviour without changing the command itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// When set, a successful `add` resets the view to match-all.
    pub add_resets_filter: bool,
}

/// The closed set of commands a client may execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Show),
    Delete(DisplayIndex),
    Edit { index: DisplayIndex, patch: ShowPatch },
    Find(Vec<String>),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::Edit { .. } => edit::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::List => list::COMMAND_WORD,
            Command::Clear => clear::COMMAND_WORD,
            Command::Help => help::COMMAND_WORD,
            Command::Exit => exit::COMMAND_WORD,
        }
    }

    /// True for commands that may change the catalog (and so trigger a save).
    pub fn mutates_catalog(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Delete(_) | Command::Edit { .. } | Command::Clear
        )
    }

    pub fn execute(&self, session: &mut Session, options: &CommandOptions) -> Result<CmdResult> {
        tracing::debug!(command = self.word(), "executing command");
        let result = match self {
            Command::Add(show) => add::run(session, show.clone(), options.add_resets_filter),
            Command::Delete(index) => delete::run(session, *index),
            Command::Edit { index, patch } => edit::run(session, *index, patch),
            Command::Find(keywords) => find::run(session, keywords),
            Command::List => list::run(session),
            Command::Clear => clear::run(session),
            Command::Help => help::run(),
            Command::Exit => exit::run(),
        }?;
        Ok(result.with_listed_shows(session.indexed_visible()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackermonError;
    use crate::model::Status;
    use crate::test_utils::{naruto_bleach_session, ShowBuilder};

    #[test]
    fn execute_fills_listed_shows_from_view() {
        let mut session = naruto_bleach_session();
        let result = Command::Find(vec!["bleach".into()])
            .execute(&mut session, &CommandOptions::default())
            .unwrap();
        assert_eq!(result.listed_shows.len(), 1);
        assert_eq!(result.listed_shows[0].show.name().as_str(), "Bleach");
    }

    #[test]
    fn mutating_commands_are_flagged() {
        let show = ShowBuilder::new().build();
        let idx = DisplayIndex::new(1).unwrap();
        assert!(Command::Add(show).mutates_catalog());
        assert!(Command::Delete(idx).mutates_catalog());
        assert!(Command::Edit {
            index: idx,
            patch: ShowPatch::default()
        }
        .mutates_catalog());
        assert!(Command::Clear.mutates_catalog());
        assert!(!Command::Find(vec!["x".into()]).mutates_catalog());
        assert!(!Command::List.mutates_catalog());
        assert!(!Command::Help.mutates_catalog());
        assert!(!Command::Exit.mutates_catalog());
    }

    #[test]
    fn failed_command_leaves_session_untouched() {
        let mut session = naruto_bleach_session();
        session.set_predicate(crate::view::ShowPredicate::name_keywords(["naruto"]));
        let before = session.catalog().clone();

        let dup = ShowBuilder::new()
            .name("bleach")
            .status(Status::Dropped)
            .build();
        let err = Command::Add(dup)
            .execute(&mut session, &CommandOptions { add_resets_filter: true })
            .unwrap_err();

        assert!(matches!(err, TrackermonError::DuplicateShow));
        assert_eq!(session.catalog(), &before);
        assert_eq!(session.visible_len(), 1);
    }

    #[test]
    fn feedback_joins_messages() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("one"));
        result.add_message(CmdMessage::info("two"));
        assert_eq!(result.feedback(), "one\ntwo");
    }
}
