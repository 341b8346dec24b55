//! # Command Factory
//!
//! Turns a command word plus its argument payload into a typed [`Command`].
//!
//! Field arguments are introduced by prefixes, each of which must start the
//! payload or follow whitespace:
//!
//! | Prefix | Field | Repeatable |
//! |--------|-------|------------|
//! | `n/` | name | last wins |
//! | `s/` | status | last wins |
//! | `t/` | tag | yes, each adds a tag |
//! | `c/` | comment | last wins |
//!
//! Text before the first prefix is the *preamble* (the index for `edit`).
//!
//! Failures come in three flavours:
//! - an unrecognised word: [`TrackermonError::UnknownCommand`]
//! - a malformed payload (missing fields, bad index): [`TrackermonError::ArgumentFormat`]
//!   carrying the command's usage text
//! - a well-formed payload with an invalid field value: [`TrackermonError::Validation`]

use crate::commands::{add, clear, delete, edit, exit, find, help, list, Command, ShowPatch};
use crate::error::{Result, TrackermonError};
use crate::index::DisplayIndex;
use crate::model::{Comment, Name, Show, Status};
use crate::tags::{tag_set, TagSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    Name,
    Status,
    Tag,
    Comment,
}

impl Prefix {
    const ALL: [Prefix; 4] = [Prefix::Name, Prefix::Status, Prefix::Tag, Prefix::Comment];

    fn as_str(&self) -> &'static str {
        match self {
            Prefix::Name => "n/",
            Prefix::Status => "s/",
            Prefix::Tag => "t/",
            Prefix::Comment => "c/",
        }
    }
}

/// A tokenized argument payload.
#[derive(Debug, Default)]
struct ArgMap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgMap {
    fn tokenize(args: &str) -> Self {
        let mut marks: Vec<(usize, Prefix)> = Vec::new();
        let mut after_space = true;
        for (i, ch) in args.char_indices() {
            if after_space {
                if let Some(prefix) = Prefix::ALL
                    .iter()
                    .find(|p| args[i..].starts_with(p.as_str()))
                {
                    marks.push((i, *prefix));
                }
            }
            after_space = ch.is_whitespace();
        }

        let preamble_end = marks.first().map(|(i, _)| *i).unwrap_or(args.len());
        let values = marks
            .iter()
            .enumerate()
            .map(|(k, (start, prefix))| {
                let end = marks.get(k + 1).map(|(i, _)| *i).unwrap_or(args.len());
                let value = &args[start + prefix.as_str().len()..end];
                (*prefix, value.trim().to_string())
            })
            .collect();

        Self {
            preamble: args[..preamble_end].trim().to_string(),
            values,
        }
    }

    fn last(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    fn all(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

fn format_error(usage: &str) -> TrackermonError {
    TrackermonError::ArgumentFormat {
        usage: usage.to_string(),
    }
}

impl Command {
    /// Builds a command from its word and raw argument payload.
    pub fn build(word: &str, args: &str) -> Result<Command> {
        match word {
            add::COMMAND_WORD => parse_add(args),
            delete::COMMAND_WORD => parse_delete(args),
            edit::COMMAND_WORD => parse_edit(args),
            find::COMMAND_WORD => parse_find(args),
            list::COMMAND_WORD => Ok(Command::List),
            clear::COMMAND_WORD => Ok(Command::Clear),
            help::COMMAND_WORD => Ok(Command::Help),
            exit::COMMAND_WORD => Ok(Command::Exit),
            other => Err(TrackermonError::UnknownCommand(other.to_string())),
        }
    }
}

/// Splits a full input line into word and payload, then builds the command.
pub fn parse_line(input: &str) -> Result<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format_error(help::USAGE));
    }
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };
    Command::build(word, args)
}

fn parse_add(args: &str) -> Result<Command> {
    let map = ArgMap::tokenize(args);
    let (name, status) = match (map.last(Prefix::Name), map.last(Prefix::Status)) {
        (Some(name), Some(status)) if map.preamble.is_empty() => (name, status),
        _ => return Err(format_error(add::USAGE)),
    };

    let name = Name::new(name)?;
    let status: Status = status.parse()?;
    let tags = tag_set(map.all(Prefix::Tag))?;
    let comment = map.last(Prefix::Comment).map(Comment::new).unwrap_or_default();

    Ok(Command::Add(Show::new(name, status, tags, comment)))
}

fn parse_delete(args: &str) -> Result<Command> {
    let index: DisplayIndex = args.parse().map_err(|_| format_error(delete::USAGE))?;
    Ok(Command::Delete(index))
}

fn parse_edit(args: &str) -> Result<Command> {
    let map = ArgMap::tokenize(args);
    let index: DisplayIndex = map
        .preamble
        .parse()
        .map_err(|_| format_error(edit::USAGE))?;

    let patch = ShowPatch {
        name: map.last(Prefix::Name).map(Name::new).transpose()?,
        status: map
            .last(Prefix::Status)
            .map(|s| s.parse::<Status>())
            .transpose()?,
        tags: parse_tags_for_edit(&map.all(Prefix::Tag))?,
        comment: map.last(Prefix::Comment).map(Comment::new),
    };

    Ok(Command::Edit { index, patch })
}

/// No `t/` leaves tags alone; a single empty `t/` clears them.
fn parse_tags_for_edit(raw: &[&str]) -> Result<Option<TagSet>> {
    match raw {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(TagSet::new())),
        many => tag_set(many.iter().copied()).map(Some),
    }
}

fn parse_find(args: &str) -> Result<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(format_error(find::USAGE));
    }
    Ok(Command::Find(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::STATUS_CONSTRAINTS;

    fn usage_of(err: TrackermonError) -> String {
        match err {
            TrackermonError::ArgumentFormat { usage } => usage,
            other => panic!("expected ArgumentFormat, got {:?}", other),
        }
    }

    #[test]
    fn tokenize_splits_on_prefixes() {
        let map = ArgMap::tokenize("1 n/Attack on Titan s/watching t/Anime t/Action");
        assert_eq!(map.preamble, "1");
        assert_eq!(map.last(Prefix::Name), Some("Attack on Titan"));
        assert_eq!(map.last(Prefix::Status), Some("watching"));
        assert_eq!(map.all(Prefix::Tag), vec!["Anime", "Action"]);
        assert_eq!(map.last(Prefix::Comment), None);
    }

    #[test]
    fn tokenize_ignores_prefix_inside_words() {
        let map = ArgMap::tokenize("n/Fate s/watching c/has n/o prefix in/side");
        assert_eq!(map.last(Prefix::Name), Some("o prefix in/side"));
        assert_eq!(map.last(Prefix::Comment), Some("has"));
    }

    #[test]
    fn builds_add() {
        let cmd = parse_line("add n/Naruto s/WATCHING t/Anime c/believe it").unwrap();
        match cmd {
            Command::Add(show) => {
                assert_eq!(show.name().as_str(), "Naruto");
                assert_eq!(show.status(), Status::Watching);
                assert_eq!(show.tags().len(), 1);
                assert_eq!(show.comment().as_str(), "believe it");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_requires_name_and_status() {
        let err = Command::build("add", "n/Naruto").unwrap_err();
        assert_eq!(usage_of(err), add::USAGE);
        let err = Command::build("add", "s/watching").unwrap_err();
        assert_eq!(usage_of(err), add::USAGE);
        let err = Command::build("add", "junk n/Naruto s/watching").unwrap_err();
        assert_eq!(usage_of(err), add::USAGE);
    }

    #[test]
    fn add_reports_invalid_field_values() {
        let err = Command::build("add", "n/Naruto s/binged").unwrap_err();
        assert!(matches!(err, TrackermonError::Validation(ref m) if m == STATUS_CONSTRAINTS));
        let err = Command::build("add", "n/Naruto! s/watching").unwrap_err();
        assert!(matches!(err, TrackermonError::Validation(_)));
        let err = Command::build("add", "n/Naruto s/watching t/sci-fi").unwrap_err();
        assert!(matches!(err, TrackermonError::Validation(_)));
    }

    #[test]
    fn builds_delete() {
        assert_eq!(
            Command::build("delete", " 2 ").unwrap(),
            Command::Delete(DisplayIndex::new(2).unwrap())
        );
        let err = Command::build("delete", "0").unwrap_err();
        assert_eq!(usage_of(err), delete::USAGE);
        let err = Command::build("delete", "").unwrap_err();
        assert_eq!(usage_of(err), delete::USAGE);
    }

    #[test]
    fn builds_edit_with_partial_patch() {
        let cmd = Command::build("edit", "1 s/dropped c/").unwrap();
        assert_eq!(
            cmd,
            Command::Edit {
                index: DisplayIndex::new(1).unwrap(),
                patch: ShowPatch {
                    status: Some(Status::Dropped),
                    comment: Some(Comment::empty()),
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn edit_with_empty_tag_clears_tags() {
        match Command::build("edit", "3 t/").unwrap() {
            Command::Edit { patch, .. } => assert_eq!(patch.tags, Some(TagSet::new())),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn edit_without_fields_still_builds() {
        match Command::build("edit", "1").unwrap() {
            Command::Edit { patch, .. } => assert!(!patch.is_any_field_edited()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn edit_requires_index() {
        let err = Command::build("edit", "n/Naruto").unwrap_err();
        assert_eq!(usage_of(err), edit::USAGE);
        let err = Command::build("edit", "first n/Naruto").unwrap_err();
        assert_eq!(usage_of(err), edit::USAGE);
    }

    #[test]
    fn builds_find() {
        assert_eq!(
            Command::build("find", "  hero   academia ").unwrap(),
            Command::Find(vec!["hero".into(), "academia".into()])
        );
        let err = Command::build("find", "   ").unwrap_err();
        assert_eq!(usage_of(err), find::USAGE);
    }

    #[test]
    fn builds_argumentless_commands() {
        assert_eq!(parse_line(list::COMMAND_WORD).unwrap(), Command::List);
        assert_eq!(parse_line(clear::COMMAND_WORD).unwrap(), Command::Clear);
        assert_eq!(parse_line("help me").unwrap(), Command::Help);
        assert_eq!(parse_line(exit::COMMAND_WORD).unwrap(), Command::Exit);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let err = parse_line("remove 1").unwrap_err();
        assert!(matches!(err, TrackermonError::UnknownCommand(ref w) if w == "remove"));
        let err = parse_line("ADD n/Naruto s/watching").unwrap_err();
        assert!(matches!(err, TrackermonError::UnknownCommand(_)));
    }

    #[test]
    fn blank_line_is_a_format_error() {
        let err = parse_line("   ").unwrap_err();
        assert_eq!(usage_of(err), help::USAGE);
    }
}
