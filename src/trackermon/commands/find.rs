use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::view::ShowPredicate;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all shows whose names contain any of the specified keywords (case-insensitive) \
    and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find hero kyojin academia";

/// Narrows the view to shows with a name word equal to any keyword. Never
/// touches the catalog.
pub fn run(session: &mut Session, keywords: &[String]) -> Result<CmdResult> {
    session.set_predicate(ShowPredicate::name_keywords(keywords.iter().cloned()));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} shows listed!",
        session.visible_len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::naruto_bleach_session;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn narrows_view_to_matching_names() {
        let mut session = naruto_bleach_session();
        let result = run(&mut session, &keywords(&["naruto"])).unwrap();

        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name().as_str(), "Naruto");
        assert_eq!(result.feedback(), "1 shows listed!");
        assert!(!result.modified);
    }

    #[test]
    fn never_mutates_catalog() {
        let mut session = naruto_bleach_session();
        let before = session.catalog().clone();
        run(&mut session, &keywords(&["nothing", "matches"])).unwrap();
        assert_eq!(session.catalog(), &before);
        assert_eq!(session.visible_len(), 0);
    }

    #[test]
    fn multiple_keywords_match_any() {
        let mut session = naruto_bleach_session();
        let result = run(&mut session, &keywords(&["BLEACH", "naruto"])).unwrap();
        assert_eq!(result.feedback(), "2 shows listed!");
    }

    #[test]
    fn later_find_replaces_earlier_filter() {
        let mut session = naruto_bleach_session();
        run(&mut session, &keywords(&["naruto"])).unwrap();
        run(&mut session, &keywords(&["bleach"])).unwrap();
        assert_eq!(session.visible()[0].name().as_str(), "Bleach");
        assert_eq!(session.visible_len(), 1);
    }
}
