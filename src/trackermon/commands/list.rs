use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list: Lists all shows in Trackermon.\n\
    Example: list";

pub fn run(session: &mut Session) -> Result<CmdResult> {
    session.reset_predicate();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Listed all shows"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::naruto_bleach_session;
    use crate::view::ShowPredicate;

    #[test]
    fn resets_filter_to_everything() {
        let mut session = naruto_bleach_session();
        session.set_predicate(ShowPredicate::name_keywords(["bleach"]));
        run(&mut session).unwrap();
        assert!(session.predicate().is_all());
        assert_eq!(session.visible_len(), 2);
    }
}
