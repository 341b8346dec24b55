//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every trackermon operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Session`] and the [`DataStore`]
//! - **Dispatches** typed [`Command`]s to the command layer
//! - **Persists** the whole catalog after every successful mutating command
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation**: no stdout, stderr, or colours
//!
//! ## Generic Over DataStore
//!
//! `TrackerApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TrackerApi<JsonFileStore>`
//! - Testing: `TrackerApi<InMemoryStore>`
//!
//! ## Save Failures
//!
//! A mutating command and its save succeed or fail together. When the save
//! fails, the session is rolled back to its state before the command and the
//! save error is returned, so memory never shows data the store does not hold.

use crate::catalog::Catalog;
use crate::commands::parser::parse_line;
use crate::commands::{CmdResult, Command, CommandOptions};
use crate::error::{Result, TrackermonError};
use crate::sample::sample_catalog;
use crate::session::Session;
use crate::store::DataStore;

pub use crate::commands::{CmdMessage, MessageLevel};

/// How the starting catalog was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store held a valid catalog with this many shows.
    Loaded(usize),
    /// Nothing was persisted yet; started from the sample catalog or empty.
    FirstRun { sample: bool },
    /// The persisted data was rejected; started empty.
    Rejected(String),
}

impl LoadOutcome {
    /// What to tell the user about the starting catalog, if anything.
    pub fn message(&self) -> Option<CmdMessage> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::FirstRun { sample: true } => Some(CmdMessage::info(
                "No data file yet, starting with a sample catalog.",
            )),
            LoadOutcome::FirstRun { sample: false } => Some(CmdMessage::info(
                "No data file yet, starting with an empty catalog.",
            )),
            LoadOutcome::Rejected(detail) => Some(CmdMessage::warning(format!(
                "Data file could not be read ({}), starting with an empty catalog.",
                detail
            ))),
        }
    }
}

pub struct TrackerApi<S: DataStore> {
    store: S,
    session: Session,
    options: CommandOptions,
}

impl<S: DataStore> TrackerApi<S> {
    pub fn new(store: S, catalog: Catalog, options: CommandOptions) -> Self {
        Self {
            store,
            session: Session::new(catalog),
            options,
        }
    }

    /// Loads the catalog from `store`, falling back when there is nothing
    /// usable. I/O failures other than a missing file are returned.
    pub fn open(
        store: S,
        options: CommandOptions,
        sample_on_first_run: bool,
    ) -> Result<(Self, LoadOutcome)> {
        let (catalog, outcome) = match store.load() {
            Ok(Some(catalog)) => {
                let count = catalog.len();
                (catalog, LoadOutcome::Loaded(count))
            }
            Ok(None) if sample_on_first_run => {
                (sample_catalog()?, LoadOutcome::FirstRun { sample: true })
            }
            Ok(None) => (Catalog::new(), LoadOutcome::FirstRun { sample: false }),
            Err(TrackermonError::DataFormat(detail)) => {
                tracing::warn!(
                    location = %store.describe(),
                    %detail,
                    "data file rejected, starting with an empty catalog"
                );
                (Catalog::new(), LoadOutcome::Rejected(detail))
            }
            Err(e) => return Err(e),
        };
        Ok((Self::new(store, catalog, options), outcome))
    }

    pub fn execute(&mut self, command: &Command) -> Result<CmdResult> {
        if !command.mutates_catalog() {
            return command.execute(&mut self.session, &self.options);
        }

        let snapshot = self.session.clone();
        let result = command.execute(&mut self.session, &self.options)?;
        if result.modified {
            if let Err(e) = self.store.save(self.session.catalog()) {
                tracing::warn!(
                    command = command.word(),
                    error = %e,
                    "save failed, rolling back"
                );
                self.session = snapshot;
                return Err(e);
            }
        }
        Ok(result)
    }

    /// Parses `line` with the command factory, then executes it.
    pub fn execute_line(&mut self, line: &str) -> Result<CmdResult> {
        let command = parse_line(line)?;
        self.execute(&command)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with_two_shows() -> TrackerApi<InMemoryStore> {
        let store = StoreFixture::new()
            .with_show("Naruto", Status::Watching, &[])
            .with_show("Bleach", Status::Completed, &["Anime"])
            .build();
        let (api, outcome) = TrackerApi::open(store, CommandOptions::default(), true).unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded(2));
        api
    }

    #[test]
    fn first_run_uses_sample_catalog() {
        let (api, outcome) =
            TrackerApi::open(InMemoryStore::new(), CommandOptions::default(), true).unwrap();
        assert_eq!(outcome, LoadOutcome::FirstRun { sample: true });
        assert_eq!(api.session().catalog().len(), 2);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn first_run_without_sample_is_empty() {
        let (api, outcome) =
            TrackerApi::open(InMemoryStore::new(), CommandOptions::default(), false).unwrap();
        assert_eq!(outcome, LoadOutcome::FirstRun { sample: false });
        assert!(api.session().catalog().is_empty());
    }

    #[test]
    fn rejected_data_starts_empty_and_keeps_file() {
        let bad = r#"{ "shows": [ { "name": "Naruto" } ] }"#;
        let (api, outcome) = TrackerApi::open(
            InMemoryStore::with_document(bad),
            CommandOptions::default(),
            true,
        )
        .unwrap();
        assert_eq!(
            outcome,
            LoadOutcome::Rejected("Show's Status field is missing!".to_string())
        );
        assert!(api.session().catalog().is_empty());
        assert_eq!(api.store().document(), Some(bad));
    }

    #[test]
    fn load_outcome_messages() {
        assert_eq!(LoadOutcome::Loaded(3).message(), None);
        assert_eq!(
            LoadOutcome::FirstRun { sample: true }.message(),
            Some(CmdMessage::info(
                "No data file yet, starting with a sample catalog."
            ))
        );
        let warning = LoadOutcome::Rejected("Show's Name field is missing!".to_string())
            .message()
            .unwrap();
        assert_eq!(warning.level, MessageLevel::Warning);
        assert_eq!(
            warning.content,
            "Data file could not be read (Show's Name field is missing!), starting with an empty catalog."
        );
    }

    #[test]
    fn mutating_commands_save() {
        let mut api = api_with_two_shows();
        api.execute_line("add n/One Piece s/planning").unwrap();
        api.execute_line("delete 1").unwrap();
        api.execute_line("edit 1 c/rewatch").unwrap();
        assert_eq!(api.store().save_count(), 2 + 3);

        let persisted = api.store().load().unwrap().unwrap();
        assert_eq!(&persisted, api.session().catalog());
    }

    #[test]
    fn read_only_commands_do_not_save() {
        let mut api = api_with_two_shows();
        for line in ["list", "find naruto", "help", "exit"] {
            api.execute_line(line).unwrap();
        }
        assert_eq!(api.store().save_count(), 2);
    }

    #[test]
    fn failed_command_does_not_save() {
        let mut api = api_with_two_shows();
        let err = api.execute_line("add n/naruto s/dropped").unwrap_err();
        assert!(matches!(err, TrackermonError::DuplicateShow));
        let err = api.execute_line("delete 9").unwrap_err();
        assert!(matches!(err, TrackermonError::InvalidIndex(9)));
        assert_eq!(api.store().save_count(), 2);
    }

    #[test]
    fn factory_errors_surface() {
        let mut api = api_with_two_shows();
        assert!(matches!(
            api.execute_line("watch 1"),
            Err(TrackermonError::UnknownCommand(_))
        ));
        assert!(matches!(
            api.execute_line("add n/Naruto"),
            Err(TrackermonError::ArgumentFormat { .. })
        ));
    }

    #[test]
    fn save_failure_is_reported() {
        let mut store = InMemoryStore::new();
        store.simulate_write_error(true);
        let mut api = TrackerApi::new(store, Catalog::new(), CommandOptions::default());
        let err = api.execute_line("add n/Naruto s/watching").unwrap_err();
        assert!(matches!(err, TrackermonError::Io(_)));
        assert!(api.session().catalog().is_empty());

        // Same command fails for the same reason, not as a duplicate.
        let err = api.execute_line("add n/Naruto s/watching").unwrap_err();
        assert!(matches!(err, TrackermonError::Io(_)));
    }

    #[test]
    fn save_failure_rolls_back_edit_and_filter_reset() {
        let mut store = StoreFixture::new()
            .with_show("Naruto", Status::Watching, &[])
            .with_show("Bleach", Status::Completed, &["Anime"])
            .build();
        store.simulate_write_error(true);
        let (mut api, _) = TrackerApi::open(store, CommandOptions::default(), false).unwrap();

        api.execute_line("find bleach").unwrap();
        let before = api.session().catalog().clone();

        let err = api.execute_line("edit 1 s/dropped").unwrap_err();
        assert!(matches!(err, TrackermonError::Io(_)));
        assert_eq!(api.session().catalog(), &before);
        assert!(!api.session().predicate().is_all());
        assert_eq!(api.session().visible_len(), 1);

        let err = api.execute_line("clear").unwrap_err();
        assert!(matches!(err, TrackermonError::Io(_)));
        assert_eq!(api.session().catalog().len(), 2);
    }

    #[test]
    fn clear_persists_empty_catalog() {
        let mut api = api_with_two_shows();
        let result = api.execute_line("clear").unwrap();
        assert!(result.listed_shows.is_empty());
        assert!(api.store().load().unwrap().unwrap().is_empty());
    }

    #[test]
    fn add_resets_filter_when_configured() {
        let store = StoreFixture::new()
            .with_show("Naruto", Status::Watching, &[])
            .with_show("Bleach", Status::Completed, &[])
            .build();
        let options = CommandOptions {
            add_resets_filter: true,
        };
        let (mut api, _) = TrackerApi::open(store, options, false).unwrap();
        api.execute_line("find naruto").unwrap();
        let result = api.execute_line("add n/One Piece s/watching").unwrap();
        assert_eq!(result.listed_shows.len(), 3);
    }

    #[test]
    fn add_keeps_filter_by_default() {
        let mut api = api_with_two_shows();
        api.execute_line("find naruto").unwrap();
        let result = api.execute_line("add n/One Piece s/watching").unwrap();
        assert_eq!(result.listed_shows.len(), 1);
        assert_eq!(api.session().catalog().len(), 3);
    }
}
