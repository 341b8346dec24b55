use super::adapted::JsonSerializableCatalog;
use super::DataStore;
use crate::catalog::Catalog;
use crate::error::{Result, TrackermonError};
use std::io;

/// Keeps the rendered JSON document in memory so loads still go through
/// the same validation as the file store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    document: Option<String>,
    save_count: usize,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose persisted document is `content`, valid or not.
    pub fn with_document(content: impl Into<String>) -> Self {
        Self {
            document: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// Makes every following save fail with an I/O error.
    pub fn simulate_write_error(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Catalog>> {
        self.document
            .as_deref()
            .map(JsonSerializableCatalog::parse)
            .transpose()
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        if self.fail_writes {
            return Err(TrackermonError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write failure",
            )));
        }
        self.document = Some(JsonSerializableCatalog::render(catalog)?);
        self.save_count += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Comment, Name, Show, Status};
    use crate::tags::tag_set;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        catalog: Catalog,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                catalog: Catalog::new(),
            }
        }

        pub fn with_show(mut self, name: &str, status: Status, tags: &[&str]) -> Self {
            let show = Show::new(
                Name::new(name).unwrap(),
                status,
                tag_set(tags).unwrap(),
                Comment::empty(),
            );
            self.catalog.add(show).unwrap();
            self.store.save(&self.catalog).unwrap();
            self
        }

        pub fn with_shows(mut self, count: usize) -> Self {
            let start = self.catalog.len();
            for i in 0..count {
                let name = format!("Test Show {}", start + i + 1);
                self = self.with_show(&name, Status::Planning, &[]);
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
