use super::adapted::JsonSerializableCatalog;
use super::DataStore;
use crate::catalog::Catalog;
use crate::error::{Result, TrackermonError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores the catalog as one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "trackermon".to_string());
        let tmp_name = format!(".{}-{}.tmp", file_name, Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        }
    }
}

impl DataStore for JsonFileStore {
    fn load(&self) -> Result<Option<Catalog>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no data file yet");
                return Ok(None);
            }
            Err(e) => return Err(TrackermonError::Io(e)),
        };

        let catalog = JsonSerializableCatalog::parse(&content)?;
        tracing::info!(
            path = %self.path.display(),
            shows = catalog.len(),
            "loaded catalog"
        );
        Ok(Some(catalog))
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = JsonSerializableCatalog::render(catalog)?;
        let tmp_file = self.tmp_path();
        let written =
            fs::write(&tmp_file, content).and_then(|()| fs::rename(&tmp_file, &self.path));
        if let Err(e) = written {
            // A failed write may still have created a partial tmp file.
            let _ = fs::remove_file(&tmp_file);
            tracing::warn!(path = %self.path.display(), error = %e, "save failed");
            return Err(TrackermonError::Io(e));
        }

        tracing::info!(
            path = %self.path.display(),
            shows = catalog.len(),
            "saved catalog"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
