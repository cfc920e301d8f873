//! File-based model store: one pretty-printed JSON document per model.
//!
//! Storage location: `<directory>/<name>.json` (default
//! `~/.sitewright/models`).
//!
//! Saves overwrite without versioning. Loads never fail: a missing,
//! unreadable, or malformed document is logged and reported as `None`.

use async_trait::async_trait;
use sitewright_core::error::ModelStoreError;
use sitewright_core::model::ModelStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A directory of JSON model documents.
pub struct FileModelStore {
    directory: PathBuf,
}

impl FileModelStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the document for `name`, if `name` is a plain file stem.
    pub fn model_path(&self, name: &str) -> Result<PathBuf, ModelStoreError> {
        let invalid = name.is_empty()
            || name == "."
            || name.contains("..")
            || name.contains(['/', '\\'])
            || name.contains('\0');
        if invalid {
            return Err(ModelStoreError::InvalidName(name.to_string()));
        }
        Ok(self.directory.join(format!("{name}.json")))
    }
}

#[async_trait]
impl ModelStore for FileModelStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn ensure_directory(&self) -> Result<(), ModelStoreError> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| ModelStoreError::Io {
                path: self.directory.clone(),
                reason: e.to_string(),
            })
    }

    async fn save_model(
        &self,
        name: &str,
        data: &serde_json::Value,
    ) -> Result<(), ModelStoreError> {
        let path = self.model_path(name)?;
        self.ensure_directory().await?;

        let content = serde_json::to_string_pretty(data)
            .map_err(|e| ModelStoreError::Serialize(e.to_string()))?;

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ModelStoreError::Io {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), "Model saved");
        Ok(())
    }

    async fn load_model(&self, name: &str) -> Option<serde_json::Value> {
        let path = match self.model_path(name) {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "Refusing to load model");
                return None;
            }
        };

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Model file not found");
                return None;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read model file");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping malformed model file");
                None
            }
        }
    }
}
