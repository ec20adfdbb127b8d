use crate::errors::ClientError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

/// Local preference file. Reads never fail: a missing or unreadable file
/// yields the defaults.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Preferences {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(prefs) => prefs,
                Err(err) => {
                    error!("failed to parse preferences file: {err}");
                    Preferences::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
            Err(err) => {
                error!("failed to read preferences file: {err}");
                Preferences::default()
            }
        }
    }

    pub async fn persist(&self, prefs: &Preferences) -> Result<(), ClientError> {
        let payload =
            serde_json::to_vec_pretty(prefs).map_err(|err| ClientError::Preferences(err.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| ClientError::Preferences(err.to_string()))?;
        }
        fs::write(&self.path, payload)
            .await
            .map_err(|err| ClientError::Preferences(err.to_string()))?;
        Ok(())
    }
}
