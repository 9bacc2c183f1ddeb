//! Credential store backed by a JSON file.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    common::consts::MT5_CREDENTIALS_KEY,
    config::Mt5DashboardConfig,
    error::{Mt5Error, Mt5Result},
    storage::CredentialStore,
};

const APP_DIR_NAME: &str = "mt5-dashboard";

/// Stores the record as `<dir>/mt5Credentials.json`.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{MT5_CREDENTIALS_KEY}.json")),
        }
    }

    /// Uses `credentials_dir` from the config, else the platform config dir.
    pub fn from_config(config: &Mt5DashboardConfig) -> Mt5Result<Self> {
        let dir = match &config.credentials_dir {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| {
                    Mt5Error::ConfigError("No platform config directory available".to_string())
                })?,
        };
        Ok(Self::new(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Mt5Result<Option<String>> {
        match fs::read(&self.path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| Mt5Error::CorruptRecord(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, raw: &str) -> Mt5Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "Saved credential record");
        Ok(())
    }

    fn clear(&mut self) -> Mt5Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Cleared credential record");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
