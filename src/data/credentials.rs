//! API credential persistence
//!
//! Stores the Finnhub API key in a local JSON file so a user enters it once.
//! The file holds only the key; callers decide where it lives (typically a
//! per-user config directory).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{OptionsError, OptionsResult};

#[derive(Debug, Serialize, Deserialize)]
struct StoredCredentials {
    finnhub_api_key: String,
}

/// File-backed store for the quote-source API key
pub struct ApiKeyStore {
    path: PathBuf,
}

impl ApiKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved key, if any
    pub fn load(&self) -> OptionsResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let stored: StoredCredentials = serde_json::from_str(&json)
            .map_err(|e| OptionsError::Serialization(e.to_string()))?;

        Ok(Some(stored.finnhub_api_key))
    }

    /// Save the key, creating parent directories as needed
    pub fn save(&self, key: &str) -> OptionsResult<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(OptionsError::data("API key must not be empty"));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let stored = StoredCredentials {
            finnhub_api_key: key.to_string(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| OptionsError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)?;

        tracing::info!("Saved API key to {:?}", self.path);
        Ok(())
    }

    /// Remove the saved key
    pub fn clear(&self) -> OptionsResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_clear() {
        let dir = tempdir().unwrap();
        let store = ApiKeyStore::new(dir.path().join("credentials.json"));

        assert!(store.load().unwrap().is_none());

        store.save("abc123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let store = ApiKeyStore::new(dir.path().join("nested/deeper/credentials.json"));

        store.save("  k-42  ").unwrap();
        // Whitespace is trimmed before storage
        assert_eq!(store.load().unwrap().as_deref(), Some("k-42"));
    }

    #[test]
    fn test_rejects_empty_key() {
        let dir = tempdir().unwrap();
        let store = ApiKeyStore::new(dir.path().join("credentials.json"));

        assert!(store.save("   ").is_err());
    }

    #[test]
    fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "not json").unwrap();

        let store = ApiKeyStore::new(path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, OptionsError::Serialization(_)));
    }
}
