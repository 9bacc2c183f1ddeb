//! In-memory credential store.

use crate::{error::Mt5Result, storage::CredentialStore};

/// Keeps the record for the lifetime of the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCredentialStore {
    raw: Option<String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `raw`, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_none()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Mt5Result<Option<String>> {
        Ok(self.raw.clone())
    }

    fn save(&mut self, raw: &str) -> Mt5Result<()> {
        self.raw = Some(raw.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Mt5Result<()> {
        self.raw = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let mut store = MemoryCredentialStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(r#"{"server":"x"}"#).unwrap();
        assert_eq!(store.raw(), Some(r#"{"server":"x"}"#));

        store.clear().unwrap();
        assert!(store.is_empty());
        store.clear().unwrap();
    }
}
