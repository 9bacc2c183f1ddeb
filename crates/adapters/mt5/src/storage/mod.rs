//! Durable storage for the saved credential record.
//!
//! A store holds at most one raw JSON record under a fixed key. Parsing and
//! validation belong to [`crate::session::manager::CredentialManager`].

pub mod file;
pub mod memory;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;

use crate::error::Mt5Result;

pub trait CredentialStore {
    /// Returns the raw record, or `None` when nothing is stored.
    fn load(&self) -> Mt5Result<Option<String>>;

    /// Replaces the stored record.
    fn save(&mut self, raw: &str) -> Mt5Result<()>;

    /// Removes the stored record; clearing an empty store is not an error.
    fn clear(&mut self) -> Mt5Result<()>;
}
