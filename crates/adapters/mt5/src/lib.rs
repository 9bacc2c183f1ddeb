#![doc = include_str!("../README.md")]

pub mod common;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod storage;

pub use common::*;
pub use config::Mt5DashboardConfig;
pub use error::{Mt5Error, Mt5Result};
pub use http::Mt5HttpClient;
pub use session::{CredentialManager, Mt5Backend, SessionController};
pub use storage::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
