//! HTTP client for the MT5 dashboard backend.
//!
//! This module provides the typed client for the backend routes, its error
//! taxonomy and the request/response records of each endpoint.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::Mt5HttpClient;
pub use error::*;
pub use models::*;
pub use query::*;
