//! Remote operations the session controller depends on.

use async_trait::async_trait;

use crate::http::{
    error::Mt5HttpError,
    models::{AccountInfo, LoginRequest, StatusResponse},
};

/// The dashboard backend as seen by a login screen.
///
/// Implemented by [`crate::http::Mt5HttpClient`]; tests substitute a fake
/// honouring the same request/response contract.
#[async_trait]
pub trait Mt5Backend: Send + Sync {
    async fn initialize(&self) -> Result<(), Mt5HttpError>;

    async fn login(&self, request: &LoginRequest) -> Result<(), Mt5HttpError>;

    async fn shutdown(&self) -> Result<(), Mt5HttpError>;

    async fn status(&self) -> Result<StatusResponse, Mt5HttpError>;

    async fn account_info(&self) -> Result<AccountInfo, Mt5HttpError>;
}
