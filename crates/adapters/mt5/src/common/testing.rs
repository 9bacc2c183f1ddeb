//! Test fixtures for the MT5 dashboard client.

// Shared by the session unit tests; integration tests drive real HTTP instead.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    http::{
        error::Mt5HttpError,
        models::{AccountInfo, LoginRequest, StatusResponse},
    },
    session::backend::Mt5Backend,
};

/// Scripted backend that records every call it receives.
#[derive(Debug, Default)]
pub struct FakeBackend {
    /// `(status, detail)` returned by login, if it should fail.
    pub login_error: Option<(u16, String)>,
    pub shutdown_error: Option<(u16, String)>,
    pub status_connected: bool,
    pub status_fails: bool,
    pub account_info: Option<AccountInfo>,
    pub(crate) calls: Mutex<Vec<&'static str>>,
    pub(crate) logins: Mutex<Vec<LoginRequest>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn logins(&self) -> Vec<LoginRequest> {
        self.logins.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

fn backend_error(status: u16, detail: &str) -> Mt5HttpError {
    Mt5HttpError::Backend {
        status,
        detail: detail.to_string(),
    }
}

#[async_trait]
impl Mt5Backend for FakeBackend {
    async fn initialize(&self) -> Result<(), Mt5HttpError> {
        self.record("initialize");
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), Mt5HttpError> {
        self.record("login");
        self.logins.lock().unwrap().push(request.clone());
        match &self.login_error {
            Some((status, detail)) => Err(backend_error(*status, detail)),
            None => Ok(()),
        }
    }

    async fn shutdown(&self) -> Result<(), Mt5HttpError> {
        self.record("shutdown");
        match &self.shutdown_error {
            Some((status, detail)) => Err(backend_error(*status, detail)),
            None => Ok(()),
        }
    }

    async fn status(&self) -> Result<StatusResponse, Mt5HttpError> {
        self.record("status");
        if self.status_fails {
            return Err(Mt5HttpError::ConnectionError("connection refused".to_string()));
        }
        Ok(StatusResponse {
            connected: self.status_connected,
            ..Default::default()
        })
    }

    async fn account_info(&self) -> Result<AccountInfo, Mt5HttpError> {
        self.record("account_info");
        self.account_info
            .clone()
            .ok_or_else(|| backend_error(500, "Failed to get account info"))
    }
}
