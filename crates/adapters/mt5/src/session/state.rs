//! In-memory state of one dashboard session.

use crate::{
    common::{
        credential::{Consent, CredentialRecord, FormData},
        enums::{AccountType, ConnectionStatus},
    },
    http::models::AccountInfo,
};

/// Message surfaced to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Session state owned by a [`crate::session::SessionController`].
///
/// `account_info` is only ever populated while `status` is `Connected`.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    status: ConnectionStatus,
    account_info: Option<AccountInfo>,
    pub form: FormData,
    pub account_type: AccountType,
    pub consent: Consent,
    pub notice: Option<Notice>,
}

impl SessionState {
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    pub fn account_info(&self) -> Option<&AccountInfo> {
        self.account_info.as_ref()
    }

    /// Fills the form and consent flags from a saved record.
    pub fn hydrate(&mut self, record: &CredentialRecord) {
        self.form = FormData::from(record);
        self.account_type = record.account_type;
        self.consent = Consent::new(true, record.persist_password);
    }

    pub(crate) fn transition(&mut self, status: ConnectionStatus) {
        if self.status != status {
            tracing::info!(from = %self.status, to = %status, "Session status changed");
        }
        self.status = status;
        if status != ConnectionStatus::Connected {
            self.account_info = None;
        }
    }

    pub(crate) fn set_account_info(&mut self, info: AccountInfo) {
        if self.is_connected() {
            self.account_info = Some(info);
        }
    }
}
