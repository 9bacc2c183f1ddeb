// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Credential types for MetaTrader 5 dashboard logins.
//!
//! The backend falls back to its own configured account when the login id is
//! omitted, so every field of a login is optional except the server.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    common::{
        consts::{MT5_DEMO_SERVER, MT5_REAL_SERVER},
        enums::AccountType,
    },
    error::{Mt5Error, Mt5Result},
};

/// Largest integer a login id may take (2^53 - 1).
const MAX_LOGIN_ID: f64 = 9_007_199_254_740_991.0;

/// Saved login details, persisted as one JSON record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct CredentialRecord {
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<u64>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub server: String,
    #[builder(default)]
    pub account_type: AccountType,
    #[builder(default)]
    pub persist_password: bool,
}

impl CredentialRecord {
    pub fn builder() -> CredentialRecordBuilder {
        CredentialRecordBuilder::default()
    }

    /// Drops the password unless the user asked for it to be kept.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if !self.persist_password || self.password.as_deref().is_some_and(str::is_empty) {
            self.password = None;
        }
        self
    }
}

/// Raw, unvalidated login form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub login: String,
    pub password: String,
    pub server: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            login: String::new(),
            password: String::new(),
            server: MT5_DEMO_SERVER.to_string(),
        }
    }
}

impl From<&CredentialRecord> for FormData {
    fn from(record: &CredentialRecord) -> Self {
        Self {
            login: record.login.map(|id| id.to_string()).unwrap_or_default(),
            password: record.password.clone().unwrap_or_default(),
            server: record.server.clone(),
        }
    }
}

/// User consent flags for credential persistence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consent {
    pub save_credentials: bool,
    pub persist_password: bool,
}

impl Consent {
    pub fn new(save_credentials: bool, persist_password: bool) -> Self {
        Self {
            save_credentials,
            persist_password,
        }
    }
}

/// Resolves the server to use for `account_type`.
///
/// Anything other than the two built-in servers is a custom entry and is kept
/// as typed, surrounding whitespace included; the built-ins and an empty
/// field follow the demo/real toggle.
pub fn resolve_server(current: &str, account_type: AccountType) -> String {
    if !current.is_empty() && current != MT5_DEMO_SERVER && current != MT5_REAL_SERVER {
        current.to_string()
    } else {
        account_type.default_server().to_string()
    }
}

/// Parses the login field.
///
/// Returns `Ok(None)` for a blank field, `Ok(Some(id))` for a positive integer
/// and [`Mt5Error::InvalidLoginId`] for anything else.
pub fn parse_login_id(raw: &str) -> Mt5Result<Option<u64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let invalid = || Mt5Error::InvalidLoginId(trimmed.to_string());

    if let Ok(id) = trimmed.parse::<u64>() {
        return if id > 0 { Ok(Some(id)) } else { Err(invalid()) };
    }

    // Integral decimal forms such as "7.0" or "1e3" still name an account.
    let value = trimmed.parse::<f64>().map_err(|_| invalid())?;
    if value.is_finite() && value.fract() == 0.0 && value > 0.0 && value <= MAX_LOGIN_ID {
        Ok(Some(value as u64))
    } else {
        Err(invalid())
    }
}
