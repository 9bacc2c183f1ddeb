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

//! Login payload resolution and the saved-credential lifecycle.
//!
//! The effective login comes from the form first, then the saved record, then
//! the backend's own defaults (by omitting fields). The saved record follows
//! the user's consent: it exists only while "save credentials" is on and only
//! carries a password while "persist password" is on.

use tracing::{debug, warn};

use crate::{
    common::{
        credential::{parse_login_id, resolve_server, Consent, CredentialRecord, FormData},
        enums::AccountType,
        parse::{
            extract_account_type, extract_bool, extract_login_id, extract_non_blank_string,
            extract_string, parse_json_object,
        },
    },
    error::{Mt5Error, Mt5Result},
    http::models::LoginRequest,
    storage::CredentialStore,
};

/// What to do with the saved record once a login goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Save(CredentialRecord),
    Clear,
}

/// A validated login: the request to send plus the pending storage change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPlan {
    pub payload: LoginRequest,
    pub persistence: Persistence,
}

/// Owns the credential store; the only writer to it.
#[derive(Debug)]
pub struct CredentialManager<S> {
    store: S,
}

impl<S: CredentialStore> CredentialManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Validates the form and assembles the login request without touching storage.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Mt5Error::InvalidLoginId`] when the login field is
    /// neither blank nor a positive integer.
    pub fn prepare_login(
        form: &FormData,
        account_type: AccountType,
        consent: Consent,
    ) -> Mt5Result<LoginPlan> {
        let login = parse_login_id(&form.login)?;
        let server = resolve_server(&form.server, account_type);
        let password = Some(form.password.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let persistence = if consent.save_credentials {
            Persistence::Save(
                CredentialRecord {
                    login,
                    password: password.clone(),
                    server: server.clone(),
                    account_type,
                    persist_password: consent.persist_password,
                }
                .sanitized(),
            )
        } else {
            Persistence::Clear
        };

        Ok(LoginPlan {
            payload: LoginRequest {
                login,
                password,
                server,
            },
            persistence,
        })
    }

    /// Writes or clears the saved record as planned.
    pub fn apply_persistence(&mut self, persistence: &Persistence) -> Mt5Result<()> {
        match persistence {
            Persistence::Save(record) => self.persist(record),
            Persistence::Clear => self.forget(),
        }
    }

    /// Validates the form, builds the login request and applies the consent
    /// flags to storage. Validation failure leaves storage untouched.
    pub fn build_login_payload(
        &mut self,
        form: &FormData,
        account_type: AccountType,
        consent: Consent,
    ) -> Mt5Result<LoginRequest> {
        let plan = Self::prepare_login(form, account_type, consent)?;
        self.apply_persistence(&plan.persistence)?;
        Ok(plan.payload)
    }

    /// Saves `record`, dropping its password unless persistence was requested.
    pub fn persist(&mut self, record: &CredentialRecord) -> Mt5Result<()> {
        let record = record.clone().sanitized();
        let raw = serde_json::to_string(&record)?;
        self.store.save(&raw)?;
        debug!(login = ?record.login, server = %record.server, "Saved credentials");
        Ok(())
    }

    /// Deletes the saved record, if any.
    pub fn forget(&mut self) -> Mt5Result<()> {
        self.store.clear()
    }

    /// Reads the saved record, repairing what it can.
    ///
    /// Each field is recovered independently: a bad login becomes absent, a bad
    /// server becomes the account-type default, and the password survives only
    /// when `persistPassword` was set. A record that is not a JSON object is
    /// removed from storage, as is one the store cannot decode. Never fails.
    pub fn hydrate_from_storage(&mut self) -> Option<CredentialRecord> {
        let raw = match self.store.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e @ Mt5Error::CorruptRecord(_)) => {
                self.discard(&e);
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read saved credentials");
                return None;
            }
        };

        let obj = match parse_json_object(&raw) {
            Ok(obj) => obj,
            Err(e) => {
                self.discard(&e);
                return None;
            }
        };

        let account_type = extract_account_type(&obj, "accountType").unwrap_or_default();
        let persist_password = extract_bool(&obj, "persistPassword").unwrap_or(false);
        let password = if persist_password {
            extract_string(&obj, "password").filter(|p| !p.is_empty())
        } else {
            None
        };

        Some(CredentialRecord {
            login: extract_login_id(&obj, "login"),
            password,
            server: extract_non_blank_string(&obj, "server")
                .unwrap_or_else(|| account_type.default_server().to_string()),
            account_type,
            persist_password,
        })
    }

    fn discard(&mut self, reason: &dyn std::fmt::Display) {
        warn!(error = %reason, "Discarding unreadable saved credentials");
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear saved credentials");
        }
    }
}
