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

//! Login screen controller.
//!
//! Drives `Disconnected -> Connecting -> Connected -> Disconnecting ->
//! Disconnected`. Every transition is triggered by the user or by a status
//! check; there is no automatic retry or reconnection.

use tracing::{error, info, warn};

use crate::{
    common::{
        consts::{
            DISCONNECT_FAILED_MESSAGE, DISCONNECT_SUCCESS_MESSAGE, LOGIN_FAILED_MESSAGE,
            LOGIN_SUCCESS_MESSAGE,
        },
        credential::{resolve_server, FormData},
        enums::{AccountType, ConnectionStatus},
    },
    error::{Mt5Error, Mt5Result},
    http::{error::Mt5HttpError, models::LoginRequest},
    session::{
        backend::Mt5Backend,
        manager::CredentialManager,
        state::{Notice, SessionState},
    },
    storage::CredentialStore,
};

pub struct SessionController<B, S> {
    backend: B,
    credentials: CredentialManager<S>,
    state: SessionState,
}

impl<B: Mt5Backend, S: CredentialStore> SessionController<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            credentials: CredentialManager::new(store),
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn credentials(&self) -> &CredentialManager<S> {
        &self.credentials
    }

    /// Editable form fields.
    pub fn form_mut(&mut self) -> &mut FormData {
        &mut self.state.form
    }

    /// Submission is only offered while disconnected and idle.
    pub fn can_submit(&self) -> bool {
        self.state.status() == ConnectionStatus::Disconnected
    }

    /// Screen start: restore saved credentials, then ask the backend whether a
    /// session already exists.
    pub async fn mount(&mut self) {
        self.hydrate();
        self.check_status().await;
    }

    /// Loads the saved record into the form. Returns whether one was found.
    pub fn hydrate(&mut self) -> bool {
        match self.credentials.hydrate_from_storage() {
            Some(record) => {
                self.state.hydrate(&record);
                true
            }
            None => false,
        }
    }

    /// Syncs the connection flag with the backend. Failures are logged only.
    pub async fn check_status(&mut self) {
        if self.state.status().is_busy() {
            return;
        }
        match self.backend.status().await {
            Ok(status) if status.connected => {
                self.state.transition(ConnectionStatus::Connected);
                self.refresh_account_info().await;
            }
            Ok(_) => self.state.transition(ConnectionStatus::Disconnected),
            Err(e) => error!(error = %e, "Status check failed"),
        }
    }

    /// Re-fetches the account snapshot while connected. Failures are logged only.
    pub async fn refresh_account_info(&mut self) {
        if !self.state.is_connected() {
            return;
        }
        match self.backend.account_info().await {
            Ok(info) => self.state.set_account_info(info),
            Err(e) => error!(error = %e, "Failed to fetch account info"),
        }
    }

    /// Switches demo/real, keeping a custom server but swapping built-in ones.
    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.state.account_type = account_type;
        self.state.form.server = resolve_server(&self.state.form.server, account_type);
    }

    /// Withdrawing consent deletes the saved record straight away.
    pub fn set_save_credentials(&mut self, save: bool) -> Mt5Result<()> {
        self.state.consent.save_credentials = save;
        if !save {
            self.credentials.forget()?;
        }
        Ok(())
    }

    pub fn set_persist_password(&mut self, persist: bool) {
        self.state.consent.persist_password = persist;
    }

    /// Submits the form.
    ///
    /// # Errors
    ///
    /// - [`Mt5Error::InvalidLoginId`] before any network call or storage change.
    /// - [`Mt5Error::LoginFailed`] carrying the backend detail or the generic
    ///   message; the session returns to `Disconnected`.
    /// - [`Mt5Error::RequestInFlight`] / [`Mt5Error::AlreadyConnected`] when
    ///   called outside `Disconnected`.
    pub async fn login(&mut self) -> Mt5Result<()> {
        match self.state.status() {
            ConnectionStatus::Connecting | ConnectionStatus::Disconnecting => {
                return Err(Mt5Error::RequestInFlight)
            }
            ConnectionStatus::Connected => return Err(Mt5Error::AlreadyConnected),
            ConnectionStatus::Disconnected => {}
        }
        self.state.notice = None;

        let plan = match CredentialManager::<S>::prepare_login(
            &self.state.form,
            self.state.account_type,
            self.state.consent,
        ) {
            Ok(plan) => plan,
            Err(e) => {
                self.state.notice = Some(Notice::Error(e.to_string()));
                return Err(e);
            }
        };

        self.state.transition(ConnectionStatus::Connecting);
        info!(login = ?plan.payload.login, server = %plan.payload.server, "Connecting to MT5");

        if let Err(e) = self.connect(&plan.payload).await {
            self.state.transition(ConnectionStatus::Disconnected);
            let message = e.user_message(LOGIN_FAILED_MESSAGE);
            warn!(error = %e, "Login failed");
            self.state.notice = Some(Notice::Error(message.clone()));
            return Err(Mt5Error::LoginFailed(message));
        }

        if let Err(e) = self.credentials.apply_persistence(&plan.persistence) {
            warn!(error = %e, "Failed to update saved credentials");
        }

        self.state.transition(ConnectionStatus::Connected);
        self.state.notice = Some(Notice::Success(LOGIN_SUCCESS_MESSAGE.to_string()));
        self.refresh_account_info().await;
        Ok(())
    }

    async fn connect(&self, payload: &LoginRequest) -> Result<(), Mt5HttpError> {
        self.backend.initialize().await?;
        self.backend.login(payload).await
    }

    /// Ends the session. Local state is reset even when the backend call fails.
    ///
    /// # Errors
    ///
    /// Returns [`Mt5Error::DisconnectFailed`] when shutdown was rejected; the
    /// session is `Disconnected` regardless.
    pub async fn disconnect(&mut self) -> Mt5Result<()> {
        match self.state.status() {
            ConnectionStatus::Connecting | ConnectionStatus::Disconnecting => {
                return Err(Mt5Error::RequestInFlight)
            }
            ConnectionStatus::Disconnected => return Ok(()),
            ConnectionStatus::Connected => {}
        }
        self.state.notice = None;
        self.state.transition(ConnectionStatus::Disconnecting);

        let result = self.backend.shutdown().await;
        self.state.transition(ConnectionStatus::Disconnected);

        match result {
            Ok(()) => {
                self.state.notice = Some(Notice::Success(DISCONNECT_SUCCESS_MESSAGE.to_string()));
                Ok(())
            }
            Err(e) => {
                let message = e.user_message(DISCONNECT_FAILED_MESSAGE);
                warn!(error = %e, "Disconnect failed");
                self.state.notice = Some(Notice::Error(message.clone()));
                Err(Mt5Error::DisconnectFailed(message))
            }
        }
    }

    /// Disconnects and deletes the saved record and in-memory password.
    ///
    /// Nothing is forgotten while another request is still in flight.
    pub async fn disconnect_and_forget(&mut self) -> Mt5Result<()> {
        let result = self.disconnect().await;
        if matches!(result, Err(Mt5Error::RequestInFlight)) {
            return result;
        }
        self.state.consent.save_credentials = false;
        self.state.consent.persist_password = false;
        self.state.form.password.clear();
        self.credentials.forget()?;
        result
    }
}
