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

//! Error types for the MT5 dashboard client.

use std::fmt::Debug;

use thiserror::Error;

use crate::common::consts::INVALID_LOGIN_ID_MESSAGE;

#[derive(Error, Debug)]
pub enum Mt5Error {
    /// The login field holds something other than a positive integer.
    #[error("{}", INVALID_LOGIN_ID_MESSAGE)]
    InvalidLoginId(String),

    /// Login was rejected; carries the message shown to the user.
    #[error("{0}")]
    LoginFailed(String),

    /// Remote disconnect failed; local state has already been reset.
    #[error("{0}")]
    DisconnectFailed(String),

    #[error("A connection request is already in flight")]
    RequestInFlight,

    #[error("Already connected to MT5")]
    AlreadyConnected,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Credential storage error: {0}")]
    StorageError(String),

    /// The stored bytes cannot be a credential record at all.
    #[error("Corrupt credential record: {0}")]
    CorruptRecord(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl Mt5Error {
    /// Returns true for errors raised locally before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Mt5Error::InvalidLoginId(_))
    }
}

impl From<std::io::Error> for Mt5Error {
    fn from(err: std::io::Error) -> Self {
        Mt5Error::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for Mt5Error {
    fn from(err: serde_json::Error) -> Self {
        Mt5Error::SerializationError(err.to_string())
    }
}

pub type Mt5Result<T> = Result<T, Mt5Error>;
