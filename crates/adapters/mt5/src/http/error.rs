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

//! HTTP error types for the MT5 dashboard client.

use thiserror::Error;

use crate::http::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum Mt5HttpError {
    /// The backend answered with a `{"detail": ...}` envelope.
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("HTTP error: {0} - {1}")]
    HttpError(u16, String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Invalid request: {0}")]
    InvalidRequestError(String),

    #[error("Resource not found: {0}")]
    NotFoundError(String),

    #[error("JSON decode error: {0}")]
    JsonDecodeError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Timeout error: {0}")]
    TimeoutError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl Mt5HttpError {
    /// The backend's own error message, when it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Mt5HttpError::Backend { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Text shown to the user: the backend detail or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    /// Maps HTTP status codes to appropriate error variants
    pub fn from_http_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => Mt5HttpError::InvalidRequestError(message),
            401 | 403 => Mt5HttpError::AuthenticationError(message),
            404 => Mt5HttpError::NotFoundError(message),
            500..=599 => Mt5HttpError::ServerError(message),
            _ => Mt5HttpError::HttpError(status, message),
        }
    }

    /// Builds the error for a non-2xx response, preferring the `detail` envelope.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let envelope: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
        match envelope.detail_message() {
            Some(detail) => Mt5HttpError::Backend {
                status,
                detail: detail.to_string(),
            },
            None => Self::from_http_status(status, body.to_string()),
        }
    }
}

impl From<reqwest::Error> for Mt5HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Mt5HttpError::TimeoutError(err.to_string())
        } else if err.is_connect() {
            Mt5HttpError::ConnectionError(err.to_string())
        } else if err.is_decode() {
            Mt5HttpError::JsonDecodeError(err.to_string())
        } else if err.is_builder() || err.is_request() {
            Mt5HttpError::RequestError(err.to_string())
        } else {
            Mt5HttpError::NetworkError(err.to_string())
        }
    }
}
