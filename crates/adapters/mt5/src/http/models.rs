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

//! Data models for the MT5 dashboard backend.
//!
//! The backend is a FastAPI service:
//! - Success: endpoint specific JSON body
//! - Error: `{"detail": "error message"}` with a non-2xx status
//!
//! Fields the client does not rely on are optional and default on error, so a
//! partially populated response still deserializes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError};

use crate::common::consts::MISSING_VALUE;

/// Body of `POST /mt5/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub server: String,
}

/// Body of `GET /mt5/status`. A missing `connected` flag reads as disconnected.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub connected: bool,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub initialized: bool,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub mt5_available: bool,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Snapshot of `GET /mt5/account`.
///
/// Every numeric field is optional; an absent or mistyped value is `None` and
/// renders as `-`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub login: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub equity: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub profit: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub margin_level: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_free: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leverage: Option<u32>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AccountInfo {
    pub fn login_display(&self) -> String {
        self.login
            .map(|login| login.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    }

    pub fn balance_display(&self) -> String {
        format_money(self.balance)
    }

    pub fn equity_display(&self) -> String {
        format_money(self.equity)
    }

    pub fn profit_display(&self) -> String {
        format_money(self.profit)
    }

    pub fn margin_level_display(&self) -> String {
        match self.margin_level {
            Some(level) => format!("{level:.2}%"),
            None => MISSING_VALUE.to_string(),
        }
    }
}

fn format_money(value: Option<f64>) -> String {
    match value {
        Some(v) if v < 0.0 => format!("-${:.2}", v.abs()),
        Some(v) => format!("${v:.2}"),
        None => MISSING_VALUE.to_string(),
    }
}

/// FastAPI error envelope. Only a string `detail` is surfaced to users;
/// validation errors carry a list and fall back to the generic message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    pub fn detail_message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_login_request_omits_absent_fields() {
        let request = LoginRequest {
            login: None,
            password: None,
            server: "MetaQuotes-Demo".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"server": "MetaQuotes-Demo"})
        );
    }

    #[test]
    fn test_status_missing_connected_is_false() {
        let status: StatusResponse = serde_json::from_value(json!({"initialized": true})).unwrap();
        assert!(!status.connected);
        assert!(status.initialized);
    }

    #[test]
    fn test_status_full_backend_payload() {
        let status: StatusResponse = serde_json::from_value(json!({
            "mt5_available": false,
            "initialized": false,
            "connected": true,
            "message": "MT5 module not available",
        }))
        .unwrap();
        assert!(status.connected);
        assert_eq!(status.message.as_deref(), Some("MT5 module not available"));
    }

    #[test]
    fn test_account_info_tolerates_partial_and_mistyped_fields() {
        let info: AccountInfo = serde_json::from_value(json!({
            "login": 5001,
            "balance": 10000.5,
            "equity": "n/a",
            "margin_level": null,
            "currency": "USD",
            "trade_mode": 0,
        }))
        .unwrap();
        assert_eq!(info.login, Some(5001));
        assert_eq!(info.balance, Some(10000.5));
        assert_eq!(info.equity, None);
        assert_eq!(info.profit, None);
        assert_eq!(info.margin_level, None);
        assert_eq!(info.currency.as_deref(), Some("USD"));
    }

    #[rstest]
    #[case(Some(10000.0), "$10000.00")]
    #[case(Some(-12.345), "-$12.35")]
    #[case(None, "-")]
    fn test_money_display(#[case] balance: Option<f64>, #[case] expected: &str) {
        let info = AccountInfo {
            balance,
            ..Default::default()
        };
        assert_eq!(info.balance_display(), expected);
    }

    #[test]
    fn test_margin_level_display() {
        let info = AccountInfo {
            margin_level: Some(1523.456),
            ..Default::default()
        };
        assert_eq!(info.margin_level_display(), "1523.46%");
        assert_eq!(AccountInfo::default().margin_level_display(), "-");
    }

    #[test]
    fn test_error_detail_only_for_strings() {
        let err: ErrorResponse = serde_json::from_value(json!({"detail": "Invalid credentials"})).unwrap();
        assert_eq!(err.detail_message(), Some("Invalid credentials"));

        let err: ErrorResponse =
            serde_json::from_value(json!({"detail": [{"loc": ["body"], "msg": "bad"}]})).unwrap();
        assert_eq!(err.detail_message(), None);

        let err: ErrorResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(err.detail_message(), None);
    }
}
