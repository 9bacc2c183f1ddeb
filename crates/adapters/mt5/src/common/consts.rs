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

//! Constants shared by the MT5 dashboard client.

/// Built-in server for demo accounts.
pub const MT5_DEMO_SERVER: &str = "MetaQuotes-Demo";

/// Built-in server for real accounts.
pub const MT5_REAL_SERVER: &str = "XMGlobal-Real 9";

/// Key under which the credential record is persisted.
pub const MT5_CREDENTIALS_KEY: &str = "mt5Credentials";

/// Default base URL of the dashboard backend.
pub const MT5_DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

pub const MT5_USER_AGENT: &str = "mt5-dashboard-client";

pub const INVALID_LOGIN_ID_MESSAGE: &str = "Login ID must be a positive integer";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Successfully connected to MT5";
pub const LOGIN_FAILED_MESSAGE: &str = "Failed to connect to MT5";
pub const DISCONNECT_SUCCESS_MESSAGE: &str = "Disconnected from MT5";
pub const DISCONNECT_FAILED_MESSAGE: &str = "Failed to disconnect";

/// Placeholder rendered for absent numeric account fields.
pub const MISSING_VALUE: &str = "-";
