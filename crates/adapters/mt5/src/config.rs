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

//! Configuration for the MT5 dashboard client.
//!
//! The client configures no request timeout by default: a login runs until the
//! backend answers or the transport fails.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    common::consts::MT5_DEFAULT_BASE_URL,
    error::{Mt5Error, Mt5Result},
};

/// Main configuration for the dashboard client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mt5DashboardConfig {
    /// Base URL of the dashboard backend, including the `/api` prefix.
    pub base_url: String,
    /// Optional HTTP timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_timeout_secs: Option<u64>,
    /// Optional proxy URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// Directory of the credential file; the platform config dir when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials_dir: Option<PathBuf>,
}

impl Default for Mt5DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: MT5_DEFAULT_BASE_URL.to_string(),
            http_timeout_secs: None,
            proxy: None,
            credentials_dir: None,
        }
    }
}

impl Mt5DashboardConfig {
    /// Creates a new configuration pointing at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Checks that the URLs parse and the timeout is usable.
    pub fn validate(&self) -> Mt5Result<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| Mt5Error::ConfigError(format!("base_url {:?}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Mt5Error::ConfigError(format!(
                "base_url must be http or https, was {}",
                url.scheme()
            )));
        }
        if let Some(proxy) = &self.proxy {
            url::Url::parse(proxy)
                .map_err(|e| Mt5Error::ConfigError(format!("proxy {proxy:?}: {e}")))?;
        }
        if self.http_timeout_secs == Some(0) {
            return Err(Mt5Error::ConfigError(
                "http_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Mt5DashboardConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.http_timeout_secs, None);
        assert_eq!(config.proxy, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_with_base_url() {
        let config = Mt5DashboardConfig::with_base_url("http://custom:8080/api/");
        assert_eq!(config.base_url(), "http://custom:8080/api");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Mt5DashboardConfig::with_base_url("not a url").validate().is_err());
        assert!(Mt5DashboardConfig::with_base_url("ftp://host").validate().is_err());

        let config = Mt5DashboardConfig {
            http_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Mt5Error::ConfigError(_))));
    }

    #[test]
    fn test_config_deserializes_partial() {
        let config: Mt5DashboardConfig =
            serde_json::from_str(r#"{"http_timeout_secs": 15}"#).unwrap();
        assert_eq!(config.http_timeout_secs, Some(15));
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }
}
