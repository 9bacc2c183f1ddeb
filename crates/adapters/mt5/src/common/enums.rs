//! Enumerations for the MT5 dashboard client.

use serde::{Deserialize, Serialize};

use crate::common::consts::{MT5_DEMO_SERVER, MT5_REAL_SERVER};

/// Trading account classification selected by the demo/real toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Demo,
    Real,
}

impl AccountType {
    /// Returns the well-known server for this account type.
    pub fn default_server(self) -> &'static str {
        match self {
            AccountType::Demo => MT5_DEMO_SERVER,
            AccountType::Real => MT5_REAL_SERVER,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Demo => write!(f, "demo"),
            AccountType::Real => write!(f, "real"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(AccountType::Demo),
            "real" => Ok(AccountType::Real),
            other => Err(format!("unknown account type: {other}")),
        }
    }
}

/// Connection lifecycle of a dashboard session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
}

impl ConnectionStatus {
    /// True while a login or disconnect call is outstanding.
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            ConnectionStatus::Connecting | ConnectionStatus::Disconnecting
        )
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStatus::Disconnected => write!(f, "DISCONNECTED"),
            ConnectionStatus::Connecting => write!(f, "CONNECTING"),
            ConnectionStatus::Connected => write!(f, "CONNECTED"),
            ConnectionStatus::Disconnecting => write!(f, "DISCONNECTING"),
        }
    }
}
