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

//! Command line front end for the MT5 dashboard session.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mt5_dashboard::{
    common::enums::AccountType,
    session::{Notice, SessionController},
    FileCredentialStore, Mt5DashboardConfig, Mt5HttpClient,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mt5-dashboard", version, about = "MT5 dashboard session client")]
struct Cli {
    /// Backend base URL, including the `/api` prefix.
    #[arg(long, env = "MT5_DASHBOARD_URL", default_value = mt5_dashboard::MT5_DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory holding the saved credential record.
    #[arg(long, env = "MT5_DASHBOARD_CREDENTIALS_DIR")]
    credentials_dir: Option<PathBuf>,

    /// Request timeout in seconds; none by default.
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the connection status and account snapshot.
    Status,
    /// Log in, using saved credentials for any field not given.
    Login {
        #[arg(long)]
        login: Option<String>,
        #[arg(long, env = "MT5_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        account_type: Option<AccountType>,
        /// Save the login id and server for next time.
        #[arg(long)]
        save: bool,
        /// Also save the password (requires --save).
        #[arg(long, requires = "save")]
        persist_password: bool,
    },
    /// Disconnect from MT5.
    Logout {
        /// Also delete the saved credentials.
        #[arg(long)]
        forget: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = Mt5DashboardConfig {
        base_url: cli.base_url,
        http_timeout_secs: cli.timeout,
        proxy: None,
        credentials_dir: cli.credentials_dir,
    };
    config.validate()?;

    let client = Mt5HttpClient::new(&config)?;
    let store = FileCredentialStore::from_config(&config)?;
    let mut session = SessionController::new(client, store);
    session.mount().await;

    let result = match cli.command {
        Command::Status => Ok(()),
        Command::Login {
            login,
            password,
            server,
            account_type,
            save,
            persist_password,
        } => {
            if let Some(account_type) = account_type {
                session.set_account_type(account_type);
            }
            let form = session.form_mut();
            if let Some(login) = login {
                form.login = login;
            }
            if let Some(password) = password {
                form.password = password;
            }
            if let Some(server) = server {
                form.server = server;
            }
            if save {
                session.set_save_credentials(true)?;
                session.set_persist_password(persist_password);
            }
            session.login().await
        }
        Command::Logout { forget } => {
            if forget {
                session.disconnect_and_forget().await
            } else {
                session.disconnect().await
            }
        }
    };

    print_state(&session);
    result.map_err(Into::into)
}

fn print_state<B, S>(session: &SessionController<B, S>)
where
    B: mt5_dashboard::Mt5Backend,
    S: mt5_dashboard::CredentialStore,
{
    let state = session.state();
    if let Some(notice) = &state.notice {
        match notice {
            Notice::Success(msg) => println!("{msg}"),
            Notice::Error(msg) => eprintln!("Error: {msg}"),
        }
    }

    println!("Status:       {}", state.status());
    if let Some(info) = state.account_info() {
        println!("Account:      {}", info.login_display());
        println!("Balance:      {}", info.balance_display());
        println!("Equity:       {}", info.equity_display());
        println!("Profit:       {}", info.profit_display());
        println!("Margin level: {}", info.margin_level_display());
    }
}
