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

//! HTTP client for the MT5 dashboard backend.
//!
//! - `Mt5HttpInnerClient`: low-level client that owns the `reqwest::Client`
//!   and speaks JSON to the backend routes (`/mt5/*`, `/trading/*`,
//!   `/backtest/*`, `/logs/*`).
//! - `Mt5HttpClient`: clonable wrapper exposing one method per route and
//!   implementing [`Mt5Backend`] for the session controller.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    common::consts::MT5_USER_AGENT,
    config::Mt5DashboardConfig,
    http::{
        error::Mt5HttpError,
        models::{AccountInfo, LoginRequest, StatusResponse},
        query::{
            AccountHistoryParams, BacktestParams, HistoryParams, OrderParams, PositionsParams,
            RatesParams, StrategyParams, SymbolParams, SystemLogsParams, TicksParams,
            TradeLogsParams,
        },
    },
    session::backend::Mt5Backend,
};

// Low-level MT5 HTTP client (inner)
#[derive(Debug)]
pub struct Mt5HttpInnerClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Clone)]
pub struct Mt5HttpClient {
    inner: Arc<Mt5HttpInnerClient>,
}

impl Mt5HttpInnerClient {
    pub fn new(config: &Mt5DashboardConfig) -> Result<Self, Mt5HttpError> {
        let mut builder = reqwest::Client::builder().user_agent(MT5_USER_AGENT);

        if let Some(secs) = config.http_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Mt5HttpError::RequestError(format!("Invalid proxy: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Mt5HttpError::ConnectionError(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "Sending request");
        self.client.request(method, url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Mt5HttpError> {
        let resp = request.send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;

        if !(200..300).contains(&status) {
            tracing::debug!(status, "Backend returned error status");
            return Err(Mt5HttpError::from_response_body(status, &text));
        }

        // Acknowledgement routes may answer with an empty body.
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text)
            .map_err(|e| Mt5HttpError::JsonDecodeError(format!("Invalid JSON response: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Mt5HttpError> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, Mt5HttpError> {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Mt5HttpError> {
        self.send(self.request(Method::POST, path)).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Mt5HttpError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn http_initialize(&self) -> Result<Value, Mt5HttpError> {
        self.post_empty("/mt5/initialize").await
    }

    pub async fn http_login(&self, request: &LoginRequest) -> Result<Value, Mt5HttpError> {
        self.post_json("/mt5/login", request).await
    }

    pub async fn http_shutdown(&self) -> Result<Value, Mt5HttpError> {
        self.post_empty("/mt5/shutdown").await
    }

    pub async fn http_status(&self) -> Result<StatusResponse, Mt5HttpError> {
        self.get_json("/mt5/status").await
    }

    pub async fn http_account_info(&self) -> Result<AccountInfo, Mt5HttpError> {
        self.get_json("/mt5/account").await
    }

    pub async fn http_symbol_info(&self, params: &SymbolParams) -> Result<Value, Mt5HttpError> {
        self.post_json("/mt5/symbol", params).await
    }

    pub async fn http_rates(&self, params: &RatesParams) -> Result<Value, Mt5HttpError> {
        self.post_json("/mt5/rates", params).await
    }

    pub async fn http_ticks(&self, params: &TicksParams) -> Result<Value, Mt5HttpError> {
        self.post_json("/mt5/ticks", params).await
    }

    pub async fn http_order_send(&self, params: &OrderParams) -> Result<Value, Mt5HttpError> {
        self.post_json("/trading/order", params).await
    }

    pub async fn http_positions(&self, params: &PositionsParams) -> Result<Value, Mt5HttpError> {
        self.post_json("/trading/positions", params).await
    }

    pub async fn http_history(&self, params: &HistoryParams) -> Result<Value, Mt5HttpError> {
        self.post_json("/trading/history", params).await
    }

    pub async fn http_order_types(&self) -> Result<Value, Mt5HttpError> {
        self.get_json("/trading/order-types").await
    }

    pub async fn http_trade_actions(&self) -> Result<Value, Mt5HttpError> {
        self.get_json("/trading/trade-actions").await
    }

    pub async fn http_add_strategy(&self, params: &StrategyParams) -> Result<Value, Mt5HttpError> {
        self.post_json("/backtest/strategy", params).await
    }

    pub async fn http_run_backtest(&self, params: &BacktestParams) -> Result<Value, Mt5HttpError> {
        self.post_json("/backtest/run", params).await
    }

    pub async fn http_backtest_results(&self, strategy_id: &str) -> Result<Value, Mt5HttpError> {
        self.get_json(&format!("/backtest/results/{strategy_id}")).await
    }

    pub async fn http_strategies(&self) -> Result<Value, Mt5HttpError> {
        self.get_json("/backtest/strategies").await
    }

    pub async fn http_trade_logs(&self, params: &TradeLogsParams) -> Result<Value, Mt5HttpError> {
        self.get_json_with_query("/logs/trades", params).await
    }

    pub async fn http_account_history(
        &self,
        params: &AccountHistoryParams,
    ) -> Result<Value, Mt5HttpError> {
        self.get_json_with_query("/logs/account", params).await
    }

    pub async fn http_system_logs(&self, params: &SystemLogsParams) -> Result<Value, Mt5HttpError> {
        self.get_json_with_query("/logs/system", params).await
    }
}

impl Mt5HttpClient {
    pub fn new(config: &Mt5DashboardConfig) -> Result<Self, Mt5HttpError> {
        let inner = Mt5HttpInnerClient::new(config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub async fn symbol_info(&self, symbol: impl Into<String>) -> Result<Value, Mt5HttpError> {
        let params = SymbolParams {
            symbol: symbol.into(),
        };
        self.inner.http_symbol_info(&params).await
    }

    pub async fn rates(&self, params: &RatesParams) -> Result<Value, Mt5HttpError> {
        self.inner.http_rates(params).await
    }

    pub async fn ticks(&self, params: &TicksParams) -> Result<Value, Mt5HttpError> {
        self.inner.http_ticks(params).await
    }

    pub async fn order_send(&self, params: &OrderParams) -> Result<Value, Mt5HttpError> {
        self.inner.http_order_send(params).await
    }

    pub async fn positions(&self, symbol: Option<String>) -> Result<Value, Mt5HttpError> {
        self.inner.http_positions(&PositionsParams { symbol }).await
    }

    pub async fn history(&self, params: &HistoryParams) -> Result<Value, Mt5HttpError> {
        self.inner.http_history(params).await
    }

    pub async fn order_types(&self) -> Result<Value, Mt5HttpError> {
        self.inner.http_order_types().await
    }

    pub async fn trade_actions(&self) -> Result<Value, Mt5HttpError> {
        self.inner.http_trade_actions().await
    }

    pub async fn add_strategy(&self, params: &StrategyParams) -> Result<Value, Mt5HttpError> {
        self.inner.http_add_strategy(params).await
    }

    pub async fn run_backtest(&self, params: &BacktestParams) -> Result<Value, Mt5HttpError> {
        self.inner.http_run_backtest(params).await
    }

    pub async fn backtest_results(&self, strategy_id: &str) -> Result<Value, Mt5HttpError> {
        self.inner.http_backtest_results(strategy_id).await
    }

    pub async fn strategies(&self) -> Result<Value, Mt5HttpError> {
        self.inner.http_strategies().await
    }

    pub async fn trade_logs(&self, params: &TradeLogsParams) -> Result<Value, Mt5HttpError> {
        self.inner.http_trade_logs(params).await
    }

    pub async fn account_history(
        &self,
        params: &AccountHistoryParams,
    ) -> Result<Value, Mt5HttpError> {
        self.inner.http_account_history(params).await
    }

    pub async fn system_logs(&self, params: &SystemLogsParams) -> Result<Value, Mt5HttpError> {
        self.inner.http_system_logs(params).await
    }
}

#[async_trait]
impl Mt5Backend for Mt5HttpClient {
    async fn initialize(&self) -> Result<(), Mt5HttpError> {
        self.inner.http_initialize().await.map(|_| ())
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), Mt5HttpError> {
        self.inner.http_login(request).await.map(|_| ())
    }

    async fn shutdown(&self) -> Result<(), Mt5HttpError> {
        self.inner.http_shutdown().await.map(|_| ())
    }

    async fn status(&self) -> Result<StatusResponse, Mt5HttpError> {
        self.inner.http_status().await
    }

    async fn account_info(&self) -> Result<AccountInfo, Mt5HttpError> {
        self.inner.http_account_info().await
    }
}
