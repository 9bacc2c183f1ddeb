//! Request bodies and query parameters for the trading, backtest and log endpoints.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /mt5/symbol`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SymbolParams {
    pub symbol: String,
}

/// Body of `POST /mt5/rates`.
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[builder(setter(into), default)]
pub struct RatesParams {
    pub symbol: String,
    pub timeframe: u32,
    pub start_pos: u32,
    pub count: u32,
}

impl Default for RatesParams {
    fn default() -> Self {
        Self {
            symbol: "EURUSD".to_string(),
            // MT5 TIMEFRAME_H1
            timeframe: 16385,
            start_pos: 0,
            count: 100,
        }
    }
}

/// Body of `POST /mt5/ticks`.
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[builder(setter(into), default)]
pub struct TicksParams {
    pub symbol: String,
    pub count: u32,
}

impl Default for TicksParams {
    fn default() -> Self {
        Self {
            symbol: "EURUSD".to_string(),
            count: 100,
        }
    }
}

/// Body of `POST /trading/order`.
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[builder(setter(into))]
pub struct OrderParams {
    pub action: u32,
    pub symbol: String,
    pub volume: f64,
    pub order_type: u32,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl: Option<f64>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp: Option<f64>,
    #[builder(default = "20")]
    pub deviation: u32,
    #[builder(default = "234000")]
    pub magic: u64,
    #[builder(default)]
    pub comment: String,
}

impl OrderParams {
    pub fn builder() -> OrderParamsBuilder {
        OrderParamsBuilder::default()
    }
}

/// Body of `POST /trading/positions`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PositionsParams {
    pub symbol: Option<String>,
}

/// Body of `POST /trading/history`. The backend fills missing dates from `days`.
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[builder(setter(into), default)]
pub struct HistoryParams {
    #[builder(setter(into, strip_option))]
    pub from_date: Option<DateTime<Utc>>,
    #[builder(setter(into, strip_option))]
    pub to_date: Option<DateTime<Utc>>,
    pub days: u32,
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            from_date: None,
            to_date: None,
            days: 7,
        }
    }
}

/// Body of `POST /backtest/strategy`.
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[builder(setter(into))]
pub struct StrategyParams {
    pub strategy_id: String,
    pub name: String,
    #[builder(default)]
    pub description: String,
    #[builder(default)]
    pub parameters: Map<String, Value>,
}

impl StrategyParams {
    pub fn builder() -> StrategyParamsBuilder {
        StrategyParamsBuilder::default()
    }
}

/// Body of `POST /backtest/run`.
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[builder(setter(into))]
pub struct BacktestParams {
    pub strategy_id: String,
    pub symbol: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[builder(default = "10000.0")]
    pub initial_capital: f64,
}

impl BacktestParams {
    pub fn builder() -> BacktestParamsBuilder {
        BacktestParamsBuilder::default()
    }
}

/// Query of `GET /logs/trades`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TradeLogsParams {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Default for TradeLogsParams {
    fn default() -> Self {
        Self {
            limit: 100,
            symbol: None,
        }
    }
}

/// Query of `GET /logs/account`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccountHistoryParams {
    pub limit: u32,
    pub days: u32,
}

impl Default for AccountHistoryParams {
    fn default() -> Self {
        Self { limit: 100, days: 7 }
    }
}

/// Query of `GET /logs/system`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SystemLogsParams {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Default for SystemLogsParams {
    fn default() -> Self {
        Self {
            limit: 100,
            level: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_order_builder_defaults() {
        let order = OrderParams::builder()
            .action(1_u32)
            .symbol("EURUSD")
            .volume(0.1)
            .order_type(0_u32)
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "action": 1,
                "symbol": "EURUSD",
                "volume": 0.1,
                "order_type": 0,
                "deviation": 20,
                "magic": 234000,
                "comment": "",
            })
        );
    }

    #[test]
    fn test_rates_builder_overrides() {
        let params = RatesParamsBuilder::default()
            .symbol("GBPUSD")
            .count(50_u32)
            .build()
            .unwrap();
        assert_eq!(params.symbol, "GBPUSD");
        assert_eq!(params.count, 50);
        assert_eq!(params.start_pos, 0);
    }

    #[test]
    fn test_strategy_builder_defaults() {
        let strategy = StrategyParams::builder()
            .strategy_id("ma-cross")
            .name("MA cross")
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&strategy).unwrap(),
            json!({
                "strategy_id": "ma-cross",
                "name": "MA cross",
                "description": "",
                "parameters": {},
            })
        );
    }

    #[test]
    fn test_backtest_requires_dates() {
        let err = BacktestParams::builder()
            .strategy_id("ma-cross")
            .symbol("EURUSD")
            .build();
        assert!(err.is_err());
    }

    #[test]
    fn test_history_default_days() {
        let params = HistoryParams::default();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"from_date": null, "to_date": null, "days": 7})
        );
    }
}
