use serde::{Deserialize, Serialize};

/// Top-level monitor config file (TOML).
///
/// Example `config/monitor.toml`:
/// ```toml
/// [monitor]
/// symbol = "BTCUSDT"
/// interval = "1m"
/// refresh_secs = 15
/// history_limit = 500
///
/// [monitor.indicators]
/// rsi_period = 14
/// macd_fast = 12
/// macd_slow = 26
/// macd_signal = 9
/// overbought = 70.0
/// oversold = 30.0
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorFileConfig {
    pub monitor: MonitorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorConfig {
    /// Instrument symbol, e.g. "BTCUSDT".
    pub symbol: String,
    /// Candle interval, e.g. "1m".
    pub interval: String,
    /// Seconds between refresh cycles.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Number of recent candles pulled per cycle.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Indicator periods and signal thresholds.
    #[serde(default)]
    pub indicators: IndicatorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndicatorConfig {
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,
    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,
    /// RSI above this reads as overbought (sell zone).
    #[serde(default = "default_overbought")]
    pub overbought: f64,
    /// RSI below this reads as oversold (buy zone).
    #[serde(default = "default_oversold")]
    pub oversold: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: default_rsi_period(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
            overbought: default_overbought(),
            oversold: default_oversold(),
        }
    }
}

fn default_refresh_secs() -> u64 {
    15
}
fn default_history_limit() -> usize {
    500
}
fn default_rsi_period() -> usize {
    14
}
fn default_macd_fast() -> usize {
    12
}
fn default_macd_slow() -> usize {
    26
}
fn default_macd_signal() -> usize {
    9
}
fn default_overbought() -> f64 {
    70.0
}
fn default_oversold() -> f64 {
    30.0
}

impl MonitorFileConfig {
    /// Load from a TOML file. Exits process on error.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read monitor config at '{path}': {e}"));
        toml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse monitor config at '{path}': {e}"))
    }
}
