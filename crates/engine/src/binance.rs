use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use common::{Candle, CandleSeries, Error, MarketData, Result};

const BASE_URL: &str = "https://api.binance.com";

/// REST market-data client for Binance. Pulls the most recent klines for
/// one symbol/interval per refresh cycle.
pub struct BinanceData {
    http: Client,
    /// Sent as `X-MBX-APIKEY` when present. The kline endpoint is public,
    /// so requests work without it.
    api_key: Option<String>,
}

impl BinanceData {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: Client::builder()
                .use_rustls_tls()
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl MarketData for BinanceData {
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<CandleSeries> {
        let url =
            format!("{BASE_URL}/api/v3/klines?symbol={symbol}&interval={interval}&limit={limit}");
        debug!(%symbol, %interval, limit, "Fetching klines from Binance");

        let mut req = self.http.get(&url);
        if let Some(key) = &self.api_key {
            req = req.header("X-MBX-APIKEY", key);
        }

        let resp = req.send().await.map_err(|e| Error::Http(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Exchange(format!("HTTP {status}: {body}")));
        }

        parse_klines(&body)
    }
}

// ─── Binance kline JSON parsing ──────────────────────────────────────────────

/// Parse a kline response body into a validated series.
///
/// Each row is a JSON array,
/// `[openTime, open, high, low, close, volume, closeTime, ...]`,
/// with prices and volume encoded as strings.
fn parse_klines(body: &str) -> Result<CandleSeries> {
    let rows: Vec<Vec<Value>> = serde_json::from_str(body)?;

    let mut candles = Vec::with_capacity(rows.len());
    for row in rows {
        if row.len() < 6 {
            return Err(Error::Exchange(format!(
                "kline row too short: {} fields",
                row.len()
            )));
        }

        let open_time_ms = row[0]
            .as_i64()
            .ok_or_else(|| Error::Exchange("kline open time is not an integer".into()))?;
        let open_time: DateTime<Utc> = Utc
            .timestamp_millis_opt(open_time_ms)
            .single()
            .ok_or_else(|| {
                Error::Exchange(format!("kline open time out of range: {open_time_ms}"))
            })?;

        candles.push(Candle {
            open_time,
            open: field_f64(&row[1], "open")?,
            high: field_f64(&row[2], "high")?,
            low: field_f64(&row[3], "low")?,
            close: field_f64(&row[4], "close")?,
            volume: field_f64(&row[5], "volume")?,
        });
    }

    CandleSeries::new(candles)
}

fn field_f64(value: &Value, name: &str) -> Result<f64> {
    value
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| Error::Exchange(format!("kline {name} is not a numeric string: {value}")))
}
