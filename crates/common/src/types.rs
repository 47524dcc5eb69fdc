use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One OHLCV observation for a single candle interval.
///
/// Produced in bulk by a `MarketData` source on every refresh cycle and
/// discarded when the cycle ends. Consumers assume
/// `low <= open, close <= high`; the upstream exchange does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Candle open time. Strictly increasing within a series.
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// An ordered run of candles, ascending by `open_time`, no duplicates.
///
/// Construction validates the ordering once so indicator code downstream
/// can index freely without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries(Vec<Candle>);

impl CandleSeries {
    /// Validate and wrap a candle vector (oldest first).
    /// Returns `Error::Series` on out-of-order or duplicate timestamps.
    pub fn new(candles: Vec<Candle>) -> Result<Self> {
        for pair in candles.windows(2) {
            if pair[1].open_time <= pair[0].open_time {
                return Err(Error::Series(format!(
                    "candle timestamps not strictly increasing: {} then {}",
                    pair[0].open_time, pair[1].open_time
                )));
            }
        }
        Ok(Self(candles))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn candles(&self) -> &[Candle] {
        &self.0
    }

    /// Close prices, oldest first. The only column the indicator engine reads.
    pub fn closes(&self) -> Vec<f64> {
        self.0.iter().map(|c| c.close).collect()
    }

    pub fn open_times(&self) -> Vec<DateTime<Utc>> {
        self.0.iter().map(|c| c.open_time).collect()
    }
}

/// Discrete per-candle trading signal derived from the RSI thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Buy => write!(f, "buy"),
            Signal::Sell => write!(f, "sell"),
            Signal::Hold => write!(f, "hold"),
        }
    }
}

/// Everything a renderer needs for one refresh cycle.
///
/// All columns are index-aligned with the candle series that produced them;
/// warm-up positions carry `None`, never a NaN sentinel. Edge index lists
/// are ascending and refer to positions in these columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub symbol: String,
    pub open_times: Vec<DateTime<Utc>>,
    pub closes: Vec<f64>,
    pub rsi: Vec<Option<f64>>,
    pub macd_line: Vec<Option<f64>>,
    pub signal_line: Vec<Option<f64>>,
    pub signals: Vec<Signal>,
    /// Positions where the signal newly became `Buy`. Shared by the price
    /// chart and the MACD overlay; only the y-values differ per chart.
    pub buy_edges: Vec<usize>,
    /// Positions where the signal newly became `Sell`.
    pub sell_edges: Vec<usize>,
}

impl ChartFrame {
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

/// Where candle data comes from: the real exchange or the offline replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Live,
    Replay,
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceMode::Live => write!(f, "live"),
            SourceMode::Replay => write!(f, "replay"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn candle(ms: i64, close: f64) -> Candle {
        Candle {
            open_time: Utc.timestamp_millis_opt(ms).single().unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1.0,
        }
    }

    #[test]
    fn series_accepts_strictly_increasing_timestamps() {
        let series =
            CandleSeries::new(vec![candle(0, 10.0), candle(60_000, 11.0), candle(120_000, 12.0)])
                .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn series_rejects_duplicate_timestamps() {
        let result = CandleSeries::new(vec![candle(0, 10.0), candle(0, 11.0)]);
        assert!(matches!(result, Err(Error::Series(_))));
    }

    #[test]
    fn series_rejects_decreasing_timestamps() {
        let result = CandleSeries::new(vec![candle(60_000, 10.0), candle(0, 11.0)]);
        assert!(matches!(result, Err(Error::Series(_))));
    }

    #[test]
    fn empty_series_is_valid() {
        let series = CandleSeries::new(Vec::new()).unwrap();
        assert!(series.is_empty());
    }
}
