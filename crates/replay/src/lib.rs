use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use common::{Candle, CandleSeries, MarketData, Result};

/// Simulated market-data source for offline runs.
///
/// Prices follow a fixed sinusoid-plus-drift curve over an internal clock
/// that advances one candle per fetch, so consecutive cycles see the
/// window slide exactly as a live feed would. No randomness and no
/// network: two instances fed the same fetch pattern produce identical
/// candles.
pub struct ReplayData {
    /// Price the synthetic curve oscillates around.
    base_price: f64,
    /// Peak deviation of the oscillation.
    amplitude: f64,
    /// Candles per full oscillation.
    wave_len: usize,
    /// Upward drift per candle.
    drift: f64,
    /// Open time of candle index 0.
    epoch: DateTime<Utc>,
    /// Number of fetches served so far; advances the window by one candle
    /// per fetch.
    fetches: RwLock<u64>,
}

impl ReplayData {
    pub fn new(base_price: f64, amplitude: f64, wave_len: usize, drift: f64) -> Self {
        assert!(wave_len >= 2, "replay wave length must be >= 2");
        info!(
            base_price,
            amplitude, wave_len, drift, "ReplayData initialized"
        );
        Self {
            base_price,
            amplitude,
            wave_len,
            drift,
            epoch: Utc
                .timestamp_opt(1_577_836_800, 0) // 2020-01-01T00:00:00Z
                .single()
                .expect("replay epoch is a valid timestamp"),
            fetches: RwLock::new(0),
        }
    }

    fn close_at(&self, t: u64) -> f64 {
        let phase = t as f64 * std::f64::consts::TAU / self.wave_len as f64;
        self.base_price + self.drift * t as f64 + self.amplitude * phase.sin()
    }

    fn candle_at(&self, t: u64) -> Candle {
        let close = self.close_at(t);
        let open = if t == 0 { close } else { self.close_at(t - 1) };
        // Small fixed wick beyond the candle body.
        let wick = self.amplitude * 0.01;
        Candle {
            open_time: self.epoch + Duration::seconds(t as i64 * 60),
            open,
            high: open.max(close) + wick,
            low: open.min(close) - wick,
            close,
            volume: 10.0 + (t % 7) as f64,
        }
    }
}

#[async_trait]
impl MarketData for ReplayData {
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<CandleSeries> {
        if limit == 0 {
            return CandleSeries::new(Vec::new());
        }

        let fetches = {
            let mut f = self.fetches.write().await;
            *f += 1;
            *f
        };

        // Newest candle index grows by one per fetch; the first fetch
        // already returns a full window.
        let newest = fetches + limit as u64;
        let start = newest - (limit as u64 - 1);

        debug!(%symbol, %interval, limit, newest, "Serving replay window");
        let candles = (start..=newest).map(|t| self.candle_at(t)).collect();
        CandleSeries::new(candles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> ReplayData {
        ReplayData::new(30_000.0, 150.0, 120, 0.5)
    }

    #[tokio::test]
    async fn fetch_returns_requested_window_length() {
        let data = source();
        let series = data.fetch_candles("BTCUSDT", "1m", 500).await.unwrap();
        assert_eq!(series.len(), 500);
    }

    #[tokio::test]
    async fn window_slides_one_candle_per_fetch() {
        let data = source();
        let first = data.fetch_candles("BTCUSDT", "1m", 50).await.unwrap();
        let second = data.fetch_candles("BTCUSDT", "1m", 50).await.unwrap();

        let first_newest = *first.open_times().last().unwrap();
        let second_newest = *second.open_times().last().unwrap();
        assert!(second_newest > first_newest);
        // Overlapping region is identical: the second window starts one
        // candle after the first.
        assert_eq!(first.candles()[1..], second.candles()[..49]);
    }

    #[tokio::test]
    async fn identical_fetch_patterns_are_deterministic() {
        let a = source();
        let b = source();
        for _ in 0..3 {
            let sa = a.fetch_candles("BTCUSDT", "1m", 30).await.unwrap();
            let sb = b.fetch_candles("BTCUSDT", "1m", 30).await.unwrap();
            assert_eq!(sa, sb);
        }
    }

    #[tokio::test]
    async fn candles_respect_ohlc_bounds() {
        let data = source();
        let series = data.fetch_candles("BTCUSDT", "1m", 200).await.unwrap();
        for c in series.candles() {
            assert!(c.low <= c.open && c.open <= c.high, "open outside range");
            assert!(c.low <= c.close && c.close <= c.high, "close outside range");
            assert!(c.low < c.high);
            assert!(c.volume >= 0.0);
            assert!(c.close > 0.0);
        }
    }

    #[tokio::test]
    async fn zero_limit_yields_empty_series() {
        let data = source();
        let series = data.fetch_candles("BTCUSDT", "1m", 0).await.unwrap();
        assert!(series.is_empty());
    }
}
