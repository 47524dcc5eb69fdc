use async_trait::async_trait;

use crate::{CandleSeries, Result};

/// Abstraction over the market-data feed.
///
/// `BinanceData` implements this against the live REST API.
/// `ReplayData` implements this for offline, deterministic runs.
///
/// A fetch returns the most recent `limit` candles, oldest first, already
/// validated into a `CandleSeries`. Any failure (connectivity, auth, rate
/// limit, malformed payload) is a per-cycle event: the monitor logs it and
/// waits for the next tick rather than crashing.
#[async_trait]
pub trait MarketData: Send + Sync {
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<CandleSeries>;
}
