use async_trait::async_trait;
use tracing::info;

use common::{ChartFrame, FrameSink, Result};

/// Renders each cycle's frame as structured log lines.
///
/// Stateless between calls: every render receives the complete frame and
/// nothing is carried over, so a dropped cycle leaves no stale output
/// behind.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FrameSink for LogSink {
    async fn render(&self, frame: &ChartFrame) -> Result<()> {
        if frame.is_empty() {
            info!(symbol = %frame.symbol, "No candles this cycle");
            return Ok(());
        }

        let last = frame.len() - 1;
        info!(
            symbol = %frame.symbol,
            candles = frame.len(),
            close = frame.closes[last],
            rsi = ?frame.rsi[last],
            macd = ?frame.macd_line[last],
            signal_line = ?frame.signal_line[last],
            signal = %frame.signals[last],
            buy_edges = frame.buy_edges.len(),
            sell_edges = frame.sell_edges.len(),
            "Cycle rendered"
        );

        // Call out a marker landing on the newest candle; older edges are
        // already visible in previous cycles' output.
        if frame.buy_edges.last() == Some(&last) {
            info!(symbol = %frame.symbol, price = frame.closes[last], "Buy marker at newest candle");
        }
        if frame.sell_edges.last() == Some(&last) {
            info!(symbol = %frame.symbol, price = frame.closes[last], "Sell marker at newest candle");
        }

        Ok(())
    }
}
