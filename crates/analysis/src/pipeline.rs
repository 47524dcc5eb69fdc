use tracing::debug;

use common::{CandleSeries, ChartFrame};

use crate::config::MonitorConfig;
use crate::edges::detect_edges;
use crate::indicators::{IndicatorFrame, Macd, Rsi};
use crate::signal::{signal_series, Thresholds};

/// The full candle-to-chart computation for one refresh cycle.
///
/// Stateless between runs: every cycle recomputes from the freshly
/// fetched window, so identical input always yields identical output.
#[derive(Debug, Clone)]
pub struct Pipeline {
    symbol: String,
    rsi: Rsi,
    macd: Macd,
    thresholds: Thresholds,
}

impl Pipeline {
    /// Build from the monitor config. Degenerate indicator periods panic
    /// here, at startup, before any cycle runs.
    pub fn from_config(cfg: &MonitorConfig) -> Self {
        let ind = &cfg.indicators;
        Self {
            symbol: cfg.symbol.clone(),
            rsi: Rsi::new(ind.rsi_period),
            macd: Macd::new(ind.macd_fast, ind.macd_slow, ind.macd_signal),
            thresholds: Thresholds {
                overbought: ind.overbought,
                oversold: ind.oversold,
            },
        }
    }

    /// Compute the indicator columns alone.
    pub fn indicators(&self, series: &CandleSeries) -> IndicatorFrame {
        let closes = series.closes();
        let macd = self.macd.series(&closes);
        IndicatorFrame {
            rsi: self.rsi.series(&closes),
            macd_line: macd.macd,
            signal_line: macd.signal,
        }
    }

    /// Run candles -> indicators -> signals -> edges and assemble the
    /// aligned frame for the renderer.
    pub fn run(&self, series: &CandleSeries) -> ChartFrame {
        let frame = self.indicators(series);
        let signals = signal_series(&frame.rsi, &self.thresholds);
        let edges = detect_edges(&signals);

        debug!(
            symbol = %self.symbol,
            candles = series.len(),
            buy_edges = edges.buy.len(),
            sell_edges = edges.sell.len(),
            "Pipeline cycle computed"
        );

        ChartFrame {
            symbol: self.symbol.clone(),
            open_times: series.open_times(),
            closes: series.closes(),
            rsi: frame.rsi,
            macd_line: frame.macd_line,
            signal_line: frame.signal_line,
            signals,
            buy_edges: edges.buy,
            sell_edges: edges.sell,
        }
    }
}
