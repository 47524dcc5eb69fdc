pub mod ema;
pub mod macd;
pub mod rsi;

pub use macd::{Macd, MacdSeries};
pub use rsi::Rsi;

/// Per-candle indicator columns, index-aligned with the input series.
///
/// Warm-up positions carry `None`. A too-short input yields columns of the
/// same length composed entirely of `None`; nothing here ever fails.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub rsi: Vec<Option<f64>>,
    pub macd_line: Vec<Option<f64>>,
    pub signal_line: Vec<Option<f64>>,
}
