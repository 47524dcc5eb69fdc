pub mod config;
pub mod edges;
pub mod indicators;
pub mod pipeline;
pub mod signal;

pub use config::{IndicatorConfig, MonitorConfig, MonitorFileConfig};
pub use edges::{detect_edges, SignalEdges};
pub use indicators::{IndicatorFrame, Macd, MacdSeries, Rsi};
pub use pipeline::Pipeline;
pub use signal::{signal_at, signal_series, Thresholds};
