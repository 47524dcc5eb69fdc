pub mod binance;
pub mod monitor;

pub use binance::BinanceData;
pub use monitor::{Monitor, MonitorHandle};
