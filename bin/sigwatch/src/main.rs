use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use analysis::MonitorFileConfig;
use common::{Config, FrameSink, MarketData, SourceMode};
use engine::{BinanceData, Monitor};
use render::LogSink;
use replay::ReplayData;

#[tokio::main]
async fn main() {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();
    let monitor_cfg = MonitorFileConfig::load(&cfg.monitor_config_path).monitor;
    info!(
        mode = %cfg.source_mode,
        symbol = %monitor_cfg.symbol,
        interval = %monitor_cfg.interval,
        "SigWatch starting"
    );

    // ── Data source (injected based on SIGWATCH_SOURCE) ───────────────────────
    let source: Arc<dyn MarketData> = match cfg.source_mode {
        SourceMode::Live => {
            info!("Live mode — polling Binance REST");
            Arc::new(BinanceData::new(cfg.binance_api_key.clone()))
        }
        SourceMode::Replay => {
            info!("Replay mode — deterministic synthetic candles");
            Arc::new(ReplayData::new(30_000.0, 150.0, 120, 0.5))
        }
    };

    // ── Renderer sink ─────────────────────────────────────────────────────────
    let sink: Arc<dyn FrameSink> = Arc::new(LogSink::new());

    // ── Monitor loop ──────────────────────────────────────────────────────────
    let (monitor, handle) = Monitor::new(monitor_cfg, source, sink);
    let task = tokio::spawn(monitor.run());

    info!("Monitor started. Waiting for shutdown signal.");
    tokio::signal::ctrl_c().await.unwrap();
    info!("Shutdown signal received. Stopping monitor.");
    handle.stop();
    let _ = task.await;
}
