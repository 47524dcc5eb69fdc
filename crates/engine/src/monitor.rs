use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use analysis::{MonitorConfig, Pipeline};
use common::{FrameSink, MarketData};

/// Drives the fetch -> compute -> render cycle on a fixed interval.
///
/// Cycles never overlap: each tick awaits the full cycle, render handoff
/// included, before the next fetch starts, and missed ticks are delayed
/// rather than bunched. Nothing is cached between cycles; every tick
/// recomputes from a freshly pulled window.
pub struct Monitor {
    cfg: MonitorConfig,
    pipeline: Pipeline,
    source: Arc<dyn MarketData>,
    sink: Arc<dyn FrameSink>,
    shutdown_rx: watch::Receiver<bool>,
}

/// Cloneable handle used to stop the monitor loop.
#[derive(Clone)]
pub struct MonitorHandle {
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl MonitorHandle {
    /// Stop future cycles. An in-flight fetch completes or fails on its own.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

impl Monitor {
    pub fn new(
        cfg: MonitorConfig,
        source: Arc<dyn MarketData>,
        sink: Arc<dyn FrameSink>,
    ) -> (Self, MonitorHandle) {
        let pipeline = Pipeline::from_config(&cfg);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let monitor = Monitor {
            cfg,
            pipeline,
            source,
            sink,
            shutdown_rx,
        };
        let handle = MonitorHandle {
            shutdown_tx: Arc::new(shutdown_tx),
        };

        (monitor, handle)
    }

    /// Run the refresh loop until the handle signals shutdown.
    /// Call from `tokio::spawn`. The first cycle runs immediately.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(Duration::from_secs(self.cfg.refresh_secs.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            symbol = %self.cfg.symbol,
            interval = %self.cfg.interval,
            refresh_secs = self.cfg.refresh_secs,
            "Monitor running"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => self.cycle().await,
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        info!(symbol = %self.cfg.symbol, "Monitor stopping, no further cycles");
                        return;
                    }
                }
            }
        }
    }

    /// One refresh cycle. Any failure skips the cycle entirely; the loop
    /// waits for the next tick with no partial output.
    async fn cycle(&self) {
        let series = match self
            .source
            .fetch_candles(&self.cfg.symbol, &self.cfg.interval, self.cfg.history_limit)
            .await
        {
            Ok(series) => series,
            Err(e) => {
                warn!(symbol = %self.cfg.symbol, error = %e, "Candle fetch failed, skipping cycle");
                return;
            }
        };

        let frame = self.pipeline.run(&series);
        if let Err(e) = self.sink.render(&frame).await {
            warn!(symbol = %self.cfg.symbol, error = %e, "Renderer rejected frame");
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
