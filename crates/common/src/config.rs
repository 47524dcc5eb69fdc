use crate::SourceMode;

/// Deployment configuration loaded from environment variables at startup.
/// A malformed value causes an immediate panic with a clear message;
/// everything here has a sensible default for local runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// `live` polls the exchange, `replay` uses the offline source.
    pub source_mode: SourceMode,

    /// Optional API key sent with market-data requests. The kline endpoint
    /// is public, so requests work without it.
    pub binance_api_key: Option<String>,

    /// Path to the monitor TOML file (symbol, interval, indicator periods).
    pub monitor_config_path: String,
}

impl Config {
    /// Load all configuration from environment variables.
    /// Loads `.env` if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present

        let source_mode = match optional_env("SIGWATCH_SOURCE")
            .unwrap_or_else(|| "live".to_string())
            .to_lowercase()
            .as_str()
        {
            "live" => SourceMode::Live,
            "replay" => SourceMode::Replay,
            other => panic!("ERROR: SIGWATCH_SOURCE must be 'live' or 'replay', got: '{other}'"),
        };

        Config {
            source_mode,
            binance_api_key: optional_env("BINANCE_API_KEY").filter(|k| !k.is_empty()),
            monitor_config_path: optional_env("MONITOR_CONFIG_PATH")
                .unwrap_or_else(|| "config/monitor.toml".to_string()),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
