use crate::dashboard::DashboardConfig;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial values of the dashboard controls.
    pub dashboard: DashboardConfig,
    pub provider: ProviderSettings,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

/// Which market-data source backs the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// The Yahoo Finance chart endpoint.
    #[default]
    Yahoo,
    /// One `<SYMBOL>.csv` file per symbol in a local directory.
    Csv,
}

/// Contains parameters for the market-data provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// Base URL of the chart API (Yahoo provider only).
    pub base_url: String,
    /// The benchmark index symbol (e.g., "^GSPC").
    pub benchmark_symbol: String,
    /// Human-readable benchmark name used as a chart and table label.
    pub benchmark_label: String,
    /// How much price history is requested per symbol (e.g., "1y", "6mo").
    pub history_range: String,
    /// Directory holding `<SYMBOL>.csv` files (CSV provider only).
    pub csv_dir: PathBuf,
    /// Per-request timeout for remote providers.
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Yahoo,
            base_url: "https://query1.finance.yahoo.com".to_string(),
            benchmark_symbol: "^GSPC".to_string(),
            benchmark_label: "S&P500".to_string(),
            history_range: "1y".to_string(),
            csv_dir: PathBuf::from("data"),
            timeout_secs: 10,
        }
    }
}

/// Contains parameters for the HTTP surface.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Contains parameters for log output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub filter: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
        }
    }
}
