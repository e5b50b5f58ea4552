use config::{Config, ConfigError, Environment, File};
use log::LevelFilter;
use serde::Deserialize;

use crate::export::{ExportFormat, ReportRange};

/// Orchestrator timing configuration.
///
/// The latencies emulate a network round trip so loading states are visible:
/// - Load: initial snapshot on startup
/// - Filter: snapshot regenerated after a filter change
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    #[serde(default = "default_load_latency_ms")]
    pub load_latency_ms: u64,
    #[serde(default = "default_filter_latency_ms")]
    pub filter_latency_ms: u64,
    /// How often the binary regenerates the snapshot
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            load_latency_ms: default_load_latency_ms(),
            filter_latency_ms: default_filter_latency_ms(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

fn default_load_latency_ms() -> u64 {
    1_000
}

fn default_filter_latency_ms() -> u64 {
    500
}

fn default_refresh_interval_secs() -> u64 {
    30
}

/// Mock data generator configuration.
///
/// Setting `seed` pins the random source so every run produces the same
/// sequence of snapshots.
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_order_count")]
    pub order_count: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: None,
            order_count: default_order_count(),
        }
    }
}

fn default_order_count() -> usize {
    20
}

/// Report export configuration.
///
/// When enabled, the binary exports one report after the first successful load.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ExportSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub date_range: ReportRange,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingSettings {
    /// Parsed level, falling back to `Info` for unknown names.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Root application configuration.
///
/// Loaded from an optional `config.yaml` at startup, then overridden by
/// `ANALYTIX__SECTION__KEY` environment variables.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("ANALYTIX").separator("__"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}
