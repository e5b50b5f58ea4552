//! Application settings loaded from `config.yaml` and the environment.

mod settings;

pub use settings::{DashboardSettings, ExportSettings, GeneratorSettings, LoggingSettings, Settings};
