pub mod config;
pub mod dashboard;
pub mod export;
pub mod generator;
pub mod models;
pub mod table;
pub mod utils;

pub use config::Settings;
pub use dashboard::Dashboard;
pub use generator::{MockDataGenerator, SnapshotSource};
pub use models::Snapshot;
