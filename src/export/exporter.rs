use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use super::{ExportFormat, ExportOptions};
use crate::models::Snapshot;

/// A single export request: format, options and the data to export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub options: &'a ExportOptions,
    #[serde(skip)]
    pub snapshot: &'a Snapshot,
}

impl ExportRequest<'_> {
    /// Number of table rows the report would carry.
    pub fn row_count(&self) -> usize {
        if self.options.include_raw_data {
            self.snapshot.table_data.len()
        } else {
            0
        }
    }
}

/// Receives export requests from the dashboard.
pub trait Exporter: Send + Sync {
    fn export(&self, request: &ExportRequest<'_>) -> Result<()>;
}

/// Exporter that writes the request to the log and produces no file.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogExporter;

impl Exporter for LogExporter {
    fn export(&self, request: &ExportRequest<'_>) -> Result<()> {
        let payload =
            serde_json::to_string(request).context("Failed to serialize export request")?;

        info!(
            "Exporting {} report ({} raw rows): {}",
            request.format,
            request.row_count(),
            payload
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_without_snapshot() {
        let snapshot = Snapshot::default();
        let options = ExportOptions::default();
        let request = ExportRequest {
            format: ExportFormat::Csv,
            options: &options,
            snapshot: &snapshot,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["format"], "csv");
        assert_eq!(json["options"]["includeCharts"], true);
        assert!(json.get("snapshot").is_none());

        assert!(LogExporter.export(&request).is_ok());
    }
}
