use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Csv,
    Xls,
    Png,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [Self::Pdf, Self::Csv, Self::Xls, Self::Png];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Xls => "xls",
            Self::Png => "png",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF Document",
            Self::Csv => "CSV Spreadsheet",
            Self::Xls => "Excel Workbook",
            Self::Png => "PNG Image",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Period a report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportRange {
    #[serde(rename = "last7days")]
    Last7Days,
    #[default]
    #[serde(rename = "last30days")]
    Last30Days,
    #[serde(rename = "last90days")]
    Last90Days,
    #[serde(rename = "lastYear")]
    LastYear,
    #[serde(rename = "all")]
    All,
}

impl ReportRange {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 Days",
            Self::Last30Days => "Last 30 Days",
            Self::Last90Days => "Last 90 Days",
            Self::LastYear => "Last Year",
            Self::All => "All Time",
        }
    }
}

/// What goes into an exported report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub include_charts: bool,
    pub include_insights: bool,
    pub include_raw_data: bool,
    pub date_range: ReportRange,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_charts: true,
            include_insights: true,
            include_raw_data: false,
            date_range: ReportRange::Last30Days,
        }
    }
}

impl ExportOptions {
    /// Rows only, as used by the data table's quick export.
    pub fn raw_data_only() -> Self {
        Self {
            include_charts: false,
            include_insights: false,
            include_raw_data: true,
            ..Default::default()
        }
    }
}
