use serde::Serialize;

use crate::models::OrderRecord;
use crate::table::{CellValue, Column, SortDirection, TableState};
use crate::utils::{format_currency, format_number};

fn render_currency(value: &CellValue<'_>) -> String {
    match value.as_f64() {
        Some(amount) => format_currency(amount),
        None => value.to_string(),
    }
}

fn render_count(value: &CellValue<'_>) -> String {
    match value {
        CellValue::Integer(n) => format_number(*n),
        other => other.to_string(),
    }
}

/// Visible columns of the order table. `id` is searchable but not shown.
pub const ORDER_COLUMNS: [Column; 5] = [
    Column::new("date", "Date"),
    Column::new("product", "Product"),
    Column::new("revenue", "Revenue").with_render(render_currency),
    Column::new("units", "Units").with_render(render_count),
    Column::new("status", "Status"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    /// Direction when this column is the active sort.
    pub sorted: Option<SortDirection>,
}

/// Owned, rendered page of the order table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<OrderRecord>,
    /// Rendered text per row, one entry per column.
    pub cells: Vec<Vec<String>>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub page: usize,
    pub entry_range: Option<(usize, usize)>,
    /// Set when there are no rows to show.
    pub empty_message: Option<&'static str>,
}

impl TableView {
    pub fn build(state: &TableState, records: &[OrderRecord], columns: &[Column]) -> Self {
        let page = state.view(records);

        let headers = columns
            .iter()
            .map(|c| ColumnHeader {
                key: c.key,
                label: c.label,
                sortable: c.sortable,
                sorted: state
                    .sort()
                    .filter(|s| s.key == c.key)
                    .map(|s| s.direction),
            })
            .collect();

        let cells = page
            .rows
            .iter()
            .map(|row| columns.iter().map(|c| c.render_cell(*row)).collect())
            .collect();

        let empty_message = if page.rows.is_empty() {
            Some(state.empty_message())
        } else {
            None
        };

        Self {
            columns: headers,
            rows: page.rows.iter().map(|r| (*r).clone()).collect(),
            cells,
            total_matched: page.total_matched,
            total_pages: page.total_pages,
            page: page.page,
            entry_range: page.entry_range(),
            empty_message,
        }
    }

    /// "Showing X to Y of Z entries", when there is anything to show.
    pub fn summary(&self) -> Option<String> {
        self.entry_range.map(|(first, last)| {
            format!(
                "Showing {} to {} of {} entries",
                first, last, self.total_matched
            )
        })
    }
}
