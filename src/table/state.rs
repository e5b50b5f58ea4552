use serde::{Deserialize, Serialize};

use super::{apply, find_column, Column, SortSpec, TablePage, TableRecord};

/// Rows shown per page. Not user-adjustable.
pub const PAGE_SIZE: usize = 5;

/// Search, sort and page selection for one data table.
///
/// Transition rules:
/// - a new search query always returns to page 1
/// - changing the sort column or direction keeps the current page
/// - page numbers below 1 are clamped to 1 here, not in the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    query: String,
    sort: Option<SortSpec>,
    page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page: 1,
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Sort by `key`, or flip the direction if already sorting by it.
    ///
    /// Returns false (and changes nothing) when `key` is not a sortable column.
    pub fn toggle_sort(&mut self, columns: &[Column], key: &str) -> bool {
        if !find_column(columns, key).is_some_and(|c| c.sortable) {
            return false;
        }

        self.sort = match self.sort.take() {
            Some(current) if current.key == key => {
                Some(SortSpec::new(current.key, current.direction.toggled()))
            },
            _ => Some(SortSpec::asc(key)),
        };
        true
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages).max(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Run the pipeline for the current state.
    pub fn view<'a, R: TableRecord>(&self, records: &'a [R]) -> TablePage<'a, R> {
        apply(records, &self.query, self.sort.as_ref(), self.page, PAGE_SIZE)
    }

    /// Placeholder text for a table with no visible rows.
    pub fn empty_message(&self) -> &'static str {
        if self.query.is_empty() {
            "No data available"
        } else {
            "No results found"
        }
    }
}
