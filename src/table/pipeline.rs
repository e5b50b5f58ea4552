//! Search filter → stable sort → pagination.
//!
//! Every stage borrows its input and returns a fresh result, so the pipeline
//! can run against any snapshot without touching shared state. It is total:
//! unknown sort keys, empty pages and a zero page size all yield a result
//! rather than an error.

use serde::{Deserialize, Serialize};

use super::record::compare_cells;
use super::TableRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}

/// One page of pipeline output.
#[derive(Debug)]
pub struct TablePage<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<R> TablePage<'_, R> {
    /// 1-based (first, last) entry numbers on this page, for
    /// "Showing X to Y of Z entries". `None` when the page is empty.
    pub fn entry_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let start = self.page.saturating_sub(1) * self.page_size;
        Some((start + 1, start + self.rows.len()))
    }
}

/// Keep records where any field contains `query`, case-insensitively.
///
/// An empty query keeps everything. Relative order is preserved.
pub fn filter_records<'a, R: TableRecord>(records: &'a [R], query: &str) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .fields()
                .iter()
                .any(|(_, value)| value.to_lowercase_string().contains(&needle))
        })
        .collect()
}

/// Stable sort by the value at `sort.key`.
///
/// Records with equal keys keep their relative order in both directions.
pub fn sort_records<R: TableRecord>(rows: &mut [&R], sort: &SortSpec) {
    rows.sort_by(|a, b| {
        let ord = compare_cells(
            a.field(&sort.key).as_ref(),
            b.field(&sort.key).as_ref(),
        );
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Slice out page `page` (1-based) of `page_size` rows.
///
/// Pages past the end come back empty; the page number is never clamped.
pub fn paginate<'a, R>(rows: Vec<&'a R>, page: usize, page_size: usize) -> TablePage<'a, R> {
    let total_matched = rows.len();

    if page_size == 0 {
        return TablePage {
            rows: Vec::new(),
            total_matched,
            total_pages: 0,
            page,
            page_size,
        };
    }

    let total_pages = total_matched.div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);

    let rows = rows.into_iter().skip(start).take(page_size).collect();

    TablePage {
        rows,
        total_matched,
        total_pages,
        page,
        page_size,
    }
}

/// Run the full pipeline over `records`.
pub fn apply<'a, R: TableRecord>(
    records: &'a [R],
    query: &str,
    sort: Option<&SortSpec>,
    page: usize,
    page_size: usize,
) -> TablePage<'a, R> {
    let mut rows = filter_records(records, query);

    if let Some(sort) = sort {
        sort_records(&mut rows, sort);
    }

    paginate(rows, page, page_size)
}
