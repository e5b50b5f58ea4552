use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use feruca::Collator;

thread_local! {
    // Root-locale Unicode collation
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// A single field value as seen by the table pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Integer(i64),
    Float(f64),
    Text(&'a str),
    Date(NaiveDate),
}

impl CellValue<'_> {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Lower-cased string form used by search and by string comparison.
    pub fn to_lowercase_string(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// Compare two optional cell values.
///
/// Numeric pairs compare numerically. Anything else compares as lower-cased
/// strings in collation order (accents and punctuation sort the way a reader
/// expects, not by code point), with absent values treated as the empty
/// string.
pub fn compare_cells(a: Option<&CellValue<'_>>, b: Option<&CellValue<'_>>) -> Ordering {
    match (a, b) {
        (Some(CellValue::Integer(x)), Some(CellValue::Integer(y))) => x.cmp(y),
        (Some(x), Some(y)) if x.is_numeric() && y.is_numeric() => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        },
        _ => {
            let x = a.map(CellValue::to_lowercase_string).unwrap_or_default();
            let y = b.map(CellValue::to_lowercase_string).unwrap_or_default();
            COLLATOR.with(|collator| collator.borrow_mut().collate(&x, &y))
        },
    }
}

/// A row the pipeline can search and sort.
///
/// `fields` lists every value of the row, including ones no column displays;
/// search looks at all of them. `field` looks one up by key and returns `None`
/// for unknown keys or absent values.
pub trait TableRecord {
    fn fields(&self) -> Vec<(&'static str, CellValue<'_>)>;

    fn field(&self, key: &str) -> Option<CellValue<'_>> {
        self.fields()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}
