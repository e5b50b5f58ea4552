//! Display formatting for metric values.
//!
//! Output mirrors en-US number formatting: comma thousands separators,
//! whole dollars, one decimal place for percentages.

/// Insert comma thousands separators into a run of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an integer with thousands separators, e.g. `12,345`.
pub fn format_number(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a dollar amount with no fraction digits, e.g. `$1,234,567`.
///
/// Rounds half away from zero. Negative amounts render as `-$12`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    let rounded = value.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a value already expressed in percent, e.g. `12.34` → `12.3%`.
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0.0%".to_string();
    }
    let formatted = format!("{:.1}", value);
    // Avoid "-0.0%" for tiny negative changes
    if formatted == "-0.0" {
        return "0.0%".to_string();
    }
    format!("{}%", formatted)
}
