use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Megabytes per gigabyte, and kilobytes per megabyte.
const UNIT_STEP: f64 = 1024.0;

/// Parse the leading decimal number of a string (`"12.3 GB"` → `12.3`).
///
/// Leading whitespace is skipped. Returns `None` when the string does not
/// start with a digit or a `.` followed by a digit.
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in text.char_indices() {
        match ch {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    text[..end].parse::<f64>().ok()
}

/// Convert a human download size to megabytes.
///
/// `"10 GB"` → 10240, `"512 MB"` → 512, `"2048 KB"` → 2. Anything without a
/// leading number or a recognized unit is `f64::INFINITY`, so unknown sizes
/// sort after every known one in ascending order.
pub fn parse_size_mb(text: &str) -> f64 {
    let Some(value) = leading_number(text) else {
        return f64::INFINITY;
    };
    let lower = text.to_lowercase();
    if lower.contains("gb") {
        value * UNIT_STEP
    } else if lower.contains("mb") {
        value
    } else if lower.contains("kb") {
        value / UNIT_STEP
    } else {
        f64::INFINITY
    }
}

/// Format a megabyte count for display (e.g., "512.0 MB", "1.5 GB", "3.0 TB").
pub fn format_megabytes(mb: f64) -> String {
    if !mb.is_finite() {
        "unknown".to_string()
    } else if mb >= UNIT_STEP * UNIT_STEP {
        format!("{:.1} TB", mb / (UNIT_STEP * UNIT_STEP))
    } else if mb >= UNIT_STEP {
        format!("{:.1} GB", mb / UNIT_STEP)
    } else if mb >= 1.0 {
        format!("{:.1} MB", mb)
    } else {
        format!("{:.1} KB", mb * UNIT_STEP)
    }
}

/// Parse a catalog release date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM`, and a bare year (which resolves to January 1st).
pub fn parse_release_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(stamp.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if text.len() == 4 {
        let year = text.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
