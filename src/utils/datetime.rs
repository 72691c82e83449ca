//! Date and time utility functions
//!
//! Due dates are plain `YYYY-MM-DD` strings as entered in the task dialog;
//! completion dates are UTC instants. Both are rendered relative to today.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

/// Format of task due dates
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), DUE_DATE_FORMAT)
}

/// Human-readable label for `date` seen from `today`.
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        -1 => "ayer".to_string(),
        0 => "hoy".to_string(),
        1 => "mañana".to_string(),
        diff if diff > 1 && diff <= 30 => format!("en {} días", diff),
        diff if (-30..-1).contains(&diff) => format!("hace {} días", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%d %b").to_string()
            } else {
                date.format("%d %b %Y").to_string()
            }
        }
    }
}

/// Format a due date string for display.
///
/// Empty input yields an empty string; anything that is not a valid date is
/// shown as typed.
pub fn format_due_date(date_str: &str) -> String {
    if date_str.trim().is_empty() {
        return String::new();
    }
    match parse_date(date_str) {
        Ok(date) => relative_label(date, Local::now().date_naive()),
        Err(_) => date_str.to_string(),
    }
}

/// Format a completion instant in local time
pub fn format_completed(completed: &DateTime<Utc>) -> String {
    let local = completed.with_timezone(&Local);
    format!(
        "{} {}",
        relative_label(local.date_naive(), Local::now().date_naive()),
        local.format("%H:%M")
    )
}

/// Whether a due date has passed, given today's date. Invalid or empty dates never are.
pub fn is_overdue(date_str: &str, today: NaiveDate) -> bool {
    parse_date(date_str).map(|d| d < today).unwrap_or(false)
}
