/// Utilities for date and time formatting
///
/// The backend sends RFC 3339 timestamps (`createdAt`) and plain dates
/// (`pickupDate`, maintenance dates). Anything unparseable is shown as is.
use chrono::{DateTime, NaiveDate};

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%d %b %Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15 Mar 2024"
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => date_str.to_string(),
    }
}

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
}

/// Today's date in the browser's clock, as `YYYY-MM-DD` for date inputs.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Whether a maintenance date lies strictly before `today`.
pub fn is_overdue(date_str: &str, today: NaiveDate) -> bool {
    parse_date(date_str).map(|d| d < today).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15 Mar 2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59+00:00"), "31 Dec 2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(is_overdue("2024-05-31", today));
        assert!(!is_overdue("2024-06-01", today));
        assert!(!is_overdue("soon", today));
    }
}
