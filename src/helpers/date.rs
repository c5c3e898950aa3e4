//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format used for every date written into front matter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date in the formats authors tend to write
///
/// # Examples
/// ```ignore
/// parse_date("2024-01-15")          // -> 2024-01-15
/// parse_date("2024/01/15 10:30:00") // -> 2024-01-15
/// ```
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

/// First day of the month named by a "Month Year" pair.
///
/// Accepts full and abbreviated English month names in any case.
pub fn month_year_to_date(month: &str, year: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{} 1 {}", month.trim(), year.trim()), "%B %d %Y").ok()
}

/// Format a date the way front matter stores it
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024/01/15"), Some(expected));
        assert_eq!(parse_date("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00+08:00"), Some(expected));
    }

    #[test]
    fn test_parse_date_rejects_invalid() {
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_month_year() {
        assert_eq!(
            month_year_to_date("March", "2023"),
            NaiveDate::from_ymd_opt(2023, 3, 1)
        );
        assert_eq!(
            month_year_to_date("oct", "2024"),
            NaiveDate::from_ymd_opt(2024, 10, 1)
        );
        assert_eq!(month_year_to_date("Smarch", "2024"), None);
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        assert_eq!(format_date(&d), "2023-03-01");
    }
}
