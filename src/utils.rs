// Utility functions
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` string into a `NaiveDate`, if possible.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2021-03-15"), NaiveDate::from_ymd_opt(2021, 3, 15));
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2021-13-01"), None);
    }
}
