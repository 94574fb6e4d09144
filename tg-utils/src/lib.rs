//! Shared utility functions for tempgami crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DateError(s.to_string()))
    }

    /// Parse a date as the tempgami API emits it.
    ///
    /// The backend may send timestamps, so the same date can arrive as
    /// "2021-07-04", "2021-07-04 00:00:00" or "2021-07-04T00:00:00". Only the
    /// leading calendar date is kept.
    pub fn parse_api_date(s: &str) -> Result<NaiveDate, DateError> {
        let trimmed = s.trim();
        let day = trimmed
            .split(|c| c == 'T' || c == ' ')
            .next()
            .unwrap_or(trimmed);
        parse_date(day).map_err(|_| DateError(s.to_string()))
    }

    /// Parse an optional API date where the empty string means "absent".
    pub fn parse_optional_api_date(s: &str) -> Result<Option<NaiveDate>, DateError> {
        if s.trim().is_empty() {
            Ok(None)
        } else {
            parse_api_date(s).map(Some)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_api_date_variants() {
            let expected = NaiveDate::from_ymd_opt(2021, 7, 4).unwrap();
            assert_eq!(parse_api_date("2021-07-04").unwrap(), expected);
            assert_eq!(parse_api_date("2021-07-04 00:00:00").unwrap(), expected);
            assert_eq!(parse_api_date("2021-07-04T00:00:00").unwrap(), expected);
        }

        #[test]
        fn test_parse_api_date_rejects_garbage() {
            let err = parse_api_date("July 4th").unwrap_err();
            assert_eq!(err.to_string(), "Date error: July 4th");
        }

        #[test]
        fn test_parse_optional_api_date() {
            assert_eq!(parse_optional_api_date("").unwrap(), None);
            assert!(parse_optional_api_date("1999-12-31").unwrap().is_some());
            assert!(parse_optional_api_date("31/12/1999").is_err());
        }
    }
}

/// Error types
pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("Date error: {0}")]
    pub struct DateError(pub String);
}
