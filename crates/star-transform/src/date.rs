//! Sale date parsing and decomposition.
//!
//! The feed carries dates as `YYYY-MM-DD` text. Anything else, including
//! basic-format `YYYYMMDD`, single-digit months or days, and impossible
//! calendar days such as `2023-02-30`, is a parse failure. A failure is
//! local to the record: it yields `None` and the record is carried on with a
//! null calendar date.

use chrono::{Datelike, NaiveDate};

/// The only accepted sale date layout, in chrono notation.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date together with its year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Rebuilds the calendar date from the three components.
    pub fn recompose(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
pub fn parse_sale_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if !has_date_shape(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Parses and decomposes a sale date string.
///
/// # Examples
///
/// ```
/// use star_transform::decompose_date;
///
/// let parts = decompose_date("2023-11-07").unwrap();
/// assert_eq!((parts.year, parts.month, parts.day), (2023, 11, 7));
/// assert!(decompose_date("not-a-date").is_none());
/// ```
pub fn decompose_date(value: &str) -> Option<DateParts> {
    parse_sale_date(value).map(DateParts::from_date)
}

// chrono alone accepts `2023-1-7` and signed years.
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_valid_date() {
        let parts = decompose_date("2023-11-07").unwrap();
        assert_eq!(parts.year, 2023);
        assert_eq!(parts.month, 11);
        assert_eq!(parts.day, 7);
        assert_eq!(parts.recompose(), Some(parts.date));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(decompose_date(" 2024-02-29 ").is_some());
    }

    #[test]
    fn rejects_other_layouts() {
        for value in [
            "",
            "not-a-date",
            "20231107",
            "2023-1-07",
            "2023-11-7",
            "07/11/2023",
            "2023-11-07T10:00:00",
            "+023-11-07",
        ] {
            assert!(decompose_date(value).is_none(), "{value} should not parse");
        }
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(decompose_date("2023-02-29").is_none());
        assert!(decompose_date("2023-13-01").is_none());
        assert!(decompose_date("2023-04-31").is_none());
    }
}
