//! # Calendar Tokens
//!
//! Parsing for `purchaseDate` and `purchaseTime`.
//!
//! chrono's `%Y-%m-%d` / `%H:%M` also take one-digit fields and a signed
//! year, so the fixed shape is checked first:
//! ```text
//! purchaseDate   D D D D - D D - D D     (10 bytes, '-' at 4 and 7)
//! purchaseTime   D D : D D               (5 bytes, ':' at 2)
//! ```
//! chrono then rejects out-of-range values (`2023-02-29`, `24:00`).

use chrono::{NaiveDate, NaiveTime};

use crate::{PURCHASE_DATE_FORMAT, PURCHASE_TIME_FORMAT};

/// Parses a zero-padded `YYYY-MM-DD` calendar date.
///
/// ## Example
/// ```rust
/// use receipt_core::calendar::parse_purchase_date;
///
/// assert!(parse_purchase_date("2022-03-05").is_some());
/// assert!(parse_purchase_date("2022-3-5").is_none());
/// ```
pub fn parse_purchase_date(token: &str) -> Option<NaiveDate> {
    if !has_shape(token, &[4, 7], b'-', 10) {
        return None;
    }
    NaiveDate::parse_from_str(token, PURCHASE_DATE_FORMAT).ok()
}

/// Parses a zero-padded 24-hour `HH:MM` time.
pub fn parse_purchase_time(token: &str) -> Option<NaiveTime> {
    if !has_shape(token, &[2], b':', 5) {
        return None;
    }
    NaiveTime::parse_from_str(token, PURCHASE_TIME_FORMAT).ok()
}

/// `len` bytes: `separator` at each index in `at`, ASCII digits elsewhere.
fn has_shape(token: &str, at: &[usize], separator: u8, len: usize) -> bool {
    token.len() == len
        && token.bytes().enumerate().all(|(i, b)| {
            if at.contains(&i) {
                b == separator
            } else {
                b.is_ascii_digit()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2022-01-01", true)]
    #[case("2024-02-29", true)]
    #[case("2023-02-29", false)]
    #[case("2022-3-5", false)]
    #[case("2022-03-5", false)]
    #[case("+2022-03-05", false)]
    #[case("2022/03/05", false)]
    #[case("22-03-05", false)]
    #[case("2022-03-05 ", false)]
    #[case("２０２２-03-05", false)]
    fn test_parse_purchase_date(#[case] token: &str, #[case] accepted: bool) {
        assert_eq!(parse_purchase_date(token).is_some(), accepted);
    }

    #[rstest]
    #[case("00:00", true)]
    #[case("14:05", true)]
    #[case("23:59", true)]
    #[case("14:5", false)]
    #[case("4:05", false)]
    #[case("24:00", false)]
    #[case("12:60", false)]
    #[case("14:05:00", false)]
    #[case("14-05", false)]
    fn test_parse_purchase_time(#[case] token: &str, #[case] accepted: bool) {
        assert_eq!(parse_purchase_time(token).is_some(), accepted);
    }
}
