//! Calendar date handling for `date_of_birth`.
//!
//! Dates travel as `YYYY-MM-DD` strings everywhere outside the domain model.

use chrono::{Datelike, NaiveDate};

use crate::constants::{DATE_FORMAT, DATE_LENGTH};
use crate::error::{DomainError, DomainResult};

/// Message reported for any date that is not a strict `YYYY-MM-DD` value.
pub const INVALID_DATE_MESSAGE: &str = "invalid date format";

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Rejects anything chrono would leniently accept (unpadded fields, signed or
/// five-digit years) as well as impossible dates such as `2023-02-30`.
pub fn parse_date_of_birth(value: &str) -> DomainResult<NaiveDate> {
    if value.len() != DATE_LENGTH {
        return Err(DomainError::validation(INVALID_DATE_MESSAGE));
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DomainError::validation(INVALID_DATE_MESSAGE))?;

    // Round-trip guards against layouts chrono tolerates but we don't.
    if format_date(date) != value {
        return Err(DomainError::validation(INVALID_DATE_MESSAGE));
    }

    Ok(date)
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Age in whole years on `today`.
///
/// Compares day-of-year rather than (month, day), so results can be off by
/// one around Feb 29 when exactly one of the two years is a leap year.
pub fn calculate_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if today.ordinal() < date_of_birth.ordinal() {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_date_of_birth("1990-05-10").unwrap(), date(1990, 5, 10));
        assert_eq!(parse_date_of_birth("2000-02-29").unwrap(), date(2000, 2, 29));
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        for input in [
            "13/01/2020",
            "2020-1-05",
            "2020-01-5",
            "20-01-2020",
            "2020/01/05",
            "2020-01-05T00:00:00",
            " 2020-01-05",
            "",
        ] {
            let err = parse_date_of_birth(input).unwrap_err();
            assert_eq!(err, DomainError::validation(INVALID_DATE_MESSAGE), "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_date_of_birth("2023-02-29").is_err());
        assert!(parse_date_of_birth("2023-13-01").is_err());
        assert!(parse_date_of_birth("2023-04-31").is_err());
    }

    #[test]
    fn test_format_date_is_zero_padded() {
        assert_eq!(format_date(date(987, 1, 2)), "0987-01-02");
        assert_eq!(format_date(date(2024, 12, 31)), "2024-12-31");
    }

    #[test]
    fn test_age_birthday_passed() {
        assert_eq!(calculate_age(date(1990, 5, 10), date(2023, 6, 1)), 33);
    }

    #[test]
    fn test_age_birthday_not_yet() {
        assert_eq!(calculate_age(date(1990, 5, 10), date(2023, 5, 9)), 32);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(calculate_age(date(1990, 5, 10), date(2023, 5, 10)), 33);
    }

    #[test]
    fn test_age_born_this_year() {
        assert_eq!(calculate_age(date(2023, 1, 1), date(2023, 7, 1)), 0);
    }

    #[test]
    fn test_age_day_of_year_quirk_in_leap_year() {
        // 1990-05-10 is day 130; in 2024 day 130 is May 9, a day early.
        assert_eq!(calculate_age(date(1990, 5, 10), date(2024, 5, 9)), 34);
    }

    #[test]
    fn test_age_first_of_january() {
        assert_eq!(calculate_age(date(2000, 1, 1), date(2026, 1, 1)), 26);
        assert_eq!(calculate_age(date(2000, 1, 1), date(2026, 12, 31)), 26);
    }
}
