//! Age derivation from a masked birth date

use super::forms::FormError;
use chrono::{Datelike, Local, NaiveDate};

/// Source of the current date, so age can be computed against a fixed day in tests
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Today's date in the local time zone
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Parse a `dd/mm/yyyy` string into a calendar date.
///
/// Only a fully typed mask is accepted: two-digit day and month, four-digit
/// year. Impossible dates such as `31/02/2024` are rejected.
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, FormError> {
    let mut parts = value.split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(FormError::InvalidDate);
    };

    let day = parse_component(day, 2)?;
    let month = parse_component(month, 2)?;
    let year = parse_component(year, 4)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(FormError::InvalidDate)
}

fn parse_component(part: &str, width: usize) -> Result<u32, FormError> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormError::InvalidDate);
    }
    part.parse().map_err(|_| FormError::InvalidDate)
}

/// Whole years elapsed between `birth` and `today`.
///
/// Negative when `birth` lies in the future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Parse `birth_date` and compute the age it gives on the clock's current day
pub fn calculate_age(birth_date: &str, clock: &dyn Clock) -> Result<i32, FormError> {
    let birth = parse_birth_date(birth_date)?;
    Ok(age_on(birth, clock.today()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clock_on(today: NaiveDate) -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_today().return_const(today);
        clock
    }

    mod parsing {
        use super::*;

        #[test]
        fn test_parses_valid_date() {
            assert_eq!(parse_birth_date("15/06/2000"), Ok(date(2000, 6, 15)));
        }

        #[test]
        fn test_rejects_impossible_day() {
            assert_eq!(parse_birth_date("31/02/2024"), Err(FormError::InvalidDate));
            assert_eq!(parse_birth_date("29/02/2023"), Err(FormError::InvalidDate));
        }

        #[test]
        fn test_accepts_leap_day() {
            assert_eq!(parse_birth_date("29/02/2024"), Ok(date(2024, 2, 29)));
        }

        #[test]
        fn test_rejects_out_of_range_month() {
            assert_eq!(parse_birth_date("01/13/2000"), Err(FormError::InvalidDate));
            assert_eq!(parse_birth_date("00/01/2000"), Err(FormError::InvalidDate));
        }

        #[test]
        fn test_rejects_partial_mask() {
            for value in ["", "01", "01/01", "01/01/", "01/01/199", "1/01/2000"] {
                assert_eq!(
                    parse_birth_date(value),
                    Err(FormError::InvalidDate),
                    "value {value:?}"
                );
            }
        }

        #[test]
        fn test_rejects_extra_components_and_signs() {
            assert_eq!(parse_birth_date("01/01/2000/1"), Err(FormError::InvalidDate));
            assert_eq!(parse_birth_date("+1/01/2000"), Err(FormError::InvalidDate));
        }
    }

    mod age {
        use super::*;

        #[test]
        fn test_birthday_already_passed() {
            assert_eq!(age_on(date(2000, 1, 1), date(2024, 6, 15)), 24);
        }

        #[test]
        fn test_birthday_not_yet_reached() {
            assert_eq!(age_on(date(2000, 6, 15), date(2024, 6, 14)), 23);
        }

        #[test]
        fn test_birthday_today_counts() {
            assert_eq!(age_on(date(2000, 6, 15), date(2024, 6, 15)), 24);
        }

        #[test]
        fn test_born_today_is_zero() {
            assert_eq!(age_on(date(2024, 6, 15), date(2024, 6, 15)), 0);
        }

        #[test]
        fn test_leap_day_birth() {
            assert_eq!(age_on(date(2000, 2, 29), date(2023, 2, 28)), 22);
            assert_eq!(age_on(date(2000, 2, 29), date(2023, 3, 1)), 23);
            assert_eq!(age_on(date(2000, 2, 29), date(2024, 2, 29)), 24);
        }

        #[test]
        fn test_future_birth_date_is_not_rejected() {
            assert_eq!(age_on(date(2030, 1, 1), date(2024, 6, 15)), -6);
            assert_eq!(age_on(date(2024, 12, 1), date(2024, 6, 15)), -1);
        }
    }

    mod calculate {
        use super::*;

        #[test]
        fn test_uses_clock_date() {
            let clock = clock_on(date(2024, 6, 15));
            assert_eq!(calculate_age("01/01/2000", &clock), Ok(24));
        }

        #[test]
        fn test_birthday_pending_on_clock_date() {
            let clock = clock_on(date(2024, 6, 14));
            assert_eq!(calculate_age("15/06/2000", &clock), Ok(23));
        }

        #[test]
        fn test_invalid_date_does_not_consult_clock() {
            let mut clock = MockClock::new();
            clock.expect_today().never();
            assert_eq!(
                calculate_age("31/02/2024", &clock),
                Err(FormError::InvalidDate)
            );
        }

        #[test]
        fn test_system_clock_is_after_epoch() {
            assert!(SystemClock.today() > date(2020, 1, 1));
        }
    }
}
