//! Input masks applied as the user types
//!
//! Both masks only look at the digits of their input, so feeding an already
//! masked value back through them yields the same value.

/// Maximum digits kept by the birth date mask (`dd/mm/yyyy`)
pub const DATE_DIGITS: usize = 8;

/// Maximum digits kept by the phone mask (`(dd)ddddd-dddd`)
pub const PHONE_DIGITS: usize = 11;

/// Collect at most `limit` ASCII digits from `raw`
pub fn digits(raw: &str, limit: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// Format raw input as a `dd/mm/yyyy` date.
///
/// Separators appear only once the following group has started, so `"011"`
/// becomes `"01/1"`. Day and month ranges are not checked here.
pub fn format_date(raw: &str) -> String {
    let digits = digits(raw, DATE_DIGITS);
    let mut out = String::with_capacity(10);

    for (i, c) in digits.chars().enumerate() {
        if i == 2 || i == 4 {
            out.push('/');
        }
        out.push(c);
    }
    out
}

/// Format raw input as a `(dd)ddddd-dddd` phone number.
///
/// The hyphen is emitted as soon as seven digits are present, even before
/// any of the last four digits have been typed.
pub fn format_phone(raw: &str) -> String {
    let digits = digits(raw, PHONE_DIGITS);
    let len = digits.len();
    if len == 0 {
        return String::new();
    }

    let area_end = len.min(2);
    let number_end = len.min(7);

    let mut out = String::with_capacity(14);
    out.push('(');
    out.push_str(&digits[..area_end]);
    out.push(')');
    out.push_str(&digits[area_end..number_end]);
    if len >= 7 {
        out.push('-');
        out.push_str(&digits[number_end..]);
    }
    out
}
