//! PDF date strings.
//!
//! Dates are string objects laid out as `D:YYYYMMDDHHmmSSOHH'mm'`, where `O`
//! is `+`, `-` or `Z`. Every field after the year is optional.

use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

/// Formats `when` as a date string, including the `D:` prefix and offset.
///
/// # Examples
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone};
/// use pdfobj::date::format_date;
///
/// let offset = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
/// let when = offset.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
/// assert_eq!(format_date(&when), "D:20231231235958-05'30'");
/// ```
#[must_use]
pub fn format_date(when: &DateTime<FixedOffset>) -> String {
    let seconds = when.offset().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!(
        "D:{}{sign}{:02}'{:02}'",
        when.format("%Y%m%d%H%M%S"),
        minutes / 60,
        minutes % 60
    )
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn skip(&mut self, c: char) {
        if let Some(rest) = self.rest.strip_prefix(c) {
            self.rest = rest;
        }
    }

    /// Reads exactly `len` ASCII digits.
    fn digits(&mut self, len: usize) -> Option<u32> {
        let rest = self.rest;
        let field = rest.get(..len)?;
        if !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.rest = &rest[len..];
        field.parse().ok()
    }

    /// Reads a two-digit field if one starts here, `default` otherwise.
    fn optional(&mut self, default: u32) -> std::result::Result<u32, ()> {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => self.digits(2).ok_or(()),
            _ => Ok(default),
        }
    }
}

/// Parses a date string.
///
/// The `D:` prefix is optional, missing fields default to the start of their
/// range and a missing offset means UTC.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] for malformed fields or out-of-range values.
///
/// # Examples
///
/// ```rust
/// use pdfobj::date::parse_date;
///
/// let when = parse_date("D:199812231952-08'00'").unwrap();
/// assert_eq!(when.to_rfc3339(), "1998-12-23T19:52:00-08:00");
///
/// let year_only = parse_date("D:2001").unwrap();
/// assert_eq!(year_only.to_rfc3339(), "2001-01-01T00:00:00+00:00");
/// ```
pub fn parse_date(input: &str) -> Result<DateTime<FixedOffset>> {
    let invalid = |msg: &str| Error::invalid_date(input, msg);

    let trimmed = input.trim();
    let mut cursor = Cursor {
        rest: trimmed.strip_prefix("D:").unwrap_or(trimmed),
    };

    let year = cursor
        .digits(4)
        .ok_or_else(|| invalid("year needs 4 digits"))?;
    let mut fields = [1, 1, 0, 0, 0];
    for field in fields.iter_mut() {
        *field = cursor
            .optional(*field)
            .map_err(|()| invalid("fields after the year need 2 digits"))?;
    }
    let [month, day, hour, minute, second] = fields;

    let offset_seconds = match cursor.peek() {
        None | Some('Z') => 0,
        Some(sign @ ('+' | '-')) => {
            cursor.skip(sign);
            let hours = cursor
                .digits(2)
                .ok_or_else(|| invalid("offset hours need 2 digits"))?;
            cursor.skip('\'');
            let minutes = cursor
                .optional(0)
                .map_err(|()| invalid("offset minutes need 2 digits"))?;
            let seconds = (hours * 3600 + minutes * 60) as i32;
            if sign == '-' {
                -seconds
            } else {
                seconds
            }
        }
        Some(_) => return Err(invalid("expected offset marker +, - or Z")),
    };

    let offset =
        FixedOffset::east_opt(offset_seconds).ok_or_else(|| invalid("offset out of range"))?;
    let naive = NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| invalid("date or time out of range"))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| invalid("ambiguous local time"))
}
