/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;

#[derive(Debug, Eq, PartialEq)]
pub enum DateParseError {
    Invalid(&'static str),
    IntParseError,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::Invalid(reason) => write!(f, "invalid date: {}", reason),
            DateParseError::IntParseError => write!(f, "failed to parse an integer in the date"),
        }
    }
}

impl Error for DateParseError {}

fn parse_digits<T: std::str::FromStr>(ascii: &str) -> Result<T, DateParseError> {
    if ascii.is_empty() || !ascii.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError::IntParseError);
    }
    ascii.parse::<T>().map_err(|_| DateParseError::IntParseError)
}

pub(super) mod epoch_seconds {
    use super::{parse_digits, DateParseError};
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;

    /// Ok: "1576540098"
    /// Ok: "1576540098.52"
    /// Ok: "-1.5"
    /// Not Ok: "1576540098."
    pub(crate) fn parse(s: &str) -> Result<Instant, DateParseError> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match digits.find('.') {
            Some(idx) => (&digits[..idx], Some(&digits[idx + 1..])),
            None => (digits, None),
        };
        let seconds: i64 = parse_digits(whole)?;
        let nanos: u32 = match fraction {
            None => 0,
            Some(fraction) if fraction.len() > 9 => {
                return Err(DateParseError::Invalid("too much precision"))
            }
            Some(fraction) => {
                parse_digits::<u32>(fraction)? * 10_u32.pow(9 - fraction.len() as u32)
            }
        };
        Ok(match (negative, nanos) {
            (false, _) => Instant::from_secs_and_nanos(seconds, nanos),
            (true, 0) => Instant::from_epoch_seconds(-seconds),
            (true, nanos) => Instant::from_secs_and_nanos(-seconds - 1, NANOS_PER_SECOND - nanos),
        })
    }

    pub(crate) fn format(instant: &Instant) -> String {
        if !instant.has_nanos() {
            format!("{}", instant.epoch_seconds())
        } else {
            let fraction = format!("{:0>9}", instant.epoch_subsecond_nanos());
            format!(
                "{}.{}",
                instant.epoch_seconds(),
                fraction.trim_end_matches('0')
            )
        }
    }
}

pub(super) mod rfc3339 {
    use super::DateParseError;
    use crate::Instant;
    use chrono::{DateTime, SecondsFormat, Utc};

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    /// Ok: "2019-12-16T15:48:18-08:00"
    pub(crate) fn parse(s: &str) -> Result<Instant, DateParseError> {
        let parsed = DateTime::parse_from_rfc3339(s)
            .map_err(|_| DateParseError::Invalid("not a valid RFC 3339 date-time"))?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }

    pub(crate) fn format(date_time: DateTime<Utc>) -> String {
        let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        // AutoSi pads the fraction to 3, 6 or 9 digits
        if !rfc3339.contains('.') {
            return rfc3339;
        }
        let mut trimmed = rfc3339
            .trim_end_matches('Z')
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned();
        trimmed.push('Z');
        trimmed
    }
}

pub(super) mod http_date {
    // The parser is adapted from https://github.com/pyfisch/httpdate under an Apache 2.0 License.
    // It additionally accepts up to three digits of fractional seconds.
    use super::{parse_digits, DateParseError};
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;
    use chrono::{DateTime, NaiveDate, Utc};
    use std::fmt::Write;

    /// Ok: "Mon, 16 Dec 2019 23:48:18 GMT"
    /// Ok: "Mon, 16 Dec 2019 23:48:18.123 GMT"
    /// Ok: "Mon, 16 Dec 2019 23:48:18.12 GMT"
    /// Not Ok: "Mon, 16 Dec 2019 23:48:18.1234 GMT"
    pub(crate) fn format(date_time: DateTime<Utc>) -> String {
        let mut out = date_time.format("%a, %d %b %Y %H:%M:%S").to_string();
        let nanos = date_time.timestamp_subsec_nanos();
        if nanos != 0 {
            // Writing into a String cannot fail
            let _ = write!(out, ".{:03}", nanos / (NANOS_PER_SECOND / 1000));
        }
        out.push_str(" GMT");
        out
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, DateParseError> {
        if !s.is_ascii() {
            return Err(DateParseError::Invalid("not ascii"));
        }
        parse_imf_fixdate(s.trim())
    }

    fn parse_imf_fixdate(s: &str) -> Result<Instant, DateParseError> {
        // Example: `Sun, 06 Nov 1994 08:49:37 GMT`
        let bytes = s.as_bytes();
        if bytes.len() < 29
            || bytes.len() > 33
            || !s.ends_with(" GMT")
            || bytes[16] != b' '
            || bytes[19] != b':'
            || bytes[22] != b':'
        {
            return Err(DateParseError::Invalid("incorrectly shaped string"));
        }
        let nanos: u32 = match bytes[25] {
            b'.' => {
                // The date must end with " GMT", so read from the character after the `.`
                // to 4 from the end
                let fraction = &s[26..s.len() - 4];
                if fraction.len() > 3 {
                    return Err(DateParseError::Invalid("too much precision"));
                }
                let value: u32 = parse_digits(fraction)?;
                let divisor = [10, 100, 1000][fraction.len() - 1];
                value * (NANOS_PER_SECOND / divisor)
            }
            b' ' => 0,
            _ => return Err(DateParseError::Invalid("incorrectly shaped string")),
        };
        match &s[..5] {
            "Mon, " | "Tue, " | "Wed, " | "Thu, " | "Fri, " | "Sat, " | "Sun, " => {}
            _ => return Err(DateParseError::Invalid("invalid day")),
        }
        let month = match &s[7..12] {
            " Jan " => 1,
            " Feb " => 2,
            " Mar " => 3,
            " Apr " => 4,
            " May " => 5,
            " Jun " => 6,
            " Jul " => 7,
            " Aug " => 8,
            " Sep " => 9,
            " Oct " => 10,
            " Nov " => 11,
            " Dec " => 12,
            _ => return Err(DateParseError::Invalid("invalid month")),
        };
        let date_time = NaiveDate::from_ymd_opt(parse_digits(&s[12..16])?, month, parse_digits(&s[5..7])?)
            .and_then(|date| {
                date.and_hms_opt(
                    parse_digits(&s[17..19]).ok()?,
                    parse_digits(&s[20..22]).ok()?,
                    parse_digits(&s[23..25]).ok()?,
                )
            })
            .ok_or(DateParseError::Invalid("invalid date"))?;
        Ok(Instant::from_secs_and_nanos(
            date_time.and_utc().timestamp(),
            nanos,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::{epoch_seconds, http_date, rfc3339, DateParseError};
    use crate::Instant;

    #[test]
    fn http_date_format() {
        let basic_http_date = "Mon, 16 Dec 2019 23:48:18 GMT";
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(crate::instant::Format::HttpDate), basic_http_date);
        assert_eq!(http_date::parse(basic_http_date), Ok(instant));
    }

    #[test]
    fn http_date_format_fractional_zeroed() {
        let fractional = "Mon, 16 Dec 2019 23:48:18.000 GMT";
        assert_eq!(
            http_date::parse(fractional),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
    }

    #[test]
    fn http_date_fractional_nonzero() {
        assert_eq!(
            http_date::parse("Mon, 16 Dec 2019 23:48:18.12 GMT"),
            Ok(Instant::from_secs_and_nanos(1576540098, 120_000_000))
        );
        assert_eq!(
            http_date::parse("Mon, 16 Dec 2019 23:48:18.123 GMT"),
            Ok(Instant::from_secs_and_nanos(1576540098, 123_000_000))
        );
    }

    #[test]
    fn too_much_fraction() {
        assert_eq!(
            http_date::parse("Mon, 16 Dec 2019 23:48:18.1212 GMT"),
            Err(DateParseError::Invalid("incorrectly shaped string"))
        );
    }

    #[test]
    fn no_fraction() {
        assert_eq!(
            http_date::parse("Mon, 16 Dec 2019 23:48:18. GMT"),
            Err(DateParseError::IntParseError)
        );
    }

    #[test]
    fn http_date_invalid_calendar_date() {
        assert_eq!(
            http_date::parse("Mon, 31 Feb 2019 23:48:18 GMT"),
            Err(DateParseError::Invalid("invalid date"))
        );
    }

    #[track_caller]
    fn check_roundtrip(epoch_secs: i64) {
        let instant = Instant::from_epoch_seconds(epoch_secs);
        let http_date = instant.fmt(crate::instant::Format::HttpDate);
        assert_eq!(http_date::parse(&http_date), Ok(instant), "{}", http_date);
    }

    #[test]
    fn http_date_roundtrip() {
        for epoch_secs in 0..1000 {
            check_roundtrip(epoch_secs);
        }

        check_roundtrip(1576540098);
        check_roundtrip(9999999999);
    }

    #[test]
    fn epoch_seconds_parse() {
        assert_eq!(Ok(Instant::from_epoch_seconds(1234567890)), epoch_seconds::parse("1234567890"));
        assert_eq!(
            Ok(Instant::from_secs_and_nanos(1576540098, 520_000_000)),
            epoch_seconds::parse("1576540098.52")
        );
        assert_eq!(
            Ok(Instant::from_secs_and_nanos(-2, 500_000_000)),
            epoch_seconds::parse("-1.5")
        );
        assert_eq!(Err(DateParseError::IntParseError), epoch_seconds::parse("12."));
        assert_eq!(Err(DateParseError::IntParseError), epoch_seconds::parse("+12"));
        assert_eq!(
            Err(DateParseError::Invalid("too much precision")),
            epoch_seconds::parse("1.0123456789")
        );
    }

    #[test]
    fn rfc3339_trims_fraction() {
        let instant = Instant::from_secs_and_nanos(1576540098, 500_000_000);
        assert_eq!("2019-12-16T23:48:18.5Z", instant.fmt(crate::instant::Format::DateTime));
        let instant = Instant::from_epoch_seconds(1576540100);
        assert_eq!("2019-12-16T23:48:20Z", instant.fmt(crate::instant::Format::DateTime));
    }

    #[test]
    fn rfc3339_parse_with_offset() {
        assert_eq!(
            rfc3339::parse("2019-12-16T15:48:18-08:00"),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert!(rfc3339::parse("2019-12-16 23:48:18").is_err());
    }
}
