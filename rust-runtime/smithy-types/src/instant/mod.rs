/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, Utc};

mod format;

pub use self::format::DateParseError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds since the Unix epoch plus a sub-second nanosecond part.
///
/// `subsecond_nanos` is always added to `seconds`, so `-1.5` is represented as
/// `seconds = -2, subsecond_nanos = 500_000_000`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let subsecond_nanos = (fraction * NANOS_PER_SECOND as f64).round() as u32;
        Instant::from_secs_and_nanos(epoch_seconds, subsecond_nanos)
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds + i64::from(subsecond_nanos / NANOS_PER_SECOND),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    /// Parses `s` according to `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::HttpDate => format::http_date::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    fn to_chrono(self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos).unwrap_or(
            if self.seconds < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            },
        )
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => format::rfc3339::format(self.to_chrono()),
            Format::EpochSeconds => format::epoch_seconds::format(self),
            Format::HttpDate => format::http_date::format(self.to_chrono()),
        }
    }
}

/// Wire representations of an [`Instant`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18Z`
    DateTime,
    /// IMF-fixdate, e.g. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Seconds since the Unix epoch, with an optional fraction, e.g. `1576540098.52`
    EpochSeconds,
}
