//! Validated time-of-day values

use crate::error::{Error, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Name of a time component, used to pinpoint validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hour => write!(f, "hour"),
            Self::Minute => write!(f, "minute"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Immutable, validated time of day with second precision
///
/// The identity of a `TimeValue` is its (hour, minute, second) triple;
/// the seconds-since-midnight ordinal is a derived cache used for
/// ordering and binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTime", into = "RawTime")]
pub struct TimeValue {
    hour: u8,
    minute: u8,
    second: u8,
}

/// Unvalidated shadow of [`TimeValue`] for serde
///
/// Components are signed and wide so that out-of-range serialized data
/// reaches validation instead of failing at the integer-width level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawTime {
    hour: i64,
    minute: i64,
    second: i64,
}

impl TimeValue {
    /// Create a time value from raw components
    ///
    /// Components are validated in order: hour, then minute, then second.
    /// The first violated constraint is reported with the offending raw
    /// value and the name of the violated field.
    pub fn new(hour: i64, minute: i64, second: i64) -> Result<Self> {
        if !(0..=23).contains(&hour) {
            return Err(Error::InvalidTimeComponent {
                field: TimeField::Hour,
                value: hour,
                max: 23,
            });
        }

        if !(0..=59).contains(&minute) {
            return Err(Error::InvalidTimeComponent {
                field: TimeField::Minute,
                value: minute,
                max: 59,
            });
        }

        if !(0..=59).contains(&second) {
            return Err(Error::InvalidTimeComponent {
                field: TimeField::Second,
                value: second,
                max: 59,
            });
        }

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
        })
    }

    /// Get the hour component
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    /// Get the minute component
    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Get the second component
    pub fn second(&self) -> u32 {
        u32::from(self.second)
    }

    /// Seconds since midnight
    ///
    /// Derived from the triple for efficient comparison and storage; the
    /// triple remains the externally meaningful identity.
    pub fn to_ordinal(&self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

impl Ord for TimeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_ordinal().cmp(&other.to_ordinal())
    }
}

impl PartialOrd for TimeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl TryFrom<RawTime> for TimeValue {
    type Error = Error;

    fn try_from(raw: RawTime) -> Result<Self> {
        Self::new(raw.hour, raw.minute, raw.second)
    }
}

impl From<TimeValue> for RawTime {
    fn from(time: TimeValue) -> Self {
        Self {
            hour: i64::from(time.hour),
            minute: i64::from(time.minute),
            second: i64::from(time.second),
        }
    }
}

impl FromStr for TimeValue {
    type Err = Error;

    /// Parse the `hh:mm:ss` textual form
    ///
    /// Each component must be exactly two ASCII digits; component range
    /// violations are reported as [`Error::InvalidTimeComponent`], anything
    /// else as [`Error::MalformedTime`].
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedTime {
            input: s.to_string(),
        };

        let mut components = s.split(':');
        let mut parse_component = || -> Result<i64> {
            let part = components.next().ok_or_else(malformed)?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse().map_err(|_| malformed())
        };

        let hour = parse_component()?;
        let minute = parse_component()?;
        let second = parse_component()?;

        if components.next().is_some() {
            return Err(malformed());
        }

        Self::new(hour, minute, second)
    }
}

impl From<TimeValue> for NaiveTime {
    fn from(time: TimeValue) -> Self {
        NaiveTime::from_hms_opt(time.hour(), time.minute(), time.second())
            .unwrap_or_default()
    }
}

impl TryFrom<NaiveTime> for TimeValue {
    type Error = Error;

    /// Convert from chrono, rejecting sub-second and leap-second precision
    fn try_from(time: NaiveTime) -> Result<Self> {
        if time.nanosecond() != 0 {
            return Err(Error::MalformedTime {
                input: time.to_string(),
            });
        }

        Self::new(
            i64::from(time.hour()),
            i64::from(time.minute()),
            i64::from(time.second()),
        )
    }
}
