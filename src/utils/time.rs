//! Time utilities: the minute-resolution `ClockTime` value, zero-floored
//! spans between punches, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Time of day with minute resolution (minutes since midnight, `0..1440`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const NOON: ClockTime = ClockTime(12 * 60);
    pub const LAST_MINUTE: ClockTime = ClockTime(23 * 60 + 59);

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(ClockTime((hour * 60 + minute) as u16))
    }

    /// Minutes since midnight, out-of-day values pinned to 00:00 / 23:59.
    pub fn clamped(minutes: i64) -> Self {
        ClockTime(minutes.clamp(0, MINUTES_PER_DAY - 1) as u16)
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0) / 60
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0) % 60
    }

    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    /// Duration from `self` to `end`, floored at zero. Spans never wrap past
    /// midnight.
    pub fn span_to(self, end: ClockTime) -> i64 {
        if end > self {
            end.minutes() - self.minutes()
        } else {
            0
        }
    }

    /// Signed difference `other - self` in minutes.
    pub fn minutes_until(self, other: ClockTime) -> i64 {
        other.minutes() - self.minutes()
    }

    pub fn from_naive(t: NaiveTime) -> Self {
        ClockTime((t.hour() * 60 + t.minute()) as u16)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        parse_time(s.trim())
            .map(ClockTime::from_naive)
            .ok_or_else(|| AppError::InvalidTime(s.to_string()))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// `HH:MM` rendering of a minute count (durations, not clock times).
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
