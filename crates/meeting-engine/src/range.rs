//! Half-open minute-of-day intervals.
//!
//! A [`TimeRange`] covers `[start, end)` where both bounds are minutes since
//! midnight. The schedulable day is `[0, 1440)`; the last minute of the day
//! is addressed inclusively through [`EndBound::Inclusive`] so that
//! `from_start_end(x, END_OF_DAY, EndBound::Inclusive)` and
//! `[x, WHOLE_DAY.end())` compare equal.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};

/// Number of minutes in the schedulable day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day. Use with [`EndBound::Inclusive`].
pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;

/// Whether the `end` passed to [`TimeRange::from_start_end`] is itself part
/// of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndBound {
    #[default]
    Exclusive,
    /// The end minute is included; the stored end is `end + 1`.
    Inclusive,
}

/// An immutable half-open interval of minutes within one day.
///
/// Equality is structural. The derived ordering sorts by start, then by end,
/// which is the same order as [`order_by_start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// The whole schedulable day, `[00:00, 24:00)`.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: MINUTES_PER_DAY,
};

impl TimeRange {
    /// Build a range from two bounds. Bounds are assumed caller-validated.
    pub const fn from_start_end(start: u32, end: u32, bound: EndBound) -> Self {
        let end = match bound {
            EndBound::Exclusive => end,
            EndBound::Inclusive => end + 1,
        };
        Self { start, end }
    }

    /// Build a range from a start minute and a length in minutes.
    pub const fn from_start_duration(start: u32, duration: u32) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// Build a range from untrusted bounds, enforcing `start <= end <= 1440`.
    pub fn try_new(start: u32, end: u32) -> Result<Self> {
        if start > end || end > MINUTES_PER_DAY {
            return Err(SchedulingError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end minute.
    pub const fn end(&self) -> u32 {
        self.end
    }

    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the range satisfies `start <= end <= 1440`.
    pub const fn is_valid(&self) -> bool {
        self.start <= self.end && self.end <= MINUTES_PER_DAY
    }

    /// Whether `point` falls inside the range. An empty range contains nothing.
    pub const fn contains_point(&self, point: u32) -> bool {
        point >= self.start && point < self.end
    }

    /// Two ranges overlap when either one contains the other's start.
    ///
    /// Ranges that merely touch (`a.end == b.start`) do not overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.contains_point(other.start) || other.contains_point(self.start)
    }

    /// Whether `other` lies entirely within `self`.
    ///
    /// An empty `self` contains nothing; an empty `other` is treated as the
    /// single point at its start.
    pub const fn contains(&self, other: &TimeRange) -> bool {
        if self.is_empty() {
            return false;
        }
        if other.is_empty() {
            return self.contains_point(other.start);
        }
        other.start >= self.start && other.end <= self.end
    }

    /// The overlapping part of two ranges, if they overlap at all.
    pub fn intersection(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(TimeRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

/// Sort key for result lists: start ascending, ties broken by end ascending.
pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.start.cmp(&b.start).then(a.end.cmp(&b.end))
}

/// End ascending, ties broken by start ascending.
pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.end.cmp(&b.end).then(a.start.cmp(&b.start))
}

/// Minute of day for a wall-clock time, e.g. `minutes(8, 30) == 510`.
pub const fn minutes(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

/// Parse `"HH:MM"` into a minute of day.
///
/// `"24:00"` is accepted and maps to the exclusive end of the day.
pub fn parse_clock(s: &str) -> Result<u32> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|e| SchedulingError::InvalidClock(format!("'{}': {}", s, e)))?;
    Ok(minutes(time.hour(), time.minute()))
}

/// Format a minute of day as `"HH:MM"`; the end of the day prints `"24:00"`.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
