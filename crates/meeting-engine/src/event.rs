//! Calendar events and meeting requests -- the two inputs of a query.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{Result, SchedulingError};
use crate::range::TimeRange;

/// A busy interval shared by a set of attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    name: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(name: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// Reject events whose range falls outside the day or runs backwards.
    pub fn validate(&self) -> Result<()> {
        if !self.when.is_valid() {
            return Err(SchedulingError::InvalidRange {
                start: self.when.start(),
                end: self.when.end(),
            });
        }
        Ok(())
    }
}

/// Who must attend, who would ideally attend, and for how long.
///
/// Mandatory attendees keep their insertion order: the first one seeds the
/// candidate windows. Each name appears at most once across both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingRequest {
    attendees: Vec<String>,
    optional_attendees: Vec<String>,
    duration: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut mandatory: Vec<String> = Vec::new();
        for attendee in attendees {
            let attendee = attendee.into();
            if !mandatory.contains(&attendee) {
                mandatory.push(attendee);
            }
        }
        Self {
            attendees: mandatory,
            optional_attendees: Vec::new(),
            duration,
        }
    }

    /// Add someone who should attend if possible.
    ///
    /// Names already present as mandatory or optional are ignored.
    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        let attendee = attendee.into();
        if self.attendees.contains(&attendee) || self.optional_attendees.contains(&attendee) {
            return;
        }
        self.optional_attendees.push(attendee);
    }

    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for attendee in attendees {
            self.add_optional_attendee(attendee);
        }
        self
    }

    /// Mandatory attendees in insertion order.
    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &[String] {
        &self.optional_attendees
    }

    /// Requested meeting length in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }
}
