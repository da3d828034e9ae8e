//! Per-attendee free time for a single day.
//!
//! Every tracked attendee starts with the whole day free. Each event is then
//! subtracted from the free list of every tracked attendee it names. A fresh
//! list is built per subtraction, so intervals produced while applying one
//! event are never skipped or visited twice.

use std::collections::BTreeMap;

use tracing::trace;

use crate::event::Event;
use crate::range::{TimeRange, WHOLE_DAY};

/// Free intervals keyed by attendee, each list ordered by start and disjoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    free: BTreeMap<String, Vec<TimeRange>>,
}

impl Schedule {
    /// Compute free time for `attendees` given the day's `events`.
    ///
    /// Attendees named by an event but not listed in `attendees` are ignored.
    pub fn build<'a, I>(attendees: I, events: &[Event]) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut free: BTreeMap<String, Vec<TimeRange>> = attendees
            .into_iter()
            .map(|attendee| (attendee.clone(), vec![WHOLE_DAY]))
            .collect();

        for event in events {
            for attendee in event.attendees() {
                if let Some(slots) = free.get_mut(attendee) {
                    trace!(event = event.name(), attendee = %attendee, busy = %event.when(), "subtracting event");
                    *slots = subtract(slots, &event.when());
                }
            }
        }

        Self { free }
    }

    /// Free intervals for one attendee, or an empty slice if untracked.
    pub fn free_time(&self, attendee: &str) -> &[TimeRange] {
        self.free.get(attendee).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_tracked(&self, attendee: &str) -> bool {
        self.free.contains_key(attendee)
    }

    /// Iterate `(attendee, free intervals)` in attendee-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TimeRange])> {
        self.free
            .iter()
            .map(|(attendee, slots)| (attendee.as_str(), slots.as_slice()))
    }
}

/// Remove `busy` from an ordered list of free intervals.
///
/// An interval that does not overlap `busy` passes through unchanged. One
/// that does is replaced by whatever survives on either side of `busy`:
/// nothing when `busy` covers it, one piece on a partial overlap, two
/// pieces when `busy` sits strictly inside it.
pub fn subtract(free: &[TimeRange], busy: &TimeRange) -> Vec<TimeRange> {
    // A zero-length event blocks nothing.
    if busy.is_empty() {
        return free.to_vec();
    }

    let mut remaining = Vec::with_capacity(free.len() + 1);

    for slot in free {
        if !slot.overlaps(busy) {
            remaining.push(*slot);
            continue;
        }

        if slot.start() < busy.start() {
            remaining.push(TimeRange::from_start_duration(
                slot.start(),
                busy.start() - slot.start(),
            ));
        }
        if busy.end() < slot.end() {
            remaining.push(TimeRange::from_start_duration(
                busy.end(),
                slot.end() - busy.end(),
            ));
        }
    }

    remaining
}

