//! Optional-attendee coverage over the mandatory candidate windows.
//!
//! Runs in two phases:
//!
//! 1. [`qualifying_windows`] narrows the mandatory windows by each optional
//!    attendee's free time. Attendees left with nothing drop out.
//! 2. [`FrequencyTable::build`] collects every long-enough intersection
//!    between two different attendees' windows, deduplicates them, and
//!    counts how many optional attendees have a window containing each one.
//!
//! Counting by containment rather than by visiting order keeps the table
//! independent of the order attendees were listed in.

use std::collections::BTreeMap;

use tracing::debug;

use crate::mandatory::narrow;
use crate::range::TimeRange;
use crate::schedule::Schedule;

/// The windows one optional attendee can make, within the mandatory windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifying {
    pub attendee: String,
    pub windows: Vec<TimeRange>,
}

/// Narrow `mandatory` by each optional attendee's free time.
///
/// Only attendees with at least one qualifying window are returned, in the
/// order they were requested.
pub fn qualifying_windows(
    optional_attendees: &[String],
    mandatory: &[TimeRange],
    schedule: &Schedule,
    duration: u32,
) -> Vec<Qualifying> {
    optional_attendees
        .iter()
        .filter_map(|attendee| {
            let windows = narrow(mandatory, schedule.free_time(attendee), duration);
            if windows.is_empty() {
                debug!(attendee = %attendee, "optional attendee has no qualifying window");
                return None;
            }
            Some(Qualifying {
                attendee: attendee.clone(),
                windows,
            })
        })
        .collect()
}

/// Every intersection of at least `duration` minutes between windows of two
/// different attendees. May contain duplicates.
pub fn pairwise_intersections(qualifying: &[Qualifying], duration: u32) -> Vec<TimeRange> {
    let mut common = Vec::new();
    for (i, first) in qualifying.iter().enumerate() {
        for second in &qualifying[i + 1..] {
            for a in &first.windows {
                for b in &second.windows {
                    if let Some(window) = a.intersection(b) {
                        if window.duration() >= duration {
                            common.push(window);
                        }
                    }
                }
            }
        }
    }
    common
}

/// How many optional attendees can attend each candidate window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<TimeRange, usize>,
}

impl FrequencyTable {
    /// Build the table from qualifying windows.
    ///
    /// A window's count is the number of attendees owning a qualifying window
    /// that contains it. Each attendee's windows are disjoint, so an attendee
    /// is counted at most once per window. A window nested inside another
    /// always counts strictly more attendees than the outer one, so nested
    /// windows never tie for the maximum.
    pub fn build(qualifying: &[Qualifying], duration: u32) -> Self {
        let mut windows = pairwise_intersections(qualifying, duration);
        windows.sort();
        windows.dedup();

        let counts = windows
            .into_iter()
            .map(|window| {
                let count = qualifying
                    .iter()
                    .filter(|q| q.windows.iter().any(|w| w.contains(&window)))
                    .count();
                (window, count)
            })
            .collect();

        Self { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Count for an exact window, or 0 if it was never seen.
    pub fn count(&self, window: &TimeRange) -> usize {
        self.counts.get(window).copied().unwrap_or(0)
    }

    /// Largest count in the table, 0 when empty.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Windows whose count equals `count`, ordered by start then end.
    pub fn windows_with_count(&self, count: usize) -> Vec<TimeRange> {
        self.counts
            .iter()
            .filter(|&(_, &c)| c == count)
            .map(|(window, _)| *window)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TimeRange, &usize)> {
        self.counts.iter()
    }
}
