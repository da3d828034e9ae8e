//! Windows where every mandatory attendee is free at once.

use tracing::debug;

use crate::range::{TimeRange, MINUTES_PER_DAY, WHOLE_DAY};
use crate::schedule::Schedule;

/// Intersect every candidate with every free interval, keeping overlaps of at
/// least `duration` minutes.
///
/// The result never widens a candidate: each output lies inside exactly one
/// input candidate and one free interval. Output order follows candidate
/// order, then free-interval order, so ordered inputs give an ordered output.
pub fn narrow(candidates: &[TimeRange], free: &[TimeRange], duration: u32) -> Vec<TimeRange> {
    let mut narrowed = Vec::new();
    for candidate in candidates {
        for slot in free {
            if let Some(common) = candidate.intersection(slot) {
                if common.duration() >= duration {
                    narrowed.push(common);
                }
            }
        }
    }
    narrowed
}

/// Compute the mandatory candidate windows.
///
/// With no mandatory attendees the whole day is the single candidate. A
/// duration longer than the day yields no candidates at all. Otherwise the
/// first attendee's long-enough free intervals seed the set, and every
/// further attendee narrows it.
pub fn mandatory_windows(attendees: &[String], schedule: &Schedule, duration: u32) -> Vec<TimeRange> {
    if duration > MINUTES_PER_DAY {
        return Vec::new();
    }

    let Some((first, rest)) = attendees.split_first() else {
        return vec![WHOLE_DAY];
    };

    let mut candidates: Vec<TimeRange> = schedule
        .free_time(first)
        .iter()
        .copied()
        .filter(|slot| slot.duration() >= duration)
        .collect();

    for attendee in rest {
        if candidates.is_empty() {
            break;
        }
        candidates = narrow(&candidates, schedule.free_time(attendee), duration);
    }

    debug!(
        attendees = attendees.len(),
        candidates = candidates.len(),
        "resolved mandatory windows"
    );
    candidates
}
