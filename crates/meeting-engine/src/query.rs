//! Find the windows of a day where a meeting can be held.
//!
//! The pipeline is: build free schedules for everyone involved, intersect
//! the mandatory attendees' free time, then try to fit in as many optional
//! attendees as possible. When no optional attendee fits, the mandatory
//! windows are returned unchanged.

use serde::Serialize;
use tracing::debug;

use crate::coverage::{qualifying_windows, FrequencyTable};
use crate::error::Result;
use crate::event::{Event, MeetingRequest};
use crate::mandatory::mandatory_windows;
use crate::range::{TimeRange, MINUTES_PER_DAY};
use crate::schedule::Schedule;

/// Which rule produced the final windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Coverage {
    /// No optional attendee could be added; only mandatory attendees fit.
    MandatoryOnly,
    /// Exactly one optional attendee could join, in every returned window.
    SingleOptional { attendee: String },
    /// Each returned window fits `attendees` optional attendees, the most
    /// achievable.
    Optional { attendees: usize },
}

/// The result of a query together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingPlan {
    /// Final windows, ordered by start then end.
    pub windows: Vec<TimeRange>,
    /// Windows where every mandatory attendee is free.
    pub mandatory_windows: Vec<TimeRange>,
    pub coverage: Coverage,
}

/// Compute the windows where the meeting can be held.
///
/// Every returned window is at least `request.duration()` long. Callers are
/// expected to pass well-formed events; see [`find_meeting_times_checked`].
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    plan_meeting(events, request).windows
}

/// Validate every event, then run [`find_meeting_times`].
///
/// # Errors
/// Returns `SchedulingError::InvalidRange` for the first event whose range
/// runs backwards or past the end of the day.
pub fn find_meeting_times_checked(
    events: &[Event],
    request: &MeetingRequest,
) -> Result<Vec<TimeRange>> {
    for event in events {
        event.validate()?;
    }
    Ok(find_meeting_times(events, request))
}

/// The earliest window where the meeting can be held, if any.
pub fn first_meeting_time(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    find_meeting_times(events, request).into_iter().next()
}

/// Run the full query and report which rule picked the windows.
pub fn plan_meeting(events: &[Event], request: &MeetingRequest) -> MeetingPlan {
    let duration = request.duration();
    if duration > MINUTES_PER_DAY {
        debug!(duration, "requested duration exceeds the day");
        return MeetingPlan {
            windows: Vec::new(),
            mandatory_windows: Vec::new(),
            coverage: Coverage::MandatoryOnly,
        };
    }

    let schedule = Schedule::build(
        request.attendees().iter().chain(request.optional_attendees()),
        events,
    );

    let mandatory = mandatory_windows(request.attendees(), &schedule, duration);
    let qualifying = qualifying_windows(request.optional_attendees(), &mandatory, &schedule, duration);

    debug!(
        events = events.len(),
        mandatory_windows = mandatory.len(),
        optional_fit = qualifying.len(),
        "evaluated optional attendees"
    );

    if let [only] = qualifying.as_slice() {
        let mut windows = only.windows.clone();
        windows.sort();
        return MeetingPlan {
            windows,
            mandatory_windows: mandatory,
            coverage: Coverage::SingleOptional {
                attendee: only.attendee.clone(),
            },
        };
    }

    let table = FrequencyTable::build(&qualifying, duration);
    let best = table.max_count();
    if best == 0 {
        return MeetingPlan {
            windows: mandatory.clone(),
            mandatory_windows: mandatory,
            coverage: Coverage::MandatoryOnly,
        };
    }

    debug!(windows = table.len(), best, "selected best optional coverage");
    MeetingPlan {
        windows: table.windows_with_count(best),
        mandatory_windows: mandatory,
        coverage: Coverage::Optional { attendees: best },
    }
}
