//! JSON documents for callers outside Rust (CLI, WASM, Python).
//!
//! Times are written as `"HH:MM"` clock strings; `"24:00"` marks the end of
//! the day.
//!
//! ```json
//! {
//!   "events": [
//!     { "name": "Standup", "start": "09:00", "end": "09:30", "attendees": ["alice"] }
//!   ],
//!   "request": { "attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{Event, MeetingRequest};
use crate::query::MeetingPlan;
use crate::range::{format_clock, parse_clock, TimeRange};

#[derive(Debug, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub name: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RequestInput {
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub optional_attendees: Vec<String>,
    pub duration: u32,
}

/// A whole query: the day's events and the meeting request.
#[derive(Debug, Deserialize)]
pub struct QueryInput {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: RequestInput,
}

/// A window rendered for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowOutput {
    pub start: String,
    pub end: String,
    pub duration_minutes: u32,
}

impl From<&TimeRange> for WindowOutput {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: format_clock(range.start()),
            end: format_clock(range.end()),
            duration_minutes: range.duration(),
        }
    }
}

impl EventInput {
    pub fn into_event(self) -> Result<Event> {
        let when = TimeRange::try_new(parse_clock(&self.start)?, parse_clock(&self.end)?)?;
        Ok(Event::new(self.name, when, self.attendees))
    }
}

impl RequestInput {
    pub fn into_request(self) -> MeetingRequest {
        MeetingRequest::new(self.attendees, self.duration)
            .with_optional_attendees(self.optional_attendees)
    }
}

/// Parse a query document into engine types.
///
/// # Errors
/// Returns `SchedulingError::Json` for malformed JSON, `InvalidClock` for a
/// bad `"HH:MM"` string, and `InvalidRange` for an event that ends before it
/// starts.
pub fn parse_query(json: &str) -> Result<(Vec<Event>, MeetingRequest)> {
    let input: QueryInput = serde_json::from_str(json)?;
    let events = input
        .events
        .into_iter()
        .map(EventInput::into_event)
        .collect::<Result<Vec<_>>>()?;
    Ok((events, input.request.into_request()))
}

/// Render windows as a JSON array of `{start, end, duration_minutes}`.
pub fn windows_to_json(windows: &[TimeRange]) -> Result<String> {
    let dtos: Vec<WindowOutput> = windows.iter().map(WindowOutput::from).collect();
    Ok(serde_json::to_string(&dtos)?)
}

/// Render a [`MeetingPlan`] as JSON, with windows in clock form.
pub fn plan_to_json(plan: &MeetingPlan) -> Result<String> {
    #[derive(Serialize)]
    struct PlanOutput<'a> {
        windows: Vec<WindowOutput>,
        mandatory_windows: Vec<WindowOutput>,
        coverage: &'a crate::query::Coverage,
    }

    let output = PlanOutput {
        windows: plan.windows.iter().map(WindowOutput::from).collect(),
        mandatory_windows: plan.mandatory_windows.iter().map(WindowOutput::from).collect(),
        coverage: &plan.coverage,
    };
    Ok(serde_json::to_string(&output)?)
}
