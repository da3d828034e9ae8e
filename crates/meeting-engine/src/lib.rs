//! # meeting-engine
//!
//! Deterministic meeting slot search for a single day.
//!
//! Given the day's events and a [`MeetingRequest`], the engine finds every
//! window where all mandatory attendees are free for the requested duration,
//! then prefers the windows that also fit the largest number of optional
//! attendees. Times are minutes since midnight; the day is `[0, 1440)`.
//!
//! ```rust
//! use meeting_engine::{find_meeting_times, minutes, Event, MeetingRequest, TimeRange, EndBound};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_duration(minutes(8, 30), 30),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let windows = find_meeting_times(&events, &request);
//! assert_eq!(
//!     windows,
//!     vec![
//!         TimeRange::from_start_end(0, minutes(8, 30), EndBound::Exclusive),
//!         TimeRange::from_start_end(minutes(9, 0), meeting_engine::END_OF_DAY, EndBound::Inclusive),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange` interval primitives and clock helpers
//! - [`event`] — `Event` and `MeetingRequest` inputs
//! - [`schedule`] — per-attendee free time from an event list
//! - [`mandatory`] — windows where every mandatory attendee is free
//! - [`coverage`] — optional-attendee qualifying windows and frequency table
//! - [`query`] — the public query operations
//! - [`input`] — JSON documents for non-Rust callers
//! - [`error`] — Error types

pub mod coverage;
pub mod error;
pub mod event;
pub mod input;
pub mod mandatory;
pub mod query;
pub mod range;
pub mod schedule;

pub use coverage::FrequencyTable;
pub use error::SchedulingError;
pub use event::{Event, MeetingRequest};
pub use query::{
    find_meeting_times, find_meeting_times_checked, first_meeting_time, plan_meeting, Coverage,
    MeetingPlan,
};
pub use range::{
    minutes, order_by_end, order_by_start, EndBound, TimeRange, END_OF_DAY, MINUTES_PER_DAY,
    START_OF_DAY, WHOLE_DAY,
};
pub use schedule::Schedule;
