//! # meeting-python
//!
//! Python bindings for meeting-engine, built with PyO3.
//!
//! Exposes the following functions to Python as the `meetfind` module:
//!
//! - `find_meeting_times(query_json)` -- `{events, request}` JSON -> JSON array of windows
//! - `plan_meeting(query_json)` -- same query, JSON plan with coverage details
//! - `free_time(query_json, attendee)` -- JSON array of one attendee's free windows

use meeting_engine::input::{parse_query, plan_to_json, windows_to_json};
use meeting_engine::Schedule;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Find every window where the requested meeting can be held.
///
/// Args:
///     query_json: A JSON document with `events` and `request`.
///
/// Returns:
///     A JSON string containing an array of `{start, end, duration_minutes}`.
///
/// Raises:
///     ValueError: If the document is malformed or an event range is invalid.
#[pyfunction]
fn find_meeting_times(query_json: &str) -> PyResult<String> {
    let (events, request) =
        parse_query(query_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let windows = meeting_engine::find_meeting_times(&events, &request);
    windows_to_json(&windows).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Run the query and report how the windows were chosen.
///
/// Returns:
///     A JSON string with `windows`, `mandatory_windows` and `coverage`.
#[pyfunction]
fn plan_meeting(query_json: &str) -> PyResult<String> {
    let (events, request) =
        parse_query(query_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let plan = meeting_engine::plan_meeting(&events, &request);
    plan_to_json(&plan).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Free time for a single attendee, given the events in `query_json`.
#[pyfunction]
fn free_time(query_json: &str, attendee: String) -> PyResult<String> {
    let (events, _) =
        parse_query(query_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let tracked = [attendee];
    let schedule = Schedule::build(&tracked, &events);
    windows_to_json(schedule.free_time(&tracked[0]))
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The `meetfind` Python module, implemented in Rust via PyO3.
#[pymodule]
fn meetfind(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_meeting_times, m)?)?;
    m.add_function(wrap_pyfunction!(plan_meeting, m)?)?;
    m.add_function(wrap_pyfunction!(free_time, m)?)?;
    Ok(())
}
