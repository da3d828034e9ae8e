//! WASM bindings for meeting-engine.
//!
//! Exposes meeting slot search and per-attendee free time to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings in the
//! document format of `meeting_engine::input`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meetfind-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! ```

use meeting_engine::input::{parse_query, plan_to_json, windows_to_json, WindowOutput};
use meeting_engine::{Schedule, SchedulingError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct AttendeeFreeDto {
    attendee: String,
    free: Vec<WindowOutput>,
}

fn to_js(e: SchedulingError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Find every window where the requested meeting can be held.
///
/// `query_json` is a `{events, request}` document. Returns a JSON string with
/// an array of `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(query_json: &str) -> Result<String, JsValue> {
    let (events, request) = parse_query(query_json).map_err(to_js)?;
    let windows = meeting_engine::find_meeting_times(&events, &request);
    windows_to_json(&windows).map_err(to_js)
}

/// Like [`find_meeting_times`], but returns the full plan: `windows`,
/// `mandatory_windows`, and the `coverage` rule that picked them.
#[wasm_bindgen(js_name = "planMeeting")]
pub fn plan_meeting(query_json: &str) -> Result<String, JsValue> {
    let (events, request) = parse_query(query_json).map_err(to_js)?;
    let plan = meeting_engine::plan_meeting(&events, &request);
    plan_to_json(&plan).map_err(to_js)
}

/// Free time for every attendee named in the request.
///
/// Returns a JSON array of `{attendee, free: [{start, end, duration_minutes}]}`
/// ordered by attendee name.
#[wasm_bindgen(js_name = "freeTime")]
pub fn free_time(query_json: &str) -> Result<String, JsValue> {
    let (events, request) = parse_query(query_json).map_err(to_js)?;
    let schedule = Schedule::build(
        request.attendees().iter().chain(request.optional_attendees()),
        &events,
    );

    let dtos: Vec<AttendeeFreeDto> = schedule
        .iter()
        .map(|(attendee, free)| AttendeeFreeDto {
            attendee: attendee.to_string(),
            free: free.iter().map(WindowOutput::from).collect(),
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
