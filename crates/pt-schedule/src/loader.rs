//! CSV timetable loader.
//!
//! A schedule is described by two CSV files: one for the stop patterns and
//! one for the departures that run them.
//!
//! # Stops CSV
//!
//! One row per stop of a route's pattern, ordered by `seq` (rows may arrive
//! unsorted; they are sorted per route on load).  Empty offset cells mean
//! *undefined* — the usual case for the first stop's arrival and the last
//! stop's departure.
//!
//! ```csv
//! line_id,route_id,seq,stop_id,arrival_offset,departure_offset
//! red,redFirstToLast,0,A,,0
//! red,redFirstToLast,1,B,600,
//! ```
//!
//! # Departures CSV
//!
//! One row per scheduled run.  `departure_time` is seconds from the start
//! of the service day.
//!
//! ```csv
//! line_id,route_id,departure_id,departure_time
//! red,redFirstToLast,early,21600
//! red,redFirstToLast,midday,43200
//! ```
//!
//! A departure row referencing a route absent from the stops CSV is a parse
//! error, as is a departure id occurring twice within one route.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pt_core::{LineId, RouteId, TimeOffset};

use crate::error::{ScheduleError, ScheduleResult};
use crate::timetable::{Departure, Route, RouteStop, Schedule};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    line_id:          String,
    route_id:         String,
    seq:              u32,
    stop_id:          String,
    /// Empty cell → undefined offset.
    arrival_offset:   Option<f64>,
    departure_offset: Option<f64>,
}

#[derive(Deserialize)]
struct DepartureRecord {
    line_id:        String,
    route_id:       String,
    departure_id:   String,
    departure_time: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Schedule`] from a stops CSV and a departures CSV on disk.
pub fn load_schedule_csv(stops_path: &Path, departures_path: &Path) -> ScheduleResult<Schedule> {
    let stops = std::fs::File::open(stops_path).map_err(ScheduleError::Io)?;
    let departures = std::fs::File::open(departures_path).map_err(ScheduleError::Io)?;
    load_schedule_reader(stops, departures)
}

/// Like [`load_schedule_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or loading from network
/// streams.
pub fn load_schedule_reader<S: Read, D: Read>(
    stops: S,
    departures: D,
) -> ScheduleResult<Schedule> {
    // ── Parse stop rows, grouped per route ────────────────────────────────
    let mut stops_by_route: HashMap<(String, String), Vec<StopRecord>> = HashMap::new();
    let mut stop_reader = csv::Reader::from_reader(stops);
    for result in stop_reader.deserialize::<StopRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        stops_by_route
            .entry((row.line_id.clone(), row.route_id.clone()))
            .or_default()
            .push(row);
    }

    // ── Build lines and routes ────────────────────────────────────────────
    let mut schedule = Schedule::new();
    for ((line_id, route_id), mut rows) in stops_by_route.drain() {
        rows.sort_unstable_by_key(|r| r.seq);
        let stops: Vec<RouteStop> = rows
            .into_iter()
            .map(|r| {
                RouteStop::new(
                    r.stop_id,
                    offset_from_cell(r.arrival_offset),
                    offset_from_cell(r.departure_offset),
                )
            })
            .collect();

        schedule
            .line_or_insert(line_id)
            .add_route(Route::new(route_id, stops));
    }

    // ── Attach departures ─────────────────────────────────────────────────
    let mut departure_reader = csv::Reader::from_reader(departures);
    for result in departure_reader.deserialize::<DepartureRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let line_key = LineId::new(row.line_id.clone());
        let route_key = RouteId::new(row.route_id.clone());
        let route = schedule
            .line_mut(&line_key)
            .and_then(|line| line.route_mut(&route_key))
            .ok_or_else(|| {
                ScheduleError::Parse(format!(
                    "departure {} references unknown route {} of line {}",
                    row.departure_id, row.route_id, row.line_id
                ))
            })?;
        route.add_departure(Departure::new(row.departure_id, row.departure_time))?;
    }

    Ok(schedule)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn offset_from_cell(cell: Option<f64>) -> TimeOffset {
    match cell {
        Some(secs) => TimeOffset::Seconds(secs),
        None => TimeOffset::Undefined,
    }
}
