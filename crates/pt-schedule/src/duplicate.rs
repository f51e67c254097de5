//! Departure duplication passes for day-window simulations.
//!
//! A simulation that runs against a fixed 24-hour window only sees trips
//! anchored inside that window.  Two service patterns fall through the
//! cracks:
//!
//! - a vehicle departing late in the evening is still serving stops after
//!   hour 24, but the run that should *already be under way* just after
//!   hour 0 does not exist;
//! - symmetrically, an early-morning run has no counterpart reachable late
//!   at night, so the timetable "ends" at the day boundary.
//!
//! [`forward_late_departures`] and [`push_early_departures_to_next_night`]
//! close both gaps by inserting duplicates of the affected departures,
//! shifted by exactly one day:
//!
//! ```text
//! t >= threshold  →  "copied-24h_<id>" at t − 86 400   (may go negative)
//! t <  threshold  →  "copied+24h_<id>" at t + 86 400
//! ```
//!
//! # Pass mechanics
//!
//! Each pass snapshots the candidate set of a route *before* inserting, so
//! the departure map is never mutated while being iterated and a freshly
//! inserted copy can never become a candidate of the same pass.
//!
//! Per-route problems (unresolvable terminal arrival, synthetic-id
//! collision) never abort the pass: the affected departure or route is
//! skipped, a [`Diagnostic`] is accumulated on the returned
//! [`DuplicationReport`], and every other route is still processed.  Only a
//! negative threshold — a caller bug — fails the whole call, eagerly,
//! before any mutation.

use log::warn;
use pt_core::{DepartureId, LineId, RouteId, SECONDS_PER_DAY};
use thiserror::Error;

use crate::error::{ScheduleError, ScheduleResult};
use crate::timetable::{Departure, Route, Schedule};

/// Prefix of departures duplicated one day earlier.
pub const COPIED_BACK_PREFIX: &str = "copied-24h_";

/// Prefix of departures duplicated one day later.
pub const COPIED_FORWARD_PREFIX: &str = "copied+24h_";

// ── Report ────────────────────────────────────────────────────────────────────

/// Non-fatal problem encountered while duplicating one route's departures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The synthetic id for a copy already exists on the route.  The copy is
    /// dropped; the pre-existing departure is never overwritten.
    #[error("route {route} of line {line}: departure id {id} already exists, copy dropped")]
    IdCollision {
        line: LineId,
        route: RouteId,
        id: DepartureId,
    },

    /// The route's terminal arrival cannot be resolved (no stops, or both
    /// terminal offsets undefined), so its departures cannot be classified
    /// against the midnight boundary and are skipped.
    #[error("route {route} of line {line}: no resolvable terminal arrival offset, departures skipped")]
    UnresolvedArrival { line: LineId, route: RouteId },
}

/// Outcome of one duplication pass.
#[derive(Debug, Default)]
pub struct DuplicationReport {
    /// Ids of the departures created by this pass, in insertion order.
    pub created: Vec<DepartureId>,
    /// Problems that caused individual departures or routes to be skipped.
    pub diagnostics: Vec<Diagnostic>,
}

impl DuplicationReport {
    /// Number of departures created.
    pub fn copies(&self) -> usize {
        self.created.len()
    }

    /// `true` if the pass completed without skipping anything.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

// ── Late-departure forwarding ─────────────────────────────────────────────────

/// Duplicate late departures to the start of the service day.
///
/// Every departure with `departure_time >= threshold_secs` whose id does not
/// contain `exclusion_marker` is copied to `departure_time − 86 400` under
/// the id `copied-24h_<source id>`, making a run that started "yesterday
/// evening" visible at the start of today's window.  The copied time is
/// usually negative; downstream consumers interpret it as a trip already in
/// progress at hour 0.
///
/// A trip that arrives at its final stop *before* midnight never needs this
/// treatment for correctness, so such departures are copied only when
/// `copy_despite_arrival_before_midnight` is set.  Trips arriving after
/// midnight are always copied.
///
/// Existing departures are never mutated or removed.  Routes whose terminal
/// arrival cannot be resolved are skipped with a diagnostic; the early-push
/// pass has no such dependency and handles them normally.
pub fn forward_late_departures(
    schedule: &mut Schedule,
    threshold_secs: f64,
    exclusion_marker: Option<&str>,
    copy_despite_arrival_before_midnight: bool,
) -> ScheduleResult<DuplicationReport> {
    check_threshold(threshold_secs)?;

    let mut report = DuplicationReport::default();
    for (line_id, line) in schedule.lines_mut() {
        for route in line.routes_mut().values_mut() {
            let candidates = snapshot_candidates(route, exclusion_marker, |d| {
                d.departure_time >= threshold_secs
            });
            if candidates.is_empty() {
                continue;
            }

            // Arrival classification needs the terminal offset; without one
            // the whole route is skipped for this pass.
            let Some(arrival_offset) = route.last_stop_arrival_offset() else {
                report.diagnose(Diagnostic::UnresolvedArrival {
                    line: line_id.clone(),
                    route: route.id().clone(),
                });
                continue;
            };

            for departure in candidates {
                let arrival = departure.departure_time + arrival_offset;
                let arrives_before_midnight = arrival <= SECONDS_PER_DAY;
                if arrives_before_midnight && !copy_despite_arrival_before_midnight {
                    continue;
                }
                insert_copy(
                    line_id,
                    route,
                    &departure,
                    COPIED_BACK_PREFIX,
                    -SECONDS_PER_DAY,
                    &mut report,
                );
            }
        }
    }
    Ok(report)
}

// ── Early-departure pushing ───────────────────────────────────────────────────

/// Duplicate early departures to the following night.
///
/// Every departure with `departure_time < threshold_secs` whose id does not
/// contain `exclusion_marker` is copied to `departure_time + 86 400` under
/// the id `copied+24h_<source id>`, extending the reachable timetable past
/// the nominal end of the day.  Unlike the late-forward pass this is
/// unconditional — no midnight classification applies, so malformed stop
/// patterns do not get in the way.
pub fn push_early_departures_to_next_night(
    schedule: &mut Schedule,
    threshold_secs: f64,
    exclusion_marker: Option<&str>,
) -> ScheduleResult<DuplicationReport> {
    check_threshold(threshold_secs)?;

    let mut report = DuplicationReport::default();
    for (line_id, line) in schedule.lines_mut() {
        for route in line.routes_mut().values_mut() {
            let candidates = snapshot_candidates(route, exclusion_marker, |d| {
                d.departure_time < threshold_secs
            });
            for departure in candidates {
                insert_copy(
                    line_id,
                    route,
                    &departure,
                    COPIED_FORWARD_PREFIX,
                    SECONDS_PER_DAY,
                    &mut report,
                );
            }
        }
    }
    Ok(report)
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Reject negative (or NaN) thresholds before touching the schedule.
fn check_threshold(threshold_secs: f64) -> ScheduleResult<()> {
    if threshold_secs >= 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::InvalidThreshold(threshold_secs))
    }
}

/// Clone the route's departures that satisfy `pred` and are not excluded.
///
/// The snapshot decouples selection from insertion: the departure map is
/// mutated only after iteration is done, and copies inserted by this pass
/// are never reconsidered as candidates.
fn snapshot_candidates(
    route: &Route,
    exclusion_marker: Option<&str>,
    pred: impl Fn(&Departure) -> bool,
) -> Vec<Departure> {
    route
        .departures()
        .values()
        .filter(|d| pred(d))
        .filter(|d| !exclusion_marker.is_some_and(|marker| d.id.contains(marker)))
        .cloned()
        .collect()
}

/// Insert the day-shifted copy of `source`, recording success or collision.
fn insert_copy(
    line_id: &LineId,
    route: &mut Route,
    source: &Departure,
    prefix: &str,
    shift_secs: f64,
    report: &mut DuplicationReport,
) {
    let copy = Departure {
        id: source.id.with_prefix(prefix),
        departure_time: source.departure_time + shift_secs,
    };
    let id = copy.id.clone();
    match route.add_departure(copy) {
        Ok(()) => report.created.push(id),
        Err(ScheduleError::DepartureIdCollision { route, id }) => {
            report.diagnose(Diagnostic::IdCollision {
                line: line_id.clone(),
                route,
                id,
            });
        }
        // add_departure only ever reports collisions.
        Err(_) => unreachable!("unexpected error inserting departure copy"),
    }
}
