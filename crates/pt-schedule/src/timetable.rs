//! Core timetable types: `Schedule`, `Line`, `Route`, `RouteStop`, `Departure`.
//!
//! # Ownership model
//!
//! The containers form a strict tree — a `Schedule` owns its `Line`s, a
//! `Line` owns its `Route`s, a `Route` owns its stop sequence and its
//! `Departure`s.  Identifiers are the only cross-reference mechanism; there
//! are no back-pointers.  All keyed collections are `BTreeMap`s so that
//! iteration order (and therefore diagnostics and output) is deterministic.
//!
//! # Trip timing
//!
//! A `Route` carries one stop *pattern* with per-stop offsets relative to
//! the pattern's nominal start; each `Departure` anchors that pattern at an
//! absolute time of day.  The arrival of a given departure at the route's
//! final stop is therefore a derived quantity:
//!
//! ```text
//! trip_arrival = departure_time + last_stop.(arrival | departure) offset
//! ```
//!
//! It is computed on demand for classification and never stored.

use std::collections::BTreeMap;

use pt_core::{DepartureId, LineId, RouteId, StopId, TimeOffset};

use crate::error::{ScheduleError, ScheduleResult};

// ── Departure ─────────────────────────────────────────────────────────────────

/// One scheduled run of a route's stop pattern.
///
/// `departure_time` is seconds from the start of the service day.  Values
/// outside 0–86 400 are legal and mean the run belongs to the previous or
/// next day (see [`crate::duplicate`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Departure {
    pub id: DepartureId,
    pub departure_time: f64,
}

impl Departure {
    pub fn new(id: impl Into<DepartureId>, departure_time: f64) -> Self {
        Self { id: id.into(), departure_time }
    }
}

// ── RouteStop ─────────────────────────────────────────────────────────────────

/// One entry in a route's ordered stop pattern.
///
/// Terminal stops legitimately carry `Undefined` on one side: the first stop
/// has no arrival offset, the last no departure offset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop {
    pub stop: StopId,
    /// Seconds from the route's nominal start until the vehicle arrives here.
    pub arrival_offset: TimeOffset,
    /// Seconds from the route's nominal start until the vehicle departs here.
    pub departure_offset: TimeOffset,
}

impl RouteStop {
    pub fn new(
        stop: impl Into<StopId>,
        arrival_offset: TimeOffset,
        departure_offset: TimeOffset,
    ) -> Self {
        Self { stop: stop.into(), arrival_offset, departure_offset }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered stop pattern and the set of departures that run it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    id: RouteId,
    stops: Vec<RouteStop>,
    departures: BTreeMap<DepartureId, Departure>,
}

impl Route {
    /// A route with the given stop pattern and no departures yet.
    pub fn new(id: impl Into<RouteId>, stops: Vec<RouteStop>) -> Self {
        Self { id: id.into(), stops, departures: BTreeMap::new() }
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    /// Read-only view of the stop pattern, in travel order.
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    /// Read-only view of all departures, keyed by id.
    pub fn departures(&self) -> &BTreeMap<DepartureId, Departure> {
        &self.departures
    }

    pub fn departure(&self, id: &DepartureId) -> Option<&Departure> {
        self.departures.get(id)
    }

    pub fn departure_count(&self) -> usize {
        self.departures.len()
    }

    /// Insert a departure, refusing to overwrite an existing id.
    ///
    /// Departure ids are unique per route at all times; silently replacing
    /// one would destroy an unrelated scheduled run.
    pub fn add_departure(&mut self, departure: Departure) -> ScheduleResult<()> {
        if self.departures.contains_key(&departure.id) {
            return Err(ScheduleError::DepartureIdCollision {
                route: self.id.clone(),
                id: departure.id,
            });
        }
        self.departures.insert(departure.id.clone(), departure);
        Ok(())
    }

    /// Offset of the trip's arrival at the final stop, relative to the
    /// route's nominal start.
    ///
    /// Prefers the last stop's arrival offset and falls back to its
    /// departure offset.  Returns `None` when the route has no stops or
    /// both terminal offsets are undefined — the malformed-route case,
    /// which callers must report rather than guess around.
    pub fn last_stop_arrival_offset(&self) -> Option<f64> {
        let last = self.stops.last()?;
        last.arrival_offset.or(last.departure_offset).seconds()
    }

    /// Absolute arrival time of `departure`'s trip at the route's final
    /// stop, or `None` for a malformed stop pattern.
    pub fn trip_arrival_time(&self, departure: &Departure) -> Option<f64> {
        Some(departure.departure_time + self.last_stop_arrival_offset()?)
    }
}

// ── Line ──────────────────────────────────────────────────────────────────────

/// A named transit line owning one or more stop-pattern routes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    id: LineId,
    routes: BTreeMap<RouteId, Route>,
}

impl Line {
    pub fn new(id: impl Into<LineId>) -> Self {
        Self { id: id.into(), routes: BTreeMap::new() }
    }

    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// Insert or replace the route stored under its own id.
    pub fn add_route(&mut self, route: Route) {
        self.routes.insert(route.id.clone(), route);
    }

    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    pub fn route_mut(&mut self, id: &RouteId) -> Option<&mut Route> {
        self.routes.get_mut(id)
    }

    pub fn routes(&self) -> &BTreeMap<RouteId, Route> {
        &self.routes
    }

    pub fn routes_mut(&mut self) -> &mut BTreeMap<RouteId, Route> {
        &mut self.routes
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// The root timetable aggregate: every line of the scenario, keyed by id.
///
/// Mutated in place by the duplication passes; there is no copy-on-write.
/// The caller must own it exclusively for the duration of a pass.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    lines: BTreeMap<LineId, Line>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the line stored under its own id.
    pub fn add_line(&mut self, line: Line) {
        self.lines.insert(line.id.clone(), line);
    }

    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.lines.get(id)
    }

    pub fn line_mut(&mut self, id: &LineId) -> Option<&mut Line> {
        self.lines.get_mut(id)
    }

    /// The line stored under `id`, created empty if absent.
    pub fn line_or_insert(&mut self, id: impl Into<LineId>) -> &mut Line {
        let id = id.into();
        self.lines
            .entry(id.clone())
            .or_insert_with(|| Line::new(id))
    }

    pub fn lines(&self) -> &BTreeMap<LineId, Line> {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut BTreeMap<LineId, Line> {
        &mut self.lines
    }

    /// Total departures across all lines and routes.
    pub fn departure_count(&self) -> usize {
        self.lines
            .values()
            .flat_map(|line| line.routes().values())
            .map(Route::departure_count)
            .sum()
    }
}
