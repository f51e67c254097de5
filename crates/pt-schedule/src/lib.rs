//! `pt-schedule` — transit timetable model, departure duplication, CSV loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`timetable`] | `Schedule`, `Line`, `Route`, `RouteStop`, `Departure`     |
//! | [`duplicate`] | `forward_late_departures`, `push_early_departures_to_next_night` |
//! | [`loader`]    | `load_schedule_csv`, `load_schedule_reader`               |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Duplication model (summary)
//!
//! Simulations run against a fixed service-day window, so a trip that is
//! still serving stops after hour 24 — or one that should already be under
//! way before hour 0 — is invisible unless an explicit duplicate departure
//! is injected at the time shifted by one day:
//!
//! ```text
//! forward_late_departures:            t >= threshold  →  clone at t − 86 400
//! push_early_departures_to_next_night: t < threshold  →  clone at t + 86 400
//! ```
//!
//! Both passes only ever *insert* departures; nothing pre-existing is
//! touched.  Each returns a [`DuplicationReport`] listing what was created
//! and which routes/departures had to be skipped.

pub mod duplicate;
pub mod error;
pub mod loader;
pub mod timetable;


pub use duplicate::{
    Diagnostic, DuplicationReport, forward_late_departures, push_early_departures_to_next_night,
};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_schedule_csv, load_schedule_reader};
pub use timetable::{Departure, Line, Route, RouteStop, Schedule};
