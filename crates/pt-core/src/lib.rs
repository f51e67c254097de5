//! `pt-core` — foundational types for the `pt` transit-schedule toolkit.
//!
//! This crate is a dependency of every other `pt-*` crate.  It intentionally
//! has no `pt-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                                  |
//! |----------|-----------------------------------------------------------|
//! | [`ids`]  | `LineId`, `RouteId`, `StopId`, `DepartureId`              |
//! | [`time`] | `SECONDS_PER_DAY`, `hms`, `TimeOffset`                    |
//! | [`error`]| `PtError`, `PtResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PtError, PtResult};
pub use ids::{DepartureId, LineId, RouteId, StopId};
pub use time::{SECONDS_PER_DAY, TimeOffset, hms};
