use pt_core::{DepartureId, RouteId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid threshold {0}: must be a non-negative number of seconds")]
    InvalidThreshold(f64),

    #[error("departure id {id} already exists on route {route}")]
    DepartureIdCollision { route: RouteId, id: DepartureId },

    #[error("timetable parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
