use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error(
        "invalid moving date `{text}` for trajectory {traj_number} of person `{person_id}`: expected dd/mm/yyyy"
    )]
    InvalidDate {
        traj_number: i64,
        person_id: String,
        text: String,
    },

    #[error("place `{id}` is not present in the place table")]
    MissingPlace { id: String },

    #[error("start radius offset {offset} must be less than the source-target distance {distance}")]
    InvalidOffset { offset: f64, distance: f64 },

    #[error("wave path requires at least 2 points, got {num_points}")]
    InsufficientPoints { num_points: usize },

    #[error("invalid viewport {width}x{height}: both dimensions must be finite and > 0")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
