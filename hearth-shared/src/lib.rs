pub mod time;
pub mod locale;

pub use time::TimeOfDay;
pub use locale::{CancellationLabels, LocaleLabels};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SharedError {
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),
}

pub type SharedResult<T> = Result<T, SharedError>;
