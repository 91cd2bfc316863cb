pub mod window;
pub mod models;
pub mod availability;

pub use window::{is_instant_in_window, TimeWindow};
pub use models::{
    AvailabilitySnapshot, EntrySource, OpeningWindow, OperatingMode, ScheduleException,
    ScheduleWarning, WeekDaySchedule, WeeklySchedule,
};
pub use availability::{AvailabilityEngine, AvailabilityError, AvailabilityRequest};
