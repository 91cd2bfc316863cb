use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use hearth_shared::TimeOfDay;
use serde::{Deserialize, Deserializer, Serialize};

use crate::window::TimeWindow;

/// An opening window as stored in business configuration.
///
/// A bound that is missing, empty or not a valid `HH:MM` is read as `None`;
/// such rows are skipped during evaluation and reported as warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningWindow {
    #[serde(deserialize_with = "lenient_bound")]
    pub opens_at: Option<TimeOfDay>,
    #[serde(deserialize_with = "lenient_bound")]
    pub closes_at: Option<TimeOfDay>,
}

fn lenient_bound<'de, D>(deserializer: D) -> Result<Option<TimeOfDay>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredBound {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<StoredBound>::deserialize(deserializer)? {
        Some(StoredBound::Text(text)) => text.parse().ok(),
        Some(StoredBound::Other(_)) | None => None,
    })
}

impl OpeningWindow {
    pub fn validated(&self) -> Option<TimeWindow> {
        Some(TimeWindow::new(self.opens_at?, self.closes_at?))
    }
}

impl From<TimeWindow> for OpeningWindow {
    fn from(window: TimeWindow) -> Self {
        Self {
            opens_at: Some(window.opens_at),
            closes_at: Some(window.closes_at),
        }
    }
}

/// Recurring hours for one weekday
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekDaySchedule {
    pub is_open: bool,
    pub windows: Vec<OpeningWindow>,
}

impl WeekDaySchedule {
    pub fn open(windows: impl IntoIterator<Item = TimeWindow>) -> Self {
        Self {
            is_open: true,
            windows: windows.into_iter().map(OpeningWindow::from).collect(),
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }
}

/// The seven weekday entries, Monday first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: [WeekDaySchedule; 7],
}

impl WeeklySchedule {
    pub fn day(&self, weekday: Weekday) -> &WeekDaySchedule {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn set_day(&mut self, weekday: Weekday, schedule: WeekDaySchedule) {
        self.days[weekday.num_days_from_monday() as usize] = schedule;
    }

    pub fn with_day(mut self, weekday: Weekday, schedule: WeekDaySchedule) -> Self {
        self.set_day(weekday, schedule);
        self
    }
}

/// Hours for one calendar date, replacing the weekly entry for that date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleException {
    pub date: NaiveDate,
    pub name: String,
    pub is_open: bool,
    #[serde(default)]
    pub windows: Vec<OpeningWindow>,
}

impl ScheduleException {
    pub fn closed(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            is_open: false,
            windows: Vec::new(),
        }
    }

    pub fn open(
        date: NaiveDate,
        name: impl Into<String>,
        windows: impl IntoIterator<Item = TimeWindow>,
    ) -> Self {
        Self {
            date,
            name: name.into(),
            is_open: true,
            windows: windows.into_iter().map(OpeningWindow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    /// Open and closed follow the schedule
    #[default]
    Automatic,
    /// Forced closed regardless of schedule
    ManualClosed,
}

/// Open/closed answer at a single instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilitySnapshot {
    pub is_open: bool,
    pub next_change_description: String,
    pub evaluated_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ScheduleWarning>,
}

/// Which configuration row a warning points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    Weekday(Weekday),
    Exception(NaiveDate),
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySource::Weekday(day) => write!(f, "weekly entry for {}", day),
            EntrySource::Exception(date) => write!(f, "exception on {}", date),
        }
    }
}

/// Data-quality problems found while evaluating a schedule. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleWarning {
    #[error("Malformed schedule entry: window {index} of {entry} has a missing or invalid bound")]
    MalformedScheduleEntry { entry: EntrySource, index: usize },

    #[error("Multiple schedule exceptions for {date}, using the first")]
    DuplicateException { date: NaiveDate },
}
