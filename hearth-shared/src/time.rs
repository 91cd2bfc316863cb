use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{SharedError, SharedResult};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day with minute precision.
///
/// Stored as minutes since midnight (`0..=1439`). The serialized form is the
/// zero-padded `"HH:MM"` string used by schedule configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub fn from_hm(hour: u8, minute: u8) -> SharedResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(SharedError::InvalidTimeOfDay(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self(hour as u16 * 60 + minute as u16))
    }

    pub fn from_minutes(minutes: u16) -> SharedResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(SharedError::InvalidTimeOfDay(format!("{} minutes", minutes)));
        }
        Ok(Self(minutes))
    }

    /// Seconds and sub-second precision are dropped.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SharedError::InvalidTimeOfDay(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if hour.len() > 2 || minute.len() != 2 || !digits(hour) || !digits(minute) {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
