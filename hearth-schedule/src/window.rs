use hearth_shared::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Whether `now` falls inside the window `[opens, closes)`, all values in
/// minutes since midnight.
///
/// A window whose close is earlier than its open wraps past midnight. Equal
/// bounds describe a zero-length window that never matches.
pub fn is_instant_in_window(now: u16, opens: u16, closes: u16) -> bool {
    if opens == closes {
        return false;
    }

    if closes < opens {
        now >= opens || now < closes
    } else {
        opens <= now && now < closes
    }
}

/// A well-formed opening interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub opens_at: TimeOfDay,
    pub closes_at: TimeOfDay,
}

impl TimeWindow {
    pub fn new(opens_at: TimeOfDay, closes_at: TimeOfDay) -> Self {
        Self { opens_at, closes_at }
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        is_instant_in_window(time.minutes(), self.opens_at.minutes(), self.closes_at.minutes())
    }

    pub fn is_empty(&self) -> bool {
        self.opens_at == self.closes_at
    }
}
