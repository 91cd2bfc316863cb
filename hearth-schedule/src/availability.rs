use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use hearth_shared::{LocaleLabels, TimeOfDay};

use crate::models::{
    AvailabilitySnapshot, EntrySource, OpeningWindow, OperatingMode, ScheduleException,
    ScheduleWarning, WeeklySchedule,
};
use crate::window::TimeWindow;

/// How many days past today to look for the next opening
const LOOKAHEAD_DAYS: u64 = 7;

/// Inputs for one availability evaluation
#[derive(Debug, Clone)]
pub struct AvailabilityRequest<'a> {
    now: Option<NaiveDateTime>,
    schedule: &'a WeeklySchedule,
    exceptions: &'a [ScheduleException],
    mode: OperatingMode,
}

impl<'a> AvailabilityRequest<'a> {
    pub fn new(schedule: &'a WeeklySchedule) -> Self {
        Self {
            now: None,
            schedule,
            exceptions: &[],
            mode: OperatingMode::Automatic,
        }
    }

    pub fn exceptions(mut self, exceptions: &'a [ScheduleException]) -> Self {
        self.exceptions = exceptions;
        self
    }

    pub fn mode(mut self, mode: OperatingMode) -> Self {
        self.mode = mode;
        self
    }

    /// The business-local instant to evaluate
    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvailabilityError {
    #[error("Availability evaluated without a clock instant")]
    ClockNotProvided,
}

/// The schedule that governs one calendar date after exceptions are applied
struct EffectiveDay<'a> {
    entry: EntrySource,
    is_open: bool,
    windows: &'a [OpeningWindow],
}

/// Computes whether a business is open at a given instant.
///
/// Precedence, highest first: manual closure, an exception dated today, the
/// weekly entry for today's weekday. Nothing is cached; each call recomputes
/// from its inputs.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityEngine {
    labels: LocaleLabels,
}

impl AvailabilityEngine {
    pub fn new(labels: LocaleLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &LocaleLabels {
        &self.labels
    }

    pub fn evaluate(
        &self,
        request: &AvailabilityRequest<'_>,
    ) -> Result<AvailabilitySnapshot, AvailabilityError> {
        let now = request.now.ok_or(AvailabilityError::ClockNotProvided)?;
        Ok(self.evaluate_at(now, request.schedule, request.exceptions, request.mode))
    }

    pub fn evaluate_at(
        &self,
        now: NaiveDateTime,
        schedule: &WeeklySchedule,
        exceptions: &[ScheduleException],
        mode: OperatingMode,
    ) -> AvailabilitySnapshot {
        let mut warnings = Vec::new();

        if mode == OperatingMode::ManualClosed {
            tracing::debug!(evaluated_at = %now, "Business manually closed");
            return AvailabilitySnapshot {
                is_open: false,
                next_change_description: self.labels.closed_temporarily.clone(),
                evaluated_at: now,
                warnings,
            };
        }

        let today = now.date();
        let clock = TimeOfDay::from_naive_time(now.time());

        let effective = effective_day(today, schedule, exceptions, &mut warnings);
        let windows = if effective.is_open {
            valid_windows(&effective, &mut warnings)
        } else {
            Vec::new()
        };

        let matched = windows.iter().find(|window| window.contains(clock));

        let next_change_description = match matched {
            Some(window) => self.labels.closes_at(window.closes_at),
            None => match earliest_opening_after(&windows, clock) {
                Some(opens_at) => self.labels.opens_at(opens_at),
                None => self.next_opening_day(today, schedule, exceptions, &mut warnings),
            },
        };

        let snapshot = AvailabilitySnapshot {
            is_open: matched.is_some(),
            next_change_description,
            evaluated_at: now,
            warnings,
        };

        tracing::debug!(
            evaluated_at = %now,
            is_open = snapshot.is_open,
            next_change = %snapshot.next_change_description,
            "Availability evaluated"
        );

        snapshot
    }

    /// Describe the first opening on a later date, or "closed" if none is
    /// found within the lookahead.
    fn next_opening_day(
        &self,
        today: NaiveDate,
        schedule: &WeeklySchedule,
        exceptions: &[ScheduleException],
        warnings: &mut Vec<ScheduleWarning>,
    ) -> String {
        for offset in 1..=LOOKAHEAD_DAYS {
            let Some(date) = today.checked_add_days(Days::new(offset)) else {
                break;
            };

            let day = effective_day(date, schedule, exceptions, warnings);
            if !day.is_open {
                continue;
            }

            let first_opening = valid_windows(&day, warnings)
                .iter()
                .map(|window| window.opens_at)
                .min();

            if let Some(opens_at) = first_opening {
                return self.labels.opens_on(date.weekday(), opens_at);
            }
        }

        self.labels.closed.clone()
    }
}

fn effective_day<'a>(
    date: NaiveDate,
    schedule: &'a WeeklySchedule,
    exceptions: &'a [ScheduleException],
    warnings: &mut Vec<ScheduleWarning>,
) -> EffectiveDay<'a> {
    let mut matching = exceptions.iter().filter(|exception| exception.date == date);

    if let Some(exception) = matching.next() {
        if matching.next().is_some() {
            push_warning(warnings, ScheduleWarning::DuplicateException { date });
        }

        return EffectiveDay {
            entry: EntrySource::Exception(date),
            is_open: exception.is_open,
            windows: &exception.windows,
        };
    }

    let weekday = date.weekday();
    let entry = schedule.day(weekday);
    EffectiveDay {
        entry: EntrySource::Weekday(weekday),
        is_open: entry.is_open,
        windows: &entry.windows,
    }
}

/// Well-formed, non-empty windows in configured order
fn valid_windows(day: &EffectiveDay<'_>, warnings: &mut Vec<ScheduleWarning>) -> Vec<TimeWindow> {
    let mut windows = Vec::with_capacity(day.windows.len());

    for (index, row) in day.windows.iter().enumerate() {
        match row.validated() {
            Some(window) if !window.is_empty() => windows.push(window),
            Some(_) => {}
            None => push_warning(
                warnings,
                ScheduleWarning::MalformedScheduleEntry {
                    entry: day.entry,
                    index,
                },
            ),
        }
    }

    windows
}

fn earliest_opening_after(windows: &[TimeWindow], clock: TimeOfDay) -> Option<TimeOfDay> {
    windows
        .iter()
        .map(|window| window.opens_at)
        .filter(|opens_at| *opens_at > clock)
        .min()
}

fn push_warning(warnings: &mut Vec<ScheduleWarning>, warning: ScheduleWarning) {
    if warnings.contains(&warning) {
        return;
    }

    tracing::warn!("{}", warning);
    warnings.push(warning);
}
