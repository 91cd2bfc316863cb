use chrono::{NaiveDate, NaiveDateTime, Weekday};
use hearth_schedule::{
    AvailabilityEngine, AvailabilityRequest, AvailabilitySnapshot, EntrySource, OperatingMode,
    ScheduleException, ScheduleWarning, TimeWindow, WeekDaySchedule, WeeklySchedule,
};
use hearth_shared::{LocaleLabels, TimeOfDay};

fn window(opens: &str, closes: &str) -> TimeWindow {
    TimeWindow::new(opens.parse().unwrap(), closes.parse().unwrap())
}

fn date(day: u32) -> NaiveDate {
    // March 2024: the 4th is a Monday
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    date(day).and_hms_opt(h, m, 0).unwrap()
}

fn restaurant() -> WeeklySchedule {
    WeeklySchedule::default()
        .with_day(
            Weekday::Mon,
            WeekDaySchedule::open([window("08:00", "14:00"), window("18:00", "23:00")]),
        )
        .with_day(Weekday::Tue, WeekDaySchedule::closed())
        .with_day(Weekday::Wed, WeekDaySchedule::open([window("09:00", "12:00")]))
}

fn evaluate(
    now: NaiveDateTime,
    schedule: &WeeklySchedule,
    exceptions: &[ScheduleException],
) -> AvailabilitySnapshot {
    AvailabilityEngine::default().evaluate_at(now, schedule, exceptions, OperatingMode::Automatic)
}

#[test]
fn test_open_during_lunch() {
    let snapshot = evaluate(at(4, 13, 0), &restaurant(), &[]);

    assert!(snapshot.is_open);
    assert_eq!(snapshot.next_change_description, "Closes at 14:00");
}

#[test]
fn test_closed_between_services() {
    let snapshot = evaluate(at(4, 15, 0), &restaurant(), &[]);

    assert!(!snapshot.is_open);
    assert_eq!(snapshot.next_change_description, "Opens at 18:00");
}

#[test]
fn test_late_night_skips_closed_day() {
    let snapshot = evaluate(at(4, 23, 30), &restaurant(), &[]);

    assert!(!snapshot.is_open);
    assert_eq!(snapshot.next_change_description, "Opens Wednesday at 09:00");
}

#[test]
fn test_future_exception_applies_during_scan() {
    let exceptions = [
        ScheduleException::closed(date(6), "Staff training"),
        ScheduleException::open(date(5), "Pop-up brunch", [window("10:30", "13:00")]),
    ];

    let snapshot = evaluate(at(4, 23, 30), &restaurant(), &exceptions);
    assert_eq!(snapshot.next_change_description, "Opens Tuesday at 10:30");

    let exceptions = [ScheduleException::closed(date(6), "Staff training")];
    let snapshot = evaluate(at(4, 23, 30), &restaurant(), &exceptions);
    // Wednesday is closed, so the scan wraps around to next Monday
    assert_eq!(snapshot.next_change_description, "Opens Monday at 08:00");
}

#[test]
fn test_exception_closes_an_open_day() {
    let exceptions = [ScheduleException::closed(date(4), "Public holiday")];

    let snapshot = evaluate(at(4, 13, 0), &restaurant(), &exceptions);
    assert!(!snapshot.is_open);
}

#[test]
fn test_never_open_schedule() {
    let snapshot = evaluate(at(4, 12, 0), &WeeklySchedule::default(), &[]);

    assert!(!snapshot.is_open);
    assert_eq!(snapshot.next_change_description, "Closed");
}

#[test]
fn test_manual_closure_wins() {
    let engine = AvailabilityEngine::default();
    let exceptions = [ScheduleException::open(
        date(4),
        "Extended hours",
        [window("00:00", "23:59")],
    )];

    let schedule = restaurant();
    let request = AvailabilityRequest::new(&schedule)
        .exceptions(&exceptions)
        .mode(OperatingMode::ManualClosed)
        .at(at(4, 13, 0));
    let snapshot = engine.evaluate(&request).unwrap();

    assert!(!snapshot.is_open);
    assert_eq!(snapshot.next_change_description, "Closed temporarily");
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let schedule = restaurant();

    let first = evaluate(at(4, 15, 0), &schedule, &[]);
    let second = evaluate(at(4, 15, 0), &schedule, &[]);
    assert_eq!(first, second);
}

#[test]
fn test_localized_descriptions() {
    let labels = LocaleLabels {
        opens_on: "Abre {day} às {time}".to_string(),
        weekdays: ["seg", "ter", "qua", "qui", "sex", "sáb", "dom"].map(String::from),
        ..LocaleLabels::default()
    };
    let engine = AvailabilityEngine::new(labels);

    let snapshot =
        engine.evaluate_at(at(4, 23, 30), &restaurant(), &[], OperatingMode::Automatic);
    assert_eq!(snapshot.next_change_description, "Abre qua às 09:00");
}

#[test]
fn test_schedule_loaded_from_stored_rows() {
    // Thursday has a row with no closing time
    let stored = serde_json::json!([
        { "is_open": true, "windows": [{ "opens_at": "08:00", "closes_at": "14:00" }] },
        { "is_open": false, "windows": [] },
        { "is_open": true, "windows": [{ "opens_at": "09:00", "closes_at": "12:00" }] },
        {
            "is_open": true,
            "windows": [
                { "opens_at": "17:00" },
                { "opens_at": "20:00", "closes_at": "02:00" }
            ]
        },
        { "is_open": false },
        {},
        {}
    ]);
    let schedule: WeeklySchedule = serde_json::from_value(stored).unwrap();

    // 2024-03-07 is a Thursday
    let snapshot = evaluate(at(7, 21, 0), &schedule, &[]);

    assert!(snapshot.is_open);
    assert_eq!(snapshot.next_change_description, "Closes at 02:00");
    assert_eq!(
        snapshot.warnings,
        vec![ScheduleWarning::MalformedScheduleEntry {
            entry: EntrySource::Weekday(Weekday::Thu),
            index: 0,
        }]
    );
}

#[test]
fn test_unparseable_bounds_only_skip_their_row() {
    let stored = serde_json::json!([
        {
            "is_open": true,
            "windows": [
                { "opens_at": "08:00", "closes_at": "" },
                { "opens_at": "25:00", "closes_at": "14:00" },
                { "opens_at": "18:00", "closes_at": "23:00" }
            ]
        },
        {}, {}, {}, {}, {}, {}
    ]);
    let schedule: WeeklySchedule = serde_json::from_value(stored).unwrap();

    let exceptions: Vec<ScheduleException> = serde_json::from_value(serde_json::json!([
        {
            "date": "2024-03-05",
            "name": "Market day",
            "is_open": true,
            "windows": [{ "opens_at": "", "closes_at": "12:00" }]
        }
    ]))
    .unwrap();

    let snapshot = evaluate(at(4, 19, 0), &schedule, &exceptions);
    assert!(snapshot.is_open);
    assert_eq!(snapshot.next_change_description, "Closes at 23:00");

    let malformed = |index| ScheduleWarning::MalformedScheduleEntry {
        entry: EntrySource::Weekday(Weekday::Mon),
        index,
    };
    assert_eq!(snapshot.warnings, vec![malformed(0), malformed(1)]);

    // Tuesday's exception has no usable window, so the next opening is a week out
    let snapshot = evaluate(at(4, 23, 30), &schedule, &exceptions);
    assert_eq!(snapshot.next_change_description, "Opens Monday at 18:00");
    assert!(snapshot
        .warnings
        .contains(&ScheduleWarning::MalformedScheduleEntry {
            entry: EntrySource::Exception(date(5)),
            index: 0,
        }));
}

#[test]
fn test_seconds_are_ignored() {
    let now = date(4).and_hms_opt(13, 59, 59).unwrap();

    let snapshot = evaluate(now, &restaurant(), &[]);
    assert!(snapshot.is_open);
    assert_eq!(TimeOfDay::from_naive_time(now.time()).to_string(), "13:59");
}
