use chrono::{Datelike, NaiveDate, Weekday};
use training_schedule::calendar::{TrainingWeek, TrainingWeekError};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn default_week_trains_monday_tuesday_friday_saturday() {
    let week = TrainingWeek::default();
    assert_eq!(week.names(), vec!["Monday", "Tuesday", "Friday", "Saturday"]);
    // 2026-01-01 is a Thursday, 2026-01-02 a Friday
    assert!(!week.is_training_day(d(2026, 1, 1)));
    assert!(week.is_training_day(d(2026, 1, 2)));
}

#[test]
fn from_names_accepts_full_and_short_names() {
    let week = TrainingWeek::from_names(["Sunday", "wed", "MONDAY"]).unwrap();
    assert_eq!(week.weekdays(), vec![Weekday::Mon, Weekday::Wed, Weekday::Sun]);
}

#[test]
fn from_names_rejects_unknown_and_duplicate_days() {
    assert_eq!(
        TrainingWeek::from_names(["Monday", "Funday"]).unwrap_err(),
        TrainingWeekError::UnknownWeekday("Funday".to_string())
    );
    assert_eq!(
        TrainingWeek::from_names(["Monday", "Tuesday", "mon"]).unwrap_err(),
        TrainingWeekError::DuplicateWeekday(Weekday::Mon)
    );
}

#[test]
fn next_training_day_skips_rest_days() {
    let week = TrainingWeek::default();
    // From Saturday 2026-01-03 the next training day is Monday 2026-01-05
    let next = week.next_training_day(d(2026, 1, 3)).unwrap();
    assert_eq!(next.weekday(), Weekday::Mon);
    assert_eq!(next, d(2026, 1, 5));
    assert_eq!(TrainingWeek::empty().next_training_day(d(2026, 1, 3)), None);
    assert_eq!(week.next_training_day(NaiveDate::MAX), None);
}
