use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainingWeekError {
    #[error("unknown weekday name {0:?}")]
    UnknownWeekday(String),
    #[error("{0} is listed more than once in the training days")]
    DuplicateWeekday(Weekday),
}

/// The weekdays on which the athlete trains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingWeek {
    training_days: HashSet<Weekday>,
}

impl Default for TrainingWeek {
    fn default() -> Self {
        Self::new([Weekday::Mon, Weekday::Tue, Weekday::Fri, Weekday::Sat])
    }
}

impl TrainingWeek {
    pub const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn new<I>(training_days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        Self {
            training_days: training_days.into_iter().collect(),
        }
    }

    /// A week with no training days. Only rest-only splits can be mapped onto it.
    pub fn empty() -> Self {
        Self {
            training_days: HashSet::new(),
        }
    }

    /// Build from weekday names ("Monday", "tue", ...). Every name must be a
    /// valid weekday and appear once.
    pub fn from_names<I, S>(names: I) -> Result<Self, TrainingWeekError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut training_days = HashSet::new();
        for name in names {
            let name = name.as_ref();
            let day = Weekday::from_str(name.trim())
                .map_err(|_| TrainingWeekError::UnknownWeekday(name.to_string()))?;
            if !training_days.insert(day) {
                return Err(TrainingWeekError::DuplicateWeekday(day));
            }
        }
        Ok(Self { training_days })
    }

    pub fn is_empty(&self) -> bool {
        self.training_days.is_empty()
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.training_days.contains(&weekday)
    }

    /// Check if a date falls on one of the training weekdays
    pub fn is_training_day(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// Training weekdays in Monday-first order
    pub fn weekdays(&self) -> Vec<Weekday> {
        Self::ALL_WEEKDAYS
            .into_iter()
            .filter(|day| self.training_days.contains(day))
            .collect()
    }

    /// Full English names of the training weekdays, Monday first
    pub fn names(&self) -> Vec<&'static str> {
        self.weekdays().into_iter().map(weekday_name).collect()
    }

    /// Find the next training day strictly after `from`.
    /// Returns `None` for an empty week.
    pub fn next_training_day(&self, from: NaiveDate) -> Option<NaiveDate> {
        if self.is_empty() {
            return None;
        }
        let mut current = from.succ_opt()?;
        while !self.is_training_day(current) {
            current = current.succ_opt()?;
        }
        Some(current)
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
