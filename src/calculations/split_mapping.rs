use crate::calendar::TrainingWeek;
use crate::protocol::Protocol;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error(
        "no training days are configured but the split contains {protocol:?}, which can only be scheduled on a training day"
    )]
    InvalidConfiguration { protocol: String },
    #[error("{}", describe_invalid_label(.position, .label))]
    InvalidLabel {
        position: Option<usize>,
        label: String,
    },
    #[error("schedule runs past the last representable date after {last}")]
    DateOverflow { last: NaiveDate },
    #[error(
        "schedule starting {start} needs at least {required_days} days but only {available_days} are representable"
    )]
    ExceedsDateRange {
        start: NaiveDate,
        required_days: u64,
        available_days: u64,
    },
}

impl MappingError {
    pub(crate) fn at_position(self, position: usize) -> Self {
        match self {
            MappingError::InvalidLabel { label, .. } => MappingError::InvalidLabel {
                position: Some(position),
                label,
            },
            other => other,
        }
    }
}

fn describe_invalid_label(position: &Option<usize>, label: &str) -> String {
    match position {
        Some(position) => {
            format!("split entry {position} ({label:?}) is not a usable protocol label")
        }
        None => format!("{label:?} is not a usable protocol label"),
    }
}

/// One dated calendar row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub protocol: Protocol,
}

/// Result of mapping a split onto the calendar: a contiguous run of days from
/// `start_date` through the last written date, each carrying exactly one protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMapping {
    start_date: NaiveDate,
    entries: BTreeMap<NaiveDate, Protocol>,
}

impl SplitMapping {
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last date written, `None` when nothing was scheduled.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next_back().copied()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Protocol> {
        self.entries.get(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Protocol)> + '_ {
        self.entries.iter().map(|(date, protocol)| (*date, protocol))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.entries.keys().copied().collect()
    }

    /// Dates carrying a named protocol
    pub fn training_dates(&self) -> Vec<NaiveDate> {
        self.iter()
            .filter(|(_, protocol)| !protocol.is_rest())
            .map(|(date, _)| date)
            .collect()
    }

    pub fn rest_count(&self) -> usize {
        self.entries.values().filter(|p| p.is_rest()).count()
    }

    pub fn protocol_count(&self) -> usize {
        self.len() - self.rest_count()
    }

    pub fn entries(&self) -> Vec<CalendarEntry> {
        self.iter()
            .map(|(date, protocol)| CalendarEntry {
                date,
                protocol: protocol.clone(),
            })
            .collect()
    }
}

pub struct SplitMapper<'a> {
    split: &'a [Protocol],
    cycles: u32,
    week: &'a TrainingWeek,
}

impl<'a> SplitMapper<'a> {
    pub fn new(split: &'a [Protocol], cycles: u32, week: &'a TrainingWeek) -> Self {
        Self {
            split,
            cycles,
            week,
        }
    }

    /// Walk a cursor forward from `start_date`, repeating the split `cycles`
    /// times. Rest entries that land on a training day are dropped without
    /// moving the cursor; named protocols wait for the next training day and
    /// every skipped day is filled with rest.
    ///
    /// The calendar holds one entry per day, so memory grows with
    /// `cycles * split.len()`.
    pub fn execute(&self, start_date: NaiveDate) -> Result<SplitMapping, MappingError> {
        self.check_training_days()?;
        self.check_date_range(start_date)?;

        let mut entries = BTreeMap::new();
        // Next free date; `None` once NaiveDate::MAX has been written.
        let mut cursor = Some(start_date);
        let mut dropped_rests = 0usize;

        for _ in 0..self.cycles {
            for protocol in self.split {
                let date = cursor.ok_or(MappingError::DateOverflow {
                    last: NaiveDate::MAX,
                })?;
                match protocol {
                    Protocol::Rest => {
                        if self.week.is_training_day(date) {
                            dropped_rests += 1;
                            continue;
                        }
                        entries.insert(date, Protocol::Rest);
                        cursor = date.succ_opt();
                    }
                    Protocol::Named(_) => {
                        let training_date = if self.week.is_training_day(date) {
                            date
                        } else {
                            self.week
                                .next_training_day(date)
                                .ok_or(MappingError::DateOverflow { last: date })?
                        };
                        let gap = date.iter_days().take_while(|day| *day < training_date);
                        for rest_date in gap {
                            entries.insert(rest_date, Protocol::Rest);
                        }
                        entries.insert(training_date, protocol.clone());
                        cursor = training_date.succ_opt();
                    }
                }
            }
        }

        debug!(
            "mapped {} split entries x {} cycles onto {} days from {}, {} rest entries dropped",
            self.split.len(),
            self.cycles,
            entries.len(),
            start_date,
            dropped_rests
        );

        Ok(SplitMapping {
            start_date,
            entries,
        })
    }

    // Every named protocol takes at least one day of its own.
    fn check_date_range(&self, start_date: NaiveDate) -> Result<(), MappingError> {
        let named = self.split.iter().filter(|p| !p.is_rest()).count() as u64;
        let required_days = named.saturating_mul(u64::from(self.cycles));
        let available_days =
            NaiveDate::MAX.signed_duration_since(start_date).num_days().unsigned_abs() + 1;
        if required_days > available_days {
            return Err(MappingError::ExceedsDateRange {
                start: start_date,
                required_days,
                available_days,
            });
        }
        Ok(())
    }

    // An empty week would leave the fill loop searching forever.
    fn check_training_days(&self) -> Result<(), MappingError> {
        if !self.week.is_empty() {
            return Ok(());
        }
        match self.split.iter().find(|protocol| !protocol.is_rest()) {
            Some(protocol) => Err(MappingError::InvalidConfiguration {
                protocol: protocol.label().to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Map an already parsed split.
pub fn map_split(
    start_date: NaiveDate,
    split: &[Protocol],
    cycles: u32,
    week: &TrainingWeek,
) -> Result<SplitMapping, MappingError> {
    SplitMapper::new(split, cycles, week).execute(start_date)
}

/// Parse raw split labels and map them.
pub fn map_labels<S: AsRef<str>>(
    start_date: NaiveDate,
    labels: &[S],
    cycles: u32,
    week: &TrainingWeek,
) -> Result<SplitMapping, MappingError> {
    let split = Protocol::parse_split(labels)?;
    map_split(start_date, &split, cycles, week)
}
