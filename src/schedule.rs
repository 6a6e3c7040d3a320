use crate::calculations::split_mapping::{MappingError, SplitMapper, SplitMapping};
use crate::calendar::{TrainingWeek, TrainingWeekError};
use crate::config::ScheduleConfig;
use crate::protocol::Protocol;
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("split position {index} is out of range for a split of {len} entries")]
    OutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error(transparent)]
    TrainingWeek(#[from] TrainingWeekError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduleInputs {
    start_date: NaiveDate,
    split: Vec<Protocol>,
    cycles: u32,
    week: TrainingWeek,
}

impl ScheduleInputs {
    fn map(&self) -> Result<SplitMapping, MappingError> {
        SplitMapper::new(&self.split, self.cycles, &self.week).execute(self.start_date)
    }
}

/// A training split repeated over a number of cycles and laid out on the
/// calendar. The calendar is rebuilt from scratch whenever an input changes,
/// so it always reflects the current start date, split, cycles and week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSchedule {
    name: String,
    inputs: ScheduleInputs,
    mapping: SplitMapping,
}

impl TrainingSchedule {
    /// Default split, 12 cycles, Mon/Tue/Fri/Sat, starting today.
    pub fn new() -> Result<Self, ScheduleError> {
        Self::from_config(&ScheduleConfig::default())
    }

    pub fn from_config(config: &ScheduleConfig) -> Result<Self, ScheduleError> {
        let start_date = config
            .start_date
            .unwrap_or_else(|| Local::now().date_naive());
        let split = Protocol::parse_split(&config.split)?;
        let week = TrainingWeek::from_names(&config.training_days)?;
        Self::with_parts(config.name.clone(), start_date, split, config.cycles, week)
    }

    pub fn with_parts(
        name: impl Into<String>,
        start_date: NaiveDate,
        split: Vec<Protocol>,
        cycles: u32,
        week: TrainingWeek,
    ) -> Result<Self, ScheduleError> {
        let inputs = ScheduleInputs {
            start_date,
            split,
            cycles,
            week,
        };
        let mapping = inputs.map()?;
        Ok(Self {
            name: name.into(),
            inputs,
            mapping,
        })
    }

    // Mutate a copy of the inputs and only commit once the rebuild succeeds.
    fn update_with<F, T>(&mut self, mutator: F) -> Result<T, ScheduleError>
    where
        F: FnOnce(&mut ScheduleInputs) -> Result<T, ScheduleError>,
    {
        let mut inputs = self.inputs.clone();
        let outcome = mutator(&mut inputs).and_then(|value| {
            let mapping = inputs.map()?;
            Ok((value, mapping))
        });

        match outcome {
            Ok((value, mapping)) => {
                self.inputs = inputs;
                self.mapping = mapping;
                debug!(
                    "rebuilt schedule '{}': {} days through {:?}",
                    self.name,
                    self.mapping.len(),
                    self.mapping.end_date()
                );
                Ok(value)
            }
            Err(err) => {
                warn!("rejected change to schedule '{}': {err}", self.name);
                Err(err)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn start_date(&self) -> NaiveDate {
        self.inputs.start_date
    }

    /// Last scheduled date, `None` when nothing is scheduled.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.mapping.end_date()
    }

    pub fn split(&self) -> &[Protocol] {
        &self.inputs.split
    }

    pub fn cycles(&self) -> u32 {
        self.inputs.cycles
    }

    pub fn training_week(&self) -> &TrainingWeek {
        &self.inputs.week
    }

    pub fn calendar(&self) -> &SplitMapping {
        &self.mapping
    }

    pub fn update_start(&mut self, start_date: NaiveDate) -> Result<(), ScheduleError> {
        self.update_with(|inputs| {
            inputs.start_date = start_date;
            Ok(())
        })
    }

    /// Insert a split entry by label. `index` may equal the split length to append.
    pub fn insert_split(&mut self, index: usize, label: &str) -> Result<(), ScheduleError> {
        let protocol = Protocol::parse(label).map_err(|err| err.at_position(index))?;
        self.insert_protocol(index, protocol)
    }

    pub fn insert_protocol(
        &mut self,
        index: usize,
        protocol: Protocol,
    ) -> Result<(), ScheduleError> {
        self.update_with(|inputs| {
            let len = inputs.split.len();
            if index > len {
                return Err(ScheduleError::OutOfRange { index, len });
            }
            inputs.split.insert(index, protocol);
            Ok(())
        })
    }

    pub fn remove_split(&mut self, index: usize) -> Result<Protocol, ScheduleError> {
        self.update_with(|inputs| {
            let len = inputs.split.len();
            if index >= len {
                return Err(ScheduleError::OutOfRange { index, len });
            }
            Ok(inputs.split.remove(index))
        })
    }

    pub fn clear_split(&mut self) -> Result<(), ScheduleError> {
        self.update_with(|inputs| {
            inputs.split.clear();
            Ok(())
        })
    }

    pub fn update_cycles(&mut self, cycles: u32) -> Result<(), ScheduleError> {
        self.update_with(|inputs| {
            inputs.cycles = cycles;
            Ok(())
        })
    }

    pub fn update_training_days(&mut self, week: TrainingWeek) -> Result<(), ScheduleError> {
        self.update_with(|inputs| {
            inputs.week = week;
            Ok(())
        })
    }

    /// Replace the training days from weekday names such as "Monday".
    pub fn update_training_day_names<I, S>(&mut self, names: I) -> Result<(), ScheduleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let week = TrainingWeek::from_names(names)?;
        self.update_training_days(week)
    }
}

impl fmt::Display for TrainingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Start date: {}\n\nWeekly training days: {}\n\n{} cycle training schedule:\n\n",
            self.inputs.start_date,
            self.inputs.week.names().join(", "),
            self.inputs.cycles
        )?;
        for (date, protocol) in self.mapping.iter() {
            write!(f, "{date}\n{protocol}\n\n")?;
        }
        Ok(())
    }
}
