use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::calendar::TrainingWeek;
use crate::protocol::Protocol;

pub const DEFAULT_SCHEDULE_NAME: &str = "Unnamed Schedule";
pub const DEFAULT_CYCLES: u32 = 12;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid schedule config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Construction parameters for a [`crate::TrainingSchedule`]. Every field is
/// optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    pub name: String,
    /// `None` means today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub split: Vec<String>,
    pub cycles: u32,
    pub training_days: Vec<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SCHEDULE_NAME.to_string(),
            start_date: None,
            split: Protocol::default_split()
                .into_iter()
                .map(String::from)
                .collect(),
            cycles: DEFAULT_CYCLES,
            training_days: TrainingWeek::default()
                .names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl ScheduleConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_split<I, S>(mut self, split: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.split = split.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn with_training_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.training_days = days.into_iter().map(Into::into).collect();
        self
    }
}
