use crate::schedule::TrainingSchedule;
use log::debug;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_PROGRAM_NAME: &str = "Unnamed Training Program";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("schedule position {index} is out of range for a program of {len} schedules")]
    OutOfRange { index: usize, len: usize },
}

/// An ordered collection of training schedules, e.g. consecutive training blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingProgram {
    name: String,
    schedules: Vec<TrainingSchedule>,
}

impl Default for TrainingProgram {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_NAME)
    }
}

impl TrainingProgram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schedules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedules(&self) -> &[TrainingSchedule] {
        &self.schedules
    }

    pub fn schedule(&self, index: usize) -> Option<&TrainingSchedule> {
        self.schedules.get(index)
    }

    pub fn schedule_mut(&mut self, index: usize) -> Option<&mut TrainingSchedule> {
        self.schedules.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn add_schedule(&mut self, schedule: TrainingSchedule) {
        debug!("adding schedule '{}' to program '{}'", schedule.name(), self.name);
        self.schedules.push(schedule);
    }

    pub fn remove_schedule(&mut self, index: usize) -> Result<TrainingSchedule, ProgramError> {
        let len = self.schedules.len();
        if index >= len {
            return Err(ProgramError::OutOfRange { index, len });
        }
        Ok(self.schedules.remove(index))
    }

    pub fn clear_schedules(&mut self) {
        self.schedules.clear();
    }
}

impl fmt::Display for TrainingProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training Program: {}\n\nTraining Schedules:\n\n",
            self.name
        )?;
        for (i, schedule) in self.schedules.iter().enumerate() {
            writeln!(f, "Schedule {}: {}", i + 1, schedule.name())?;
        }
        Ok(())
    }
}
