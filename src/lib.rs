pub mod calculations;
pub mod calendar;
pub mod config;
pub mod program;
pub mod protocol;
pub mod schedule;

pub use calculations::split_mapping::{
    CalendarEntry, MappingError, SplitMapper, SplitMapping, map_labels, map_split,
};
pub use calendar::{TrainingWeek, TrainingWeekError};
pub use config::{ConfigError, ScheduleConfig};
pub use program::{ProgramError, TrainingProgram};
pub use protocol::Protocol;
pub use schedule::{ScheduleError, TrainingSchedule};
