mod calendar;
mod color;
mod config;
mod consts;
mod document;
mod phase;
mod prelude;
mod types;

pub use calendar::{
    Weekday, day_of_year, day_offset_of_month, first_of, is_leap_year, length_of_month,
    weekday_of, year_length,
};
pub use color::{Color, Shading, is_darker, parse_color_spec, should_invert};
pub use config::{CalendarConfig, ConfigError};
pub use consts::*;
pub use document::{CalendarDocument, PhaseSample, build_document};
pub use phase::{
    JulianDate, LunarPosition, SolarPosition, UtcOffset, compute_phase, fix_angle, moon_age_days,
    phase_at, solve_kepler,
};
pub use types::{Day, Month, Year};

use crate::prelude::*;

/// Error for out-of-range date components.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid day: {} (must be 1-{})", "_0", MAX_DAY)]
    DayOutOfRange(u8),
    #[display(fmt = "Invalid weekday: {} (must be 0-{})", "_0", MAX_WEEKDAY)]
    InvalidWeekday(u8),
}

impl std::error::Error for DateError {}
