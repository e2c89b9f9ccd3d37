//! Gregorian date arithmetic: leap years, month lengths, weekdays.
//!
//! All functions here follow the proleptic Gregorian rules. That matches
//! history only from 1753 on, which is why calendar documents start there.

use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MONTH_OFFSETS,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use serde::{Deserialize, Serialize};

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Sunday through Saturday, indexed by weekday number
    pub const ALL: [Self; DAYS_PER_WEEK as usize] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday number (0-6, Sunday = 0)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a weekday by number (0-6, Sunday = 0)
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < DAYS_PER_WEEK {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(DateError::InvalidWeekday(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

/// Gregorian leap-year rule: every 4th year, except centuries not divisible by 400
pub const fn is_leap_year(year: u16) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Number of days in the year (365 or 366)
pub const fn year_length(year: Year) -> u16 {
    if year.is_leap() { 366 } else { 365 }
}

/// Number of days in `month` of `year`
pub const fn length_of_month(month: Month, year: Year) -> u8 {
    if month.get() == FEBRUARY && year.is_leap() {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Days in `year` before the first of `month`
pub const fn day_offset_of_month(month: Month, year: Year) -> u16 {
    let offset = MONTH_OFFSETS[month.get() as usize];
    if month.get() > FEBRUARY && year.is_leap() {
        offset + 1
    } else {
        offset
    }
}

/// Ordinal day within the year, starting at 1 for January 1st
pub const fn day_of_year(month: Month, day: Day, year: Year) -> u16 {
    day_offset_of_month(month, year) + day.get() as u16
}

/// Weekday of `year-month-day`.
///
/// Counts the weekday drift of whole years through the end of `year - 1`
/// (one day per year plus one per leap day), then adds the days elapsed
/// within `year`.
pub fn weekday_of(month: Month, day: Day, year: Year) -> Weekday {
    let week = u32::from(DAYS_PER_WEEK);
    let y = u32::from(year.get());
    let prior = y - 1;
    let leap_days = prior / u32::from(LEAP_YEAR_CYCLE) - prior / u32::from(CENTURY_CYCLE)
        + prior / u32::from(GREGORIAN_CYCLE);
    let month_drift = u32::from(day_offset_of_month(month, year)) % week;
    let index = (y + leap_days + month_drift + u32::from(day.get() - 1)) % week;
    Weekday::ALL[index as usize]
}

/// Weekday of the first day of `month`
pub fn first_of(month: Month, year: Year) -> Weekday {
    weekday_of(month, Day::FIRST, year)
}
