//! Per-year calendar document handed to the page renderer.

use crate::calendar::{Weekday, first_of};
use crate::color::Color;
use crate::config::CalendarConfig;
use crate::consts::{MAX_DAY, MAX_MONTH, MIN_DAY};
use crate::phase::compute_phase;
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use serde::Serialize;
use std::fmt;

const MONTHS: usize = MAX_MONTH as usize;
const DAYS: usize = MAX_DAY as usize;

/// Phases that would print as `1.000` are shown as `0.000` instead.
const PRINT_WRAP_THRESHOLD: f64 = 0.9995;

/// One cell of the phase matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseSample {
    /// Phase fraction in `[0, 1)`
    Phase(f64),
    /// The day does not exist in this month of this year
    Missing,
}

impl PhaseSample {
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Phase(phase) => Some(phase),
            Self::Missing => None,
        }
    }

    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Renders with three decimals, or `-1` for a missing day.
impl fmt::Display for PhaseSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Phase(phase) if phase >= PRINT_WRAP_THRESHOLD => write!(f, "{:.3}", 0.0),
            Self::Phase(phase) => write!(f, "{phase:.3}"),
            Self::Missing => write!(f, "-1"),
        }
    }
}

impl Serialize for PhaseSample {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value().serialize(serializer)
    }
}

/// Everything the renderer needs to lay out one year.
///
/// `phases` is indexed `[day - 1][month - 1]`: rows run over days, and within
/// a row over months, which is the order the renderer consumes them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDocument {
    year: Year,
    first_weekday: [Weekday; MONTHS],
    phases: [[PhaseSample; MONTHS]; DAYS],
    invert_moons: bool,
    background: Color,
    foreground: Color,
    single_page: bool,
}

impl CalendarDocument {
    /// Calendar year the document covers
    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Weekday of the 1st of `month`
    pub const fn first_weekday(&self, month: Month) -> Weekday {
        self.first_weekday[month.index()]
    }

    pub const fn first_weekdays(&self) -> &[Weekday; MONTHS] {
        &self.first_weekday
    }

    /// Sample for `day` (1-31) of `month`, or `None` if `day` is not a matrix row.
    pub fn phase(&self, month: Month, day: u8) -> Option<PhaseSample> {
        let row = usize::from(day.checked_sub(MIN_DAY)?);
        self.phases.get(row).map(|row| row[month.index()])
    }

    /// Matrix rows, day 1 first
    pub fn rows(&self) -> impl Iterator<Item = &[PhaseSample; MONTHS]> {
        self.phases.iter()
    }

    /// All 372 samples, day-major and month-minor.
    pub fn samples(&self) -> impl Iterator<Item = PhaseSample> + '_ {
        self.phases.iter().flatten().copied()
    }

    /// Whether phases were shifted half a cycle for light moons on a dark page
    pub const fn invert_moons(&self) -> bool {
        self.invert_moons
    }

    /// Resolved page color
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Resolved color of text and moons
    pub const fn foreground(&self) -> Color {
        self.foreground
    }

    /// Whether the year is laid out on one page instead of two
    pub const fn single_page(&self) -> bool {
        self.single_page
    }
}

/// Shifts a phase by half a lunation, so the lit and dark parts swap.
fn mirror_phase(phase: f64) -> f64 {
    (phase + 0.5) % 1.0
}

/// Computes the calendar document for `config`.
#[tracing::instrument(skip_all, fields(year = %config.year()))]
pub fn build_document(config: &CalendarConfig) -> CalendarDocument {
    let year = config.year();
    let shading = config.shading();
    let offset = config.utc_offset();

    let mut first_weekday = [Weekday::Sunday; MONTHS];
    for month in Month::all() {
        first_weekday[month.index()] = first_of(month, year);
    }

    let invert_moons = shading.should_invert();

    let mut phases = [[PhaseSample::Missing; MONTHS]; DAYS];
    for (row, d) in phases.iter_mut().zip(MIN_DAY..=MAX_DAY) {
        for month in Month::all() {
            // Day::new rejects exactly the days past the end of the month
            row[month.index()] = Day::new(d, year, month).map_or(PhaseSample::Missing, |day| {
                let phase = compute_phase(month, day, year, offset);
                PhaseSample::Phase(if invert_moons { mirror_phase(phase) } else { phase })
            });
        }
    }

    debug!(
        invert_moons,
        utc_offset = offset.hours(),
        single_page = config.single_page(),
        "built calendar document"
    );

    CalendarDocument {
        year,
        first_weekday,
        phases,
        invert_moons,
        background: shading.background,
        foreground: shading.foreground,
        single_page: config.single_page(),
    }
}
