//! Moon phase from a simplified lunar theory.
//!
//! The Sun's apparent longitude comes from an elliptical orbit solved with
//! Kepler's equation; the Moon's longitude is its mean motion corrected by
//! evection, the annual equation, the equation of the centre and variation.
//! The phase is the Moon's elongation from the Sun as a fraction of a full
//! turn: 0 is new moon, 0.25 first quarter, 0.5 full, 0.75 last quarter.
//!
//! All elements are referred to epoch 1980 January 0.0.

use crate::consts::{
    EARTH_ECCENTRICITY, EPOCH, GREGORIAN_REFORM, KEPLER_EPSILON, KEPLER_MAX_ITERATIONS,
    MOON_MEAN_LONGITUDE_EPOCH, MOON_MEAN_LONGITUDE_PERIGEE, MOON_MEAN_MOTION,
    MOON_NODE_LONGITUDE_EPOCH, MOON_NODE_MOTION, MOON_PERIGEE_MOTION,
    SUN_ECLIPTIC_LONGITUDE_EPOCH, SUN_ECLIPTIC_LONGITUDE_PERIGEE, SYNODIC_MONTH, TROPICAL_YEAR,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use serde::{Deserialize, Serialize};

/// Julian day number of noon UT on 1899 December 31
const JD_1900_ORIGIN: f64 = 2_415_020.0;
/// Days from Julian year 0 to the 1900 origin, in the 365.25-day count
const DAYS_TO_1900_ORIGIN: f64 = 694_025.0;

const DEGREES_PER_TURN: f64 = 360.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Continuous day count, anchored at noon UT. Always finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Display, Into)]
#[display(fmt = "JD {:.5}", _0)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Returns `None` for non-finite day counts.
    pub fn new(days: f64) -> Option<Self> {
        days.is_finite().then_some(Self(days))
    }

    /// The day count
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Julian date of noon UT on the given calendar date.
    ///
    /// Dates before 1582-10-15 are read in the Julian calendar, later ones in
    /// the Gregorian, so the day count runs on without a gap across the reform.
    pub fn from_calendar(year: Year, month: Month, day: Day) -> Self {
        let (mut y, mut m) = (f64::from(year.get()), f64::from(month.get()));
        if month.get() < 3 {
            m += 12.0;
            y -= 1.0;
        }

        let gregorian_correction = if (year.get(), month.get(), day.get()) < GREGORIAN_REFORM {
            0.0
        } else {
            let century = (y / 100.0).floor();
            2.0 - century + (century / 4.0).floor()
        };

        let year_days = (365.25 * y).floor() - DAYS_TO_1900_ORIGIN;
        let month_days = (30.6001 * (m + 1.0)).floor();

        Self(gregorian_correction + year_days + month_days + f64::from(day.get()) + JD_1900_ORIGIN)
    }

    /// Shifts the date by a finite number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Days elapsed since 1980 January 0.0
    pub fn days_since_epoch(self) -> f64 {
        self.0 - EPOCH
    }
}

/// Local time zone as hours west of UTC.
///
/// Phases are computed for noon at the given offset rather than noon UT.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize, Display)]
#[display(fmt = "{}h west of UTC", _0)]
#[serde(transparent)]
pub struct UtcOffset(f64);

impl UtcOffset {
    pub const UTC: Self = Self(0.0);

    /// Returns `None` for non-finite hour values.
    pub fn from_hours(hours: f64) -> Option<Self> {
        hours.is_finite().then_some(Self(hours))
    }

    #[inline]
    pub const fn hours(self) -> f64 {
        self.0
    }

    /// The offset as a fraction of a day, folded into `[-0.5, 0.5)`.
    pub fn day_fraction(self) -> f64 {
        let fraction = (self.0 % HOURS_PER_DAY) / HOURS_PER_DAY;
        if fraction >= 0.5 {
            fraction - 1.0
        } else if fraction < -0.5 {
            fraction + 1.0
        } else {
            fraction
        }
    }
}

/// Reduces an angle in degrees to `[0, 360)`.
#[inline]
pub fn fix_angle(degrees: f64) -> f64 {
    degrees - DEGREES_PER_TURN * (degrees / DEGREES_PER_TURN).floor()
}

/// Solves Kepler's equation `E - e sin E = M` for the eccentric anomaly.
///
/// `mean_anomaly` is in degrees, the result in radians. Gives up after
/// `KEPLER_MAX_ITERATIONS` Newton steps and returns the last estimate.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly.to_radians();
    let mut e = m;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = e - eccentricity * e.sin() - m;
        e -= delta / (1.0 - eccentricity * e.cos());
        if delta.abs() <= KEPLER_EPSILON {
            return e;
        }
    }
    warn!(
        mean_anomaly,
        eccentricity,
        iterations = KEPLER_MAX_ITERATIONS,
        "kepler solver hit iteration cap"
    );
    e
}

/// Apparent position of the Sun, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    /// Mean anomaly measured from perigee
    pub mean_anomaly: f64,
    /// True anomaly from the solved Kepler equation
    pub true_anomaly: f64,
    /// Geocentric ecliptic longitude
    pub longitude: f64,
}

impl SolarPosition {
    pub fn at(jd: JulianDate) -> Self {
        let day = jd.days_since_epoch();
        let mean = fix_angle((DEGREES_PER_TURN / TROPICAL_YEAR) * day);
        let mean_anomaly =
            fix_angle(mean + SUN_ECLIPTIC_LONGITUDE_EPOCH - SUN_ECLIPTIC_LONGITUDE_PERIGEE);

        let eccentric = solve_kepler(mean_anomaly, EARTH_ECCENTRICITY);
        let scale = ((1.0 + EARTH_ECCENTRICITY) / (1.0 - EARTH_ECCENTRICITY)).sqrt();
        let true_anomaly = 2.0 * (scale * (eccentric / 2.0).tan()).atan().to_degrees();

        Self {
            mean_anomaly,
            true_anomaly,
            longitude: fix_angle(true_anomaly + SUN_ECLIPTIC_LONGITUDE_PERIGEE),
        }
    }
}

/// Position of the Moon, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarPosition {
    pub mean_longitude: f64,
    pub mean_anomaly: f64,
    /// Mean longitude of the ascending node
    pub node_longitude: f64,
    /// Longitude after all periodic corrections
    pub true_longitude: f64,
}

impl LunarPosition {
    pub fn at(jd: JulianDate, sun: &SolarPosition) -> Self {
        let day = jd.days_since_epoch();
        let ml = fix_angle(MOON_MEAN_MOTION * day + MOON_MEAN_LONGITUDE_EPOCH);
        let mm = fix_angle(ml - MOON_PERIGEE_MOTION * day - MOON_MEAN_LONGITUDE_PERIGEE);
        let node = fix_angle(MOON_NODE_LONGITUDE_EPOCH - MOON_NODE_MOTION * day);

        let evection = 1.2739 * (2.0 * (ml - sun.longitude) - mm).to_radians().sin();
        let annual = 0.1858 * sun.mean_anomaly.to_radians().sin();
        let a3 = 0.37 * sun.mean_anomaly.to_radians().sin();

        let corrected_anomaly = mm + evection - annual - a3;
        let centre = 6.2886 * corrected_anomaly.to_radians().sin();
        let a4 = 0.214 * (2.0 * corrected_anomaly).to_radians().sin();

        let corrected_longitude = ml + evection + centre - annual + a4;
        let variation = 0.6583 * (2.0 * (corrected_longitude - sun.longitude)).to_radians().sin();

        Self {
            mean_longitude: ml,
            mean_anomaly: mm,
            node_longitude: node,
            true_longitude: corrected_longitude + variation,
        }
    }
}

/// Phase of the Moon at `jd` as a fraction of a lunation in `[0, 1)`.
pub fn phase_at(jd: JulianDate) -> f64 {
    let sun = SolarPosition::at(jd);
    let moon = LunarPosition::at(jd, &sun);
    let phase = fix_angle(moon.true_longitude - sun.longitude) / DEGREES_PER_TURN;
    // fix_angle can round up to exactly 360 for tiny negative inputs
    if phase >= 1.0 { 0.0 } else { phase }
}

/// Phase of the Moon at local noon of the given date.
pub fn compute_phase(month: Month, day: Day, year: Year, offset: UtcOffset) -> f64 {
    let jd = JulianDate::from_calendar(year, month, day).add_days(offset.day_fraction());
    let phase = phase_at(jd);
    trace!(%year, %month, %day, phase, "computed phase");
    phase
}

/// Age of the Moon in days since the last new moon.
pub fn moon_age_days(phase: f64) -> f64 {
    phase * SYNODIC_MONTH
}
