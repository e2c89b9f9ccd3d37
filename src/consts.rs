/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Earliest year a calendar document can be built for (Gregorian calendar in
/// use throughout the English-speaking world)
pub const MIN_CALENDAR_YEAR: u16 = 1753;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Rows in the phase matrix: the longest possible month
pub const MAX_DAY: u8 = 31;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;
/// Highest weekday number (Saturday; Sunday is 0)
pub const MAX_WEEKDAY: u8 = DAYS_PER_WEEK - 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before the first of each month in a common year
/// (index 0 is unused, months are 1-indexed)
pub const MONTH_OFFSETS: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// First date of the Gregorian calendar as (year, month, day)
pub const GREGORIAN_REFORM: (u16, u8, u8) = (1582, 10, 15);

/// Separator between RGB components of a color spec (`r:g:b`)
pub const RGB_SEPARATOR: char = ':';
/// Separator between background and foreground in a shading spec (`bg/fg`)
pub const SHADING_SEPARATOR: char = '/';

// Astronomical constants, epoch 1980 January 0.0

/// Julian date of 1980 January 0.0 UT
pub const EPOCH: f64 = 2_444_238.5;

/// Ecliptic longitude of the Sun at epoch 1980.0
pub const SUN_ECLIPTIC_LONGITUDE_EPOCH: f64 = 278.833_540;
/// Ecliptic longitude of the Sun at perigee
pub const SUN_ECLIPTIC_LONGITUDE_PERIGEE: f64 = 282.596_403;
/// Eccentricity of Earth's orbit
pub const EARTH_ECCENTRICITY: f64 = 0.016_718;
/// Length of the tropical year in days
pub const TROPICAL_YEAR: f64 = 365.2422;

/// Moon's mean longitude at the epoch
pub const MOON_MEAN_LONGITUDE_EPOCH: f64 = 64.975_464;
/// Mean longitude of the lunar perigee at the epoch
pub const MOON_MEAN_LONGITUDE_PERIGEE: f64 = 349.383_063;
/// Mean longitude of the lunar ascending node at the epoch
pub const MOON_NODE_LONGITUDE_EPOCH: f64 = 151.950_429;

/// Daily motion of the Moon's mean longitude (degrees/day)
pub const MOON_MEAN_MOTION: f64 = 13.176_396_6;
/// Daily motion of the lunar perigee (degrees/day)
pub const MOON_PERIGEE_MOTION: f64 = 0.111_404_1;
/// Daily regression of the lunar node (degrees/day)
pub const MOON_NODE_MOTION: f64 = 0.052_953_9;

/// Synodic month (new Moon to new Moon) in days
pub const SYNODIC_MONTH: f64 = 29.530_588_68;

/// Convergence threshold of the Kepler solver (radians)
pub const KEPLER_EPSILON: f64 = 1e-6;
/// Hard cap on Newton-Raphson steps in the Kepler solver
pub const KEPLER_MAX_ITERATIONS: u32 = 32;
