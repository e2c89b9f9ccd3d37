use crate::color::Shading;
use crate::consts::{MAX_YEAR, MIN_CALENDAR_YEAR};
use crate::phase::UtcOffset;
use crate::types::Year;
use serde::Deserialize;

/// Error type for building a [`CalendarConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Year is valid as a date but outside the calendar's range.
    #[error("Year {0} out of range (must be {min}-{max})", min = MIN_CALENDAR_YEAR, max = MAX_YEAR)]
    YearOutOfRange(u16),

    /// UTC offset is NaN or infinite.
    #[error("Invalid UTC offset: {0}")]
    InvalidUtcOffset(f64),
}

/// Validated input for [`crate::build_document`].
///
/// Deserializes from
/// `{ "year": 2000, "utc_offset": 5.0, "shading": "1/0", "single_page": false }`
/// where every field but `year` is optional.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawCalendarConfig")]
pub struct CalendarConfig {
    year: Year,
    utc_offset: UtcOffset,
    shading: Shading,
    single_page: bool,
}

impl CalendarConfig {
    /// Creates a config for `year` with UTC time, black-on-white shading and
    /// the two-page layout.
    ///
    /// # Errors
    /// Returns `ConfigError::YearOutOfRange` unless `MIN_CALENDAR_YEAR <= year <= MAX_YEAR`.
    pub fn new(year: u16) -> Result<Self, ConfigError> {
        if year < MIN_CALENDAR_YEAR {
            return Err(ConfigError::YearOutOfRange(year));
        }
        let year = Year::new(year).map_err(|_| ConfigError::YearOutOfRange(year))?;
        Ok(Self {
            year,
            utc_offset: UtcOffset::UTC,
            shading: Shading::DEFAULT,
            single_page: false,
        })
    }

    /// Sets the time zone, in hours west of UTC.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidUtcOffset` if `hours` is not finite.
    pub fn with_utc_offset(self, hours: f64) -> Result<Self, ConfigError> {
        let utc_offset = UtcOffset::from_hours(hours).ok_or(ConfigError::InvalidUtcOffset(hours))?;
        Ok(Self { utc_offset, ..self })
    }

    #[must_use]
    pub const fn with_shading(self, shading: Shading) -> Self {
        Self { shading, ..self }
    }

    #[must_use]
    pub const fn with_single_page(self, single_page: bool) -> Self {
        Self { single_page, ..self }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn utc_offset(&self) -> UtcOffset {
        self.utc_offset
    }

    pub const fn shading(&self) -> Shading {
        self.shading
    }

    pub const fn single_page(&self) -> bool {
        self.single_page
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCalendarConfig {
    year: u16,
    #[serde(default)]
    utc_offset: f64,
    #[serde(default)]
    shading: String,
    #[serde(default)]
    single_page: bool,
}

impl TryFrom<RawCalendarConfig> for CalendarConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCalendarConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.year)?
            .with_utc_offset(raw.utc_offset)?
            .with_shading(Shading::parse(&raw.shading, Shading::DEFAULT))
            .with_single_page(raw.single_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_new_defaults() {
        let config = CalendarConfig::new(2000).unwrap();
        assert_eq!(config.year().get(), 2000);
        assert_eq!(config.utc_offset(), UtcOffset::UTC);
        assert_eq!(config.shading(), Shading::DEFAULT);
        assert!(!config.single_page());
    }

    #[test]
    fn test_year_range() {
        assert!(CalendarConfig::new(1753).is_ok());
        assert!(CalendarConfig::new(9999).is_ok());
        assert_eq!(
            CalendarConfig::new(1752),
            Err(ConfigError::YearOutOfRange(1752))
        );
        assert_eq!(
            CalendarConfig::new(10000),
            Err(ConfigError::YearOutOfRange(10000))
        );
        assert_eq!(CalendarConfig::new(0), Err(ConfigError::YearOutOfRange(0)));
    }

    #[test]
    fn test_error_messages() {
        let err = CalendarConfig::new(1700).unwrap_err();
        assert_eq!(err.to_string(), "Year 1700 out of range (must be 1753-9999)");

        let err = CalendarConfig::new(2000).unwrap().with_utc_offset(f64::INFINITY).unwrap_err();
        assert_eq!(err.to_string(), "Invalid UTC offset: inf");
    }

    #[test]
    fn test_with_setters() {
        let config = CalendarConfig::new(2024)
            .unwrap()
            .with_utc_offset(5.0)
            .unwrap()
            .with_shading(Shading::INVERTED)
            .with_single_page(true);
        assert!((config.utc_offset().hours() - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.shading(), Shading::INVERTED);
        assert!(config.single_page());
    }

    #[test]
    fn test_non_finite_offset_rejected() {
        let result = CalendarConfig::new(2024).unwrap().with_utc_offset(f64::NAN);
        assert!(matches!(result, Err(ConfigError::InvalidUtcOffset(_))));
    }

    #[test]
    fn test_deserialize_minimal() {
        let config: CalendarConfig = serde_json::from_str(r#"{"year": 1999}"#).unwrap();
        assert_eq!(config, CalendarConfig::new(1999).unwrap());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{"year": 2000, "utc_offset": -3.5, "shading": "0.1:0.1:0.3/1.5", "single_page": true}"#;
        let config: CalendarConfig = serde_json::from_str(json).unwrap();
        assert!((config.utc_offset().hours() + 3.5).abs() < f64::EPSILON);
        assert_eq!(config.shading().background, Color::Rgb([0.1, 0.1, 0.3]));
        // 1.5 is out of range, so the default foreground stays
        assert_eq!(config.shading().foreground, Color::BLACK);
        assert!(config.single_page());
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        let result: Result<CalendarConfig, _> = serde_json::from_str(r#"{"year": 1600}"#);
        assert!(result.is_err());

        let result: Result<CalendarConfig, _> = serde_json::from_str(r#"{"utc_offset": 1.0}"#);
        assert!(result.is_err());

        let result: Result<CalendarConfig, _> =
            serde_json::from_str(r#"{"year": 2000, "font": "Times-Bold"}"#);
        assert!(result.is_err());
    }
}
