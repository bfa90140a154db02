use time::macros::date;
use time::Date;

use usage_core::{MeterReading, ENERGY_UNIT};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("cumulative value must be non-negative, got {0}")]
    NegativeCumulative(i64),
    #[error("meter reading unit must be '{ENERGY_UNIT}', got '{0}'")]
    WrongUnit(String),
    #[error("reading date {0} is outside the accepted range")]
    DateOutOfRange(Date),
}

/// Pure validation of an incoming `MeterReading`.
///
/// Rules:
/// - cumulative must be non-negative;
/// - unit must be the canonical energy unit;
/// - reading_date must fall within a broad sanity window
///   [2000-01-01, 2100-01-01).
pub fn validate_reading(reading: &MeterReading) -> Result<(), ValidationError> {
    if reading.cumulative < 0 {
        return Err(ValidationError::NegativeCumulative(reading.cumulative));
    }

    if reading.unit != ENERGY_UNIT {
        return Err(ValidationError::WrongUnit(reading.unit.clone()));
    }

    let min_date = date!(2000 - 01 - 01);
    let max_date = date!(2100 - 01 - 01);
    if reading.reading_date < min_date || reading.reading_date >= max_date {
        return Err(ValidationError::DateOutOfRange(reading.reading_date));
    }

    Ok(())
}
