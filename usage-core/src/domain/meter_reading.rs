use time::Date;

/// Canonical energy unit carried by every stored reading.
pub const ENERGY_UNIT: &str = "kWh";

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A single cumulative meter reading taken on a calendar day.
///
/// `cumulative` is the lifetime meter count at `reading_date`; usage is
/// always derived from differences between readings, never from one reading
/// alone. Time-of-day is deliberately absent: incoming timestamps are
/// truncated to their UTC calendar date before they reach this type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct MeterReading {
    pub cumulative: i64,
    #[serde(with = "iso_date")]
    pub reading_date: Date,
    pub unit: String,
}

impl MeterReading {
    pub fn new(cumulative: i64, reading_date: Date, unit: impl Into<String>) -> Self {
        Self {
            cumulative,
            reading_date,
            unit: unit.into(),
        }
    }
}
