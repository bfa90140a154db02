pub mod meter_reading;
pub mod monthly_usage;

pub use meter_reading::{MeterReading, ENERGY_UNIT};
pub use monthly_usage::MonthlyUsage;
