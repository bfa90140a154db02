pub mod domain;
pub mod estimate;

pub use domain::{MeterReading, MonthlyUsage, ENERGY_UNIT};
pub use estimate::{calculate_monthly, estimate_monthly, EstimateError};
