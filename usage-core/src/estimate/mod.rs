//! Monthly usage estimation over an ordered series of cumulative readings.
//!
//! Two estimators share the same input shape. [`estimate_monthly`] derives a
//! figure for each interior reading from its two neighbours. The boundary
//! interpolator first projects every interior reading onto its month-end
//! date ([`align_to_month_end`]) and then runs the direct estimator over
//! that aligned series ([`calculate_monthly`]).
//!
//! Both estimators require the input to be sorted ascending by
//! `reading_date` and fail fast when it is not.

mod dates;
mod direct;
mod interpolate;

pub use dates::{day_difference, days_until_month_end, end_of_month};
pub use direct::estimate_monthly;
pub use interpolate::{align_to_month_end, calculate_monthly};

use time::Date;

use crate::domain::MeterReading;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("readings out of order at index {index}: {current} is earlier than {previous}")]
    OutOfOrder {
        index: usize,
        previous: Date,
        current: Date,
    },
    #[error("readings around index {index} span zero days (at {date}); no daily rate exists")]
    ZeroSpan { index: usize, date: Date },
}

/// Reject descending adjacent dates. Equal adjacent dates are allowed here;
/// the month-end-aligned series produced by the interpolator legitimately
/// repeats dates at its padded edges.
fn check_ascending(readings: &[MeterReading]) -> Result<(), EstimateError> {
    for (index, pair) in readings.windows(2).enumerate() {
        if pair[1].reading_date < pair[0].reading_date {
            return Err(EstimateError::OutOfOrder {
                index: index + 1,
                previous: pair[0].reading_date,
                current: pair[1].reading_date,
            });
        }
    }
    Ok(())
}
