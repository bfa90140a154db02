use super::{check_ascending, dates::day_difference, EstimateError};
use crate::domain::{MeterReading, MonthlyUsage};

// Derived daily rates are scaled to a fixed 31-day month.
const SCALE_DAYS: f64 = 31.0;

/// Estimate monthly usage for each interior reading from its two
/// neighbours.
///
/// The figure at index `i` is the consumption rate between readings `i-1`
/// and `i+1`, scaled to 31 days and truncated toward zero, attributed to the
/// month of reading `i` itself. The first and last positions have no
/// neighbour pair and come back as `None`; sequences shorter than three
/// readings have no interior at all and yield a fully-`None` result of the
/// same length.
pub fn estimate_monthly(
    readings: &[MeterReading],
) -> Result<Vec<Option<MonthlyUsage>>, EstimateError> {
    check_ascending(readings)?;

    let n = readings.len();
    let mut usage: Vec<Option<MonthlyUsage>> = vec![None; n];
    if n < 3 {
        return Ok(usage);
    }

    for i in 1..n - 1 {
        let previous = &readings[i - 1];
        let next = &readings[i + 1];

        let span = day_difference(next.reading_date, previous.reading_date);
        if span == 0 {
            return Err(EstimateError::ZeroSpan {
                index: i,
                date: previous.reading_date,
            });
        }

        let rate = (next.cumulative - previous.cumulative) as f64 / span as f64;
        let date = readings[i].reading_date;
        usage[i] = Some(MonthlyUsage {
            month: u8::from(date.month()),
            year: date.year(),
            monthly_electricity: (rate * SCALE_DAYS).trunc() as i64,
        });
    }

    Ok(usage)
}
