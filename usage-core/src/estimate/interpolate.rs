use super::{
    check_ascending,
    dates::{day_difference, end_of_month},
    direct::estimate_monthly,
    EstimateError,
};
use crate::domain::{MeterReading, MonthlyUsage, ENERGY_UNIT};

/// y-value at `x2` on the line through `(x1, y1)` and `(x3, y3)`.
///
/// The x-axis is measured in whole days; the caller guarantees `x3 != x1`.
fn linear_interpolation(x1: i64, y1: i64, x2: i64, x3: i64, y3: i64) -> f64 {
    y1 as f64 + (x2 - x1) as f64 * (y3 - y1) as f64 / (x3 - x1) as f64
}

/// Project every interior reading onto the last day of its month.
///
/// Each interior reading is interpolated between itself and its successor to
/// the cumulative value the meter would have shown at month end, producing a
/// series whose dates are month boundaries. The first and last slots carry a
/// verbatim copy of their nearest interior neighbour: no data exists beyond
/// the edges to interpolate against, so the edges are padded rather than
/// estimated. Inputs shorter than three readings have no interior to pad
/// from and come back empty.
///
/// Every produced entry is stamped with the canonical unit, whatever the
/// input carried.
pub fn align_to_month_end(
    readings: &[MeterReading],
) -> Result<Vec<MeterReading>, EstimateError> {
    check_ascending(readings)?;

    let n = readings.len();
    if n < 3 {
        return Ok(Vec::new());
    }

    let mut interior: Vec<MeterReading> = Vec::with_capacity(n - 2);
    for i in 1..n - 1 {
        let current = &readings[i];
        let next = &readings[i + 1];

        let span = day_difference(next.reading_date, current.reading_date);
        if span == 0 {
            return Err(EstimateError::ZeroSpan {
                index: i,
                date: current.reading_date,
            });
        }

        let month_end = end_of_month(current.reading_date);
        let offset = day_difference(month_end, current.reading_date);
        let at_month_end =
            linear_interpolation(0, current.cumulative, offset, span, next.cumulative);

        interior.push(MeterReading {
            cumulative: at_month_end.trunc() as i64,
            reading_date: month_end,
            unit: ENERGY_UNIT.to_string(),
        });
    }

    let mut aligned: Vec<MeterReading> = Vec::with_capacity(n);
    aligned.push(interior[0].clone());
    aligned.extend(interior.iter().cloned());
    aligned.push(interior[interior.len() - 1].clone());
    Ok(aligned)
}

/// Monthly usage from month-end-aligned readings.
///
/// Composes [`align_to_month_end`] with [`estimate_monthly`]: the aligned
/// series is handed to the direct estimator unchanged, so the result keeps
/// its `None` endpoints. Two raw readings falling inside the same calendar
/// month collapse onto one month-end date and surface as
/// [`EstimateError::ZeroSpan`] from the estimator pass.
pub fn calculate_monthly(
    readings: &[MeterReading],
) -> Result<Vec<Option<MonthlyUsage>>, EstimateError> {
    if readings.len() < 3 {
        check_ascending(readings)?;
        return Ok(vec![None; readings.len()]);
    }

    let aligned = align_to_month_end(readings)?;
    estimate_monthly(&aligned)
}
