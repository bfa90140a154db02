use time::{util, Date};

/// Whole days from `b` to `a`; negative when `a` precedes `b`.
///
/// Operates on calendar dates only, so daylight-saving shifts and
/// time-of-day cannot leak into the count.
pub fn day_difference(a: Date, b: Date) -> i64 {
    i64::from(a.to_julian_day()) - i64::from(b.to_julian_day())
}

/// Last calendar day of `date`'s month, leap years included.
pub fn end_of_month(date: Date) -> Date {
    let last_day = util::days_in_year_month(date.year(), date.month());
    Date::from_calendar_date(date.year(), date.month(), last_day)
        .expect("last day of a month is a valid calendar date")
}

/// Days remaining until the end of `date`'s month; zero on the last day.
pub fn days_until_month_end(date: Date) -> i64 {
    day_difference(end_of_month(date), date)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn day_difference_is_signed() {
        assert_eq!(day_difference(date!(2023 - 02 - 01), date!(2023 - 01 - 01)), 31);
        assert_eq!(day_difference(date!(2023 - 01 - 01), date!(2023 - 02 - 01)), -31);
        assert_eq!(day_difference(date!(2023 - 01 - 15), date!(2023 - 01 - 15)), 0);
    }

    #[test]
    fn day_difference_crosses_year_boundaries() {
        assert_eq!(day_difference(date!(2024 - 01 - 01), date!(2023 - 12 - 31)), 1);
    }

    #[test]
    fn end_of_month_handles_leap_february() {
        assert_eq!(end_of_month(date!(2024 - 02 - 10)), date!(2024 - 02 - 29));
        assert_eq!(end_of_month(date!(2023 - 02 - 10)), date!(2023 - 02 - 28));
    }

    #[test]
    fn days_until_month_end_for_mid_january() {
        // January has 31 days, so the 10th sits 21 days from month end.
        assert_eq!(days_until_month_end(date!(2023 - 01 - 10)), 21);
        assert_eq!(days_until_month_end(date!(2023 - 01 - 31)), 0);
    }
}
