//! Date arithmetic shared by the metrics functions

use chrono::NaiveDate;

/// Fixed month length used wherever a duration is converted to months
pub const APPROX_DAYS_PER_MONTH: i64 = 30;

/// Whole calendar days from `from` to `to`; negative when `to` is earlier
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Ceiling division for a positive divisor, correct for negative numerators
pub fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    debug_assert!(divisor > 0);
    -(-numerator).div_euclid(divisor)
}
