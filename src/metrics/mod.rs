//! Financial metrics engine
//!
//! Pure functions over a ledger snapshot and the savings goal. Nothing here
//! performs I/O or keeps state between calls; callers recompute everything
//! from the latest snapshot whenever the ledger or goal changes.
//!
//! - `projection`: budget guidance derived from the goal
//! - `aggregate`: day/month buckets, trend windows, signed totals
//! - `calendar`: per-day annotations for a month grid

pub mod aggregate;
pub mod calendar;
pub mod dates;
pub mod projection;

pub use aggregate::{
    aggregate_by_day, aggregate_by_month, daily_trend, has_records_on, income_expense_totals,
    monthly_trend, net_for_date, total_balance, trend_window, DayBucket, MonthBucket,
    PeriodBucket, PeriodTotals, DAILY_TREND_DAYS, MONTHLY_TREND_MONTHS,
};
pub use calendar::{month_calendar, CalendarCell, MonthCalendar};
pub use projection::{compute_projection, Projection, ProjectionOutcome};
