//! Month calendar annotations
//!
//! Builds the data behind a month grid: one cell per day carrying the day's
//! signed net, whether anything was recorded, and whether it is today.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use super::aggregate::PeriodTotals;
use crate::models::{Money, MonthKey, Transaction};

/// One day of a month calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Income minus expense for the day
    pub net: Money,
    /// True even when the day's entries cancel out to zero
    pub has_records: bool,
    pub is_today: bool,
}

/// A month of calendar cells plus the blank cells before day 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCalendar {
    pub month: MonthKey,
    /// Empty cells before the 1st, given the first day of the week
    pub leading_blanks: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthCalendar {
    /// Net change over the whole month
    pub fn month_net(&self) -> Money {
        self.cells.iter().map(|cell| cell.net).sum()
    }

    /// Cells grouped into calendar weeks, `None` for padding
    pub fn weeks(&self) -> Vec<Vec<Option<&CalendarCell>>> {
        let mut slots: Vec<Option<&CalendarCell>> = Vec::new();
        slots.extend((0..self.leading_blanks).map(|_| None));
        slots.extend(self.cells.iter().map(Some));
        while slots.len() % 7 != 0 {
            slots.push(None);
        }
        slots.chunks(7).map(|week| week.to_vec()).collect()
    }
}

/// Build the calendar for `month`
///
/// `first_day_of_week` is 0 for Sunday, 1 for Monday, and so on.
pub fn month_calendar(
    transactions: &[Transaction],
    month: MonthKey,
    today: NaiveDate,
    first_day_of_week: u8,
) -> MonthCalendar {
    let mut by_day: HashMap<NaiveDate, PeriodTotals> = HashMap::new();
    for txn in transactions.iter().filter(|txn| month.contains(txn.date)) {
        by_day.entry(txn.date).or_default().record(txn);
    }

    let start = month.start_date();
    let cells = (0..month.days_in_month())
        .map(|offset| {
            let date = start + Duration::days(i64::from(offset));
            let totals = by_day.get(&date);
            CalendarCell {
                date,
                net: totals.map(PeriodTotals::net).unwrap_or_default(),
                has_records: totals.is_some(),
                is_today: date == today,
            }
        })
        .collect();

    let weekday = start.weekday().num_days_from_sunday();
    let leading_blanks = (weekday + 7 - u32::from(first_day_of_week % 7)) % 7;

    MonthCalendar {
        month,
        leading_blanks,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::aggregate::{has_records_on, net_for_date};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction::income(Money::from_units(250000), date(2025, 6, 1)),
            Transaction::expense(Money::from_units(80000), date(2025, 6, 1)),
            Transaction::expense(Money::from_units(3500), date(2025, 6, 2)),
            Transaction::income(Money::from_units(2000), date(2025, 6, 9)),
            Transaction::expense(Money::from_units(2000), date(2025, 6, 9)),
            Transaction::expense(Money::from_units(1000), date(2025, 7, 1)),
        ]
    }

    #[test]
    fn test_cells_cover_the_month() {
        let june = MonthKey::new(2025, 6).unwrap();
        let cal = month_calendar(&ledger(), june, date(2025, 6, 2), 0);

        assert_eq!(cal.cells.len(), 30);
        assert_eq!(cal.cells[0].date, date(2025, 6, 1));
        assert_eq!(cal.cells[29].date, date(2025, 6, 30));
    }

    #[test]
    fn test_cells_agree_with_net_for_date() {
        let txns = ledger();
        let june = MonthKey::new(2025, 6).unwrap();
        let cal = month_calendar(&txns, june, date(2025, 6, 2), 0);

        for cell in &cal.cells {
            assert_eq!(cell.net, net_for_date(&txns, cell.date));
            assert_eq!(cell.has_records, has_records_on(&txns, cell.date));
        }
        assert_eq!(cal.cells[0].net.units(), 170000);
        assert!(cal.cells[8].has_records);
        assert_eq!(cal.cells[8].net, Money::zero());
        assert_eq!(cal.month_net().units(), 166500);
    }

    #[test]
    fn test_today_marker() {
        let june = MonthKey::new(2025, 6).unwrap();
        let cal = month_calendar(&ledger(), june, date(2025, 6, 2), 0);
        let today: Vec<_> = cal.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2025, 6, 2));

        let other = month_calendar(&ledger(), june, date(2025, 7, 2), 0);
        assert!(other.cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_leading_blanks() {
        // 2025-06-01 is a Sunday
        let june = MonthKey::new(2025, 6).unwrap();
        assert_eq!(month_calendar(&[], june, date(2025, 6, 1), 0).leading_blanks, 0);
        assert_eq!(month_calendar(&[], june, date(2025, 6, 1), 1).leading_blanks, 6);

        // 2025-01-01 is a Wednesday
        let jan = MonthKey::new(2025, 1).unwrap();
        assert_eq!(month_calendar(&[], jan, date(2025, 1, 1), 0).leading_blanks, 3);
        assert_eq!(month_calendar(&[], jan, date(2025, 1, 1), 1).leading_blanks, 2);
    }

    #[test]
    fn test_weeks_are_padded_to_seven() {
        let jan = MonthKey::new(2025, 1).unwrap();
        let cal = month_calendar(&[], jan, date(2025, 1, 1), 0);
        let weeks = cal.weeks();

        assert!(weeks.iter().all(|w| w.len() == 7));
        assert_eq!(weeks.len(), 5);
        assert!(weeks[0][2].is_none());
        assert_eq!(weeks[0][3].map(|c| c.date), Some(date(2025, 1, 1)));
    }

    #[test]
    fn test_last_supported_month() {
        let last = MonthKey::of(NaiveDate::MAX);
        let cal = month_calendar(&[], last, NaiveDate::MAX, 0);
        assert_eq!(cal.cells.len(), 31);
        assert_eq!(cal.cells[30].date, NaiveDate::MAX);
        assert!(cal.cells[30].is_today);
    }
}
