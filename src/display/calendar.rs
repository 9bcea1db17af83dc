//! Calendar display formatting
//!
//! A month grid with each day's signed net under its number. Today is marked
//! with `*`; a day with records that cancel out shows `±0`.

use super::report::{format_amount, separator};
use crate::metrics::{CalendarCell, MonthCalendar};

const CELL_WIDTH: usize = 10;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn weekday_header(first_day_of_week: u8) -> String {
    (0..7)
        .map(|i| {
            let name = WEEKDAYS[(usize::from(first_day_of_week) + i) % 7];
            format!("{:>width$}", name, width = CELL_WIDTH)
        })
        .collect()
}

fn day_label(cell: Option<&CalendarCell>) -> String {
    match cell {
        Some(cell) if cell.is_today => format!("*{}", cell.date.format("%-d")),
        Some(cell) => cell.date.format("%-d").to_string(),
        None => String::new(),
    }
}

fn net_label(cell: Option<&CalendarCell>) -> String {
    match cell {
        Some(cell) if cell.has_records && cell.net.is_zero() => "±0".to_string(),
        Some(cell) if cell.has_records => cell.net.format_signed(),
        _ => String::new(),
    }
}

/// Format the month grid
pub fn format_calendar(calendar: &MonthCalendar, first_day_of_week: u8, symbol: &str) -> String {
    let width = CELL_WIDTH * 7;
    let mut output = String::new();

    let title = calendar.month.to_string();
    output.push_str(&format!("{:^width$}\n", title, width = width));
    output.push_str(&weekday_header(first_day_of_week));
    output.push('\n');
    output.push_str(&separator(width));
    output.push('\n');

    for week in calendar.weeks() {
        let days: String = week
            .iter()
            .map(|cell| format!("{:>w$}", day_label(*cell), w = CELL_WIDTH))
            .collect();
        let nets: String = week
            .iter()
            .map(|cell| format!("{:>w$}", net_label(*cell), w = CELL_WIDTH))
            .collect();
        output.push_str(days.trim_end());
        output.push('\n');
        output.push_str(nets.trim_end());
        output.push('\n');
    }

    output.push_str(&separator(width));
    output.push('\n');
    output.push_str(&format!(
        "Month net: {}\n",
        format_amount(calendar.month_net(), symbol)
    ));

    output
}
