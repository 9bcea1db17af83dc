//! Report formatting utilities for terminal output
//!
//! Shared helpers for amounts, bars, and section headers.

use crate::models::Money;

/// Format a whole-unit amount with the configured symbol
pub fn format_amount(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a derived (fractional) figure, rounded to the nearest whole unit
pub fn format_figure(value: f64, symbol: &str) -> String {
    Money::from_units(value.round() as i64).format_with_symbol(symbol)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Section title followed by an underline of the same width
pub fn format_title(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.chars().count()))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Money::from_units(166500), "¥"), "¥166,500");
        assert_eq!(format_amount(Money::from_units(-3500), "$"), "-$3,500");
    }

    #[test]
    fn test_format_figure_rounds() {
        assert_eq!(format_figure(6666.67, "¥"), "¥6,667");
        assert_eq!(format_figure(-1000.4, "¥"), "-¥1,000");
        assert_eq!(format_figure(0.0, "¥"), "¥0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("コンビニで昼ごはん", 6), "コンビ...");
    }

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("Trend"), "Trend\n─────\n");
    }
}
