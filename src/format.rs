//! Display Formatting
//!
//! Currency and month helpers shared by tables and forms.

use std::collections::HashSet;

use chrono::{Datelike, Local, Months, NaiveDate};

/// Format VND the way `Intl.NumberFormat("vi-VN", {currency: "VND"})` does:
/// `.` thousands separator, no decimals, trailing `₫`.
pub fn format_vnd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

/// Entry of the month selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    /// `YYYY-MM`
    pub value: String,
    /// e.g. `October 2026`
    pub label: String,
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM` of the given day
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Split `YYYY-MM` into year and month
pub fn parse_month(value: &str) -> Option<(i32, u32)> {
    if value.len() != 7 {
        return None;
    }
    let date = NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").ok()?;
    Some((date.year(), date.month()))
}

/// `count` months ending with the month of `today`, newest first, without duplicates
pub fn month_options(today: NaiveDate, count: usize) -> Vec<MonthOption> {
    let first_of_month = today.with_day(1).unwrap_or(today);
    let mut seen = HashSet::new();
    (0..count as u32)
        .filter_map(|i| first_of_month.checked_sub_months(Months::new(i)))
        .filter(|date| seen.insert(month_key(*date)))
        .map(|date| MonthOption {
            value: month_key(date),
            label: date.format("%B %Y").to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(0), "0 ₫");
        assert_eq!(format_vnd(950), "950 ₫");
        assert_eq!(format_vnd(1_000), "1.000 ₫");
        assert_eq!(format_vnd(1_250_000), "1.250.000 ₫");
        assert_eq!(format_vnd(-45_000), "-45.000 ₫");
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2026-10"), Some((2026, 10)));
        assert_eq!(parse_month("2026-13"), None);
        assert_eq!(parse_month("2026-1"), None);
        assert_eq!(parse_month("october"), None);
    }

    #[test]
    fn test_month_options_cross_year() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        let options = month_options(today, 11);
        assert_eq!(options.len(), 11);
        assert_eq!(options[0].value, "2026-03");
        assert_eq!(options[0].label, "March 2026");
        assert_eq!(options[2].value, "2026-01");
        assert_eq!(options[3].value, "2025-12");
        assert_eq!(options[10].value, "2025-05");
    }
}
