use crate::calc::selection::DateRange;
use crate::data::HolidayTable;
use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Monday–Friday, false for Saturday/Sunday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A business day is a weekday with no holiday table entry.
pub fn is_business_day(date: NaiveDate, holidays: &HolidayTable) -> bool {
    is_weekday(date) && !holidays.is_holiday(date)
}

/// Counts business days in the closed interval `range`.
pub fn count_business_days(range: DateRange, holidays: &HolidayTable) -> u32 {
    range
        .iter_days()
        .filter(|&d| is_business_day(d, holidays))
        .count() as u32
}

/// Business days per month of `year`, January first.
pub fn business_days_by_month(year: i32, holidays: &HolidayTable) -> Vec<(u32, u32)> {
    (1..=12)
        .filter_map(|month| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            let last = crate::calc::date_math::last_day_of_month(year, month)?;
            Some((month, count_business_days(DateRange::new(first, last), holidays)))
        })
        .collect()
}
