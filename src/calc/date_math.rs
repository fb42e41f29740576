use crate::calc::error::CalcError;
use chrono::{Datelike, NaiveDate};

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    last_day_of_month(year, month).map(|d| d.day())
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(year, month, 1)?;
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Moves `date` to the same month/day in `year`, clamping Feb 29 to Feb 28.
pub fn with_year_clamped(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

/// Absolute number of whole days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeReport {
    /// Completed years.
    pub years: i32,
    /// `total_days % 365`
    pub days: i64,
    pub total_days: i64,
    /// 0 when `today` is the birthday.
    pub days_until_birthday: i64,
}

pub fn compute_age(birth: NaiveDate, today: NaiveDate) -> Result<AgeReport, CalcError> {
    if birth > today {
        return Err(CalcError::FutureDate(birth));
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    let total_days = (today - birth).num_days();

    let mut next = birthday_in(birth, today.year());
    if next < today {
        next = birthday_in(birth, today.year() + 1);
    }

    Ok(AgeReport {
        years,
        days: total_days % 365,
        total_days,
        days_until_birthday: (next - today).num_days(),
    })
}

/// Birthday observed in `year`; Feb 29 falls on Mar 1 in common years.
fn birthday_in(birth: NaiveDate, year: i32) -> NaiveDate {
    birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}
