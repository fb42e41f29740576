pub mod age;
pub mod business_days;
pub mod calc;
pub mod csv2json;
pub mod date_diff;
pub mod holidays;
pub mod init;
pub mod month;
pub mod rokuyo;
pub mod root;
pub mod tax;

use crate::data::{HolidayData, HolidayTable, Persistable};
use anyhow::Result;
use std::ops::RangeInclusive;

/// Loads `holidays.yaml` from the data directory, falling back to the
/// bundled table when the file is missing or empty.
pub(crate) fn load_holiday_data() -> Result<HolidayData> {
    let mut data = HolidayData::load()?;
    if data.holidays.is_empty() {
        tracing::warn!("holidays.yaml missing or empty, using bundled holiday table");
        return HolidayData::bundled();
    }
    data.sort_by_date();
    Ok(data)
}

pub(crate) fn load_holiday_table() -> Result<HolidayTable> {
    load_holiday_data()?.to_table()
}

/// Years in `years` that have no holiday entries.
pub(crate) fn uncovered_years(table: &HolidayTable, years: RangeInclusive<i32>) -> Vec<i32> {
    years.filter(|y| !table.covers_year(*y)).collect()
}

/// Warns once when any of `years` has no holiday coverage; lookups then
/// report no holidays for those years.
pub(crate) fn warn_if_uncovered(table: &HolidayTable, years: RangeInclusive<i32>) {
    let missing = uncovered_years(table, years);
    if !missing.is_empty() {
        tracing::warn!(
            years = ?missing,
            available = ?table.available_years(),
            "no holiday data for year, holidays will not be marked"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncovered_years_lists_gaps_only() {
        let table = HolidayData::bundled().unwrap().to_table().unwrap();
        assert!(uncovered_years(&table, 2024..=2027).is_empty());
        assert_eq!(uncovered_years(&table, 2026..=2029), vec![2028, 2029]);

        let wide = uncovered_years(&table, 1900..=2100);
        assert_eq!(wide.len(), 201 - 4);
        assert_eq!(wide.first(), Some(&1900));
        assert!(!wide.contains(&2026));
    }

    #[test]
    fn test_uncovered_years_empty_table() {
        let table = HolidayTable::default();
        assert_eq!(uncovered_years(&table, 2026..=2026), vec![2026]);
    }
}
