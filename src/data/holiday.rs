use crate::data::persistence::{Format, Persistable};
use crate::i18n::Locale;
use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Holiday table shipped with the binary and written out by `init`.
const BUNDLED_HOLIDAYS: &str = include_str!("holidays_jp.yaml");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Holiday {
    /// `YYYY-MM-DD`
    pub date: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
}

impl Holiday {
    /// Name in the requested locale; English falls back to the Japanese name.
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ja => &self.name,
            Locale::En => self.name_en.as_deref().unwrap_or(&self.name),
        }
    }
}

#[cfg(test)]
impl Holiday {
    pub fn new(name: &str, date: &str) -> Self {
        Holiday {
            date: date.to_string(),
            name: name.to_string(),
            name_en: None,
        }
    }

    pub fn with_english(mut self, name_en: &str) -> Self {
        self.name_en = Some(name_en.to_string());
        self
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct HolidayData {
    #[serde(default)]
    pub table_version: String,
    pub holidays: Vec<Holiday>,
}

impl Persistable for HolidayData {
    fn filename() -> &'static str {
        "holidays.yaml"
    }
    fn format() -> Format {
        Format::Yaml
    }
}

impl HolidayData {
    pub fn bundled() -> Result<Self> {
        serde_norway::from_str(BUNDLED_HOLIDAYS).context("failed to parse bundled holiday table")
    }

    /// Orders entries by date; hand-edited files may list them in any order.
    pub fn sort_by_date(&mut self) {
        self.holidays.sort_by_cached_key(|h| {
            (NaiveDate::parse_from_str(&h.date, "%Y-%m-%d").ok(), h.date.clone())
        });
    }

    pub fn in_year(&self, year: i32) -> Vec<&Holiday> {
        let prefix = format!("{:04}-", year);
        self.holidays
            .iter()
            .filter(|h| h.date.starts_with(&prefix))
            .collect()
    }

    /// Validates every entry and builds the lookup table.
    /// Unparseable dates and duplicate dates are rejected.
    pub fn to_table(&self) -> Result<HolidayTable> {
        let mut entries = HashMap::with_capacity(self.holidays.len());
        let mut years = BTreeSet::new();
        for h in &self.holidays {
            let date = NaiveDate::parse_from_str(&h.date, "%Y-%m-%d")
                .with_context(|| format!("invalid holiday date '{}' ({})", h.date, h.name))?;
            if entries.insert(date, h.clone()).is_some() {
                bail!("duplicate holiday entry for {}", date);
            }
            years.insert(date.year());
        }
        tracing::debug!(
            version = %self.table_version,
            entries = entries.len(),
            "holiday table loaded"
        );
        Ok(HolidayTable {
            version: self.table_version.clone(),
            entries,
            years,
        })
    }
}

/// Read-only date → holiday lookup.
#[derive(Debug, Default, Clone)]
pub struct HolidayTable {
    version: String,
    entries: HashMap<NaiveDate, Holiday>,
    years: BTreeSet<i32>,
}

impl HolidayTable {
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.entries.get(&date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Years that have at least one entry, ascending.
    pub fn available_years(&self) -> Vec<i32> {
        self.years.iter().copied().collect()
    }

    pub fn covers_year(&self, year: i32) -> bool {
        self.years.contains(&year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_holiday_new_sets_fields() {
        let h = Holiday::new("元日", "2026-01-01");
        assert_eq!(h.name, "元日");
        assert_eq!(h.date, "2026-01-01");
        assert!(h.name_en.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_japanese() {
        let h = Holiday::new("山の日", "2026-08-11");
        assert_eq!(h.display_name(Locale::En), "山の日");
        let h = h.with_english("Mountain Day");
        assert_eq!(h.display_name(Locale::En), "Mountain Day");
        assert_eq!(h.display_name(Locale::Ja), "山の日");
    }

    #[test]
    fn test_sort_by_date() {
        let mut data = HolidayData::default();
        data.holidays.push(Holiday::new("B", "2026-05-05"));
        data.holidays.push(Holiday::new("A", "2026-01-01"));
        data.holidays.push(Holiday::new("C", "2026-1-12"));
        data.sort_by_date();
        let order: Vec<&str> = data.holidays.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_bundled_table_parses_and_validates() {
        let data = HolidayData::bundled().unwrap();
        let table = data.to_table().unwrap();
        assert_eq!(table.available_years(), vec![2024, 2025, 2026, 2027]);
        assert_eq!(data.in_year(2026).len(), 18);
        assert!(!table.version().is_empty());
    }

    #[test]
    fn test_bundled_table_2026_golden_week() {
        let table = HolidayData::bundled().unwrap().to_table().unwrap();
        assert_eq!(table.get(d(2026, 5, 3)).unwrap().name, "憲法記念日");
        assert_eq!(table.get(d(2026, 5, 6)).unwrap().name, "振替休日");
        assert!(!table.is_holiday(d(2026, 5, 7)));
    }

    #[test]
    fn test_lookup_outside_covered_years_is_none() {
        let table = HolidayData::bundled().unwrap().to_table().unwrap();
        assert!(table.get(d(1999, 1, 1)).is_none());
        assert!(!table.covers_year(1999));
    }

    #[test]
    fn test_to_table_rejects_duplicates() {
        let mut data = HolidayData::default();
        data.holidays.push(Holiday::new("A", "2026-01-01"));
        data.holidays.push(Holiday::new("B", "2026-01-01"));
        let err = data.to_table().unwrap_err();
        assert_eq!(err.to_string(), "duplicate holiday entry for 2026-01-01");
    }

    #[test]
    fn test_to_table_rejects_bad_dates() {
        let mut data = HolidayData::default();
        data.holidays.push(Holiday::new("Nope", "2026-02-30"));
        assert!(data.to_table().is_err());
    }

    #[test]
    fn test_empty_table() {
        let table = HolidayData::default().to_table().unwrap();
        assert_eq!(table.len(), 0);
        assert!(table.available_years().is_empty());
    }

    #[test]
    fn test_holiday_data_save_to_load_from() {
        let tmp = TempDir::new().unwrap();
        let mut data = HolidayData::default();
        data.table_version = "test".to_string();
        data.holidays.push(Holiday::new("海の日", "2026-07-20").with_english("Marine Day"));
        data.save_to(tmp.path()).unwrap();
        let loaded = HolidayData::load_from(tmp.path()).unwrap();
        assert_eq!(loaded.table_version, "test");
        assert_eq!(loaded.holidays[0].name, "海の日");
        assert_eq!(loaded.holidays[0].name_en.as_deref(), Some("Marine Day"));
    }

    #[test]
    fn test_lookup_by_date_ignores_source_formatting() {
        let mut data = HolidayData::default();
        // chrono accepts unpadded fields; the table stores the parsed date
        data.holidays.push(Holiday::new("こどもの日", "2026-5-5"));
        let table = data.to_table().unwrap();
        assert_eq!(table.get(d(2026, 5, 5)).map(|h| h.name.as_str()), Some("こどもの日"));
        assert!(table.covers_year(2026));
    }
}
