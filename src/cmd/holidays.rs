use crate::calc::business_day::business_days_by_month;
use crate::calc::rokuyo_of;
use crate::data::HolidayData;
use crate::i18n::{Locale, Text};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};

pub fn run(year: Option<i32>, locale: Locale) -> Result<()> {
    let data = super::load_holiday_data()?;
    write_holidays(&data, year, locale, &mut std::io::stdout())
}

pub(crate) fn write_holidays<W: std::io::Write>(
    data: &HolidayData,
    year: Option<i32>,
    locale: Locale,
    out: &mut W,
) -> Result<()> {
    let entries = match year {
        Some(y) => data.in_year(y),
        None => data.holidays.iter().collect(),
    };
    match year {
        Some(y) => writeln!(out, "{} {}", locale.text(Text::Holidays), locale.year_title(y))?,
        None => writeln!(out, "{}", locale.text(Text::Holidays))?,
    }
    writeln!(out, "---")?;
    writeln!(out, "  {:<12} {:<4} {:<11} {}", "Date", "Day", "Rokuyo", "Name")?;
    for h in &entries {
        let (weekday, label) = match NaiveDate::parse_from_str(&h.date, "%Y-%m-%d") {
            Ok(date) => (
                locale.weekday_headers()[date.weekday().num_days_from_sunday() as usize],
                rokuyo_of(date).label(locale),
            ),
            Err(_) => ("?", "?"),
        };
        writeln!(
            out,
            "  {:<12} {:<4} {:<11} {}",
            h.date,
            weekday,
            label,
            h.display_name(locale)
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} holiday(s)", entries.len())?;
    if !data.table_version.is_empty() {
        writeln!(out, "Table version: {}", data.table_version)?;
    }

    if let Some(y) = year {
        let table = data.to_table()?;
        super::warn_if_uncovered(&table, y..=y);
        let months = business_days_by_month(y, &table);
        writeln!(out)?;
        writeln!(out, "{} {}", locale.text(Text::BusinessDaysTitle), locale.year_title(y))?;
        for (month, count) in &months {
            writeln!(out, "  {:02}: {:>2}", month, count)?;
        }
        let total: u32 = months.iter().map(|(_, c)| c).sum();
        writeln!(out, "  Total: {}", total)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Holiday;

    fn make_data(holidays: Vec<Holiday>) -> HolidayData {
        HolidayData {
            table_version: "t1".to_string(),
            holidays,
        }
    }

    fn render(data: &HolidayData, year: Option<i32>, locale: Locale) -> String {
        let mut buf = Vec::new();
        write_holidays(data, year, locale, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_holidays_empty() {
        let out = render(&make_data(vec![]), None, Locale::En);
        assert!(out.contains("Total: 0 holiday(s)"));
        assert!(!out.contains("Business days"));
        assert!(out.contains("Table version: t1"));
    }

    #[test]
    fn test_write_holidays_shows_weekday_and_rokuyo() {
        let data = make_data(vec![Holiday::new("元日", "2026-01-01").with_english("New Year's Day")]);
        let out = render(&data, None, Locale::Ja);
        assert!(out.contains("2026-01-01"));
        assert!(out.contains("木"));
        // (1 + 1) % 6 == 2
        assert!(out.contains("先負"));
        assert!(out.contains("元日"));

        let out = render(&data, None, Locale::En);
        assert!(out.contains("Th"));
        assert!(out.contains("Sakimake"));
        assert!(out.contains("New Year's Day"));
    }

    #[test]
    fn test_write_holidays_filters_by_year() {
        let data = make_data(vec![
            Holiday::new("A", "2025-01-01"),
            Holiday::new("B", "2026-01-01"),
            Holiday::new("C", "2026-05-05"),
        ]);
        let out = render(&data, Some(2026), Locale::En);
        assert!(out.contains("Total: 2 holiday(s)"));
        assert!(!out.contains("2025-01-01"));
    }

    #[test]
    fn test_write_holidays_bundled_2026() {
        let data = HolidayData::bundled().unwrap();
        let out = render(&data, Some(2026), Locale::Ja);
        assert!(out.contains("Total: 18 holiday(s)"));
        assert!(out.contains("国民の休日"));
        assert!(out.contains("営業日数 2026年"));
        assert!(out.contains("  05: 18"));
        assert!(out.contains("  Total: 244"));
    }
}
