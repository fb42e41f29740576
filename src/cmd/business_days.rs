use crate::calc::{count_business_days, DateRange};
use crate::data::HolidayTable;
use crate::i18n::{Locale, Text};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};

pub fn run(start: NaiveDate, end: NaiveDate, locale: Locale) -> Result<()> {
    let holidays = super::load_holiday_table()?;
    let range = DateRange::new(start, end);
    super::warn_if_uncovered(&holidays, range.start().year()..=range.end().year());
    write_business_days(range, &holidays, locale, &mut std::io::stdout())
}

pub(crate) fn write_business_days<W: std::io::Write>(
    range: DateRange,
    holidays: &HolidayTable,
    locale: Locale,
    out: &mut W,
) -> Result<()> {
    let count = count_business_days(range, holidays);
    tracing::debug!(start = %range.start(), end = %range.end(), count, "counted business days");

    writeln!(out, "{}", locale.text(Text::BusinessDaysTitle))?;
    writeln!(
        out,
        "{}: {} - {} ({} {})",
        locale.text(Text::DateRange),
        locale.long_date(range.start()),
        locale.long_date(range.end()),
        range.len_days(),
        locale.text(Text::Days)
    )?;
    writeln!(
        out,
        "{}: {} {}",
        locale.text(Text::BusinessDaysTitle),
        count,
        locale.text(Text::Days)
    )?;

    let skipped: Vec<_> = range
        .iter_days()
        .filter_map(|d| holidays.get(d).map(|h| (d, h)))
        .collect();
    if !skipped.is_empty() {
        writeln!(out, "{}:", locale.text(Text::Holidays))?;
        for (date, holiday) in skipped {
            let weekday = locale.weekday_headers()[date.weekday().num_days_from_sunday() as usize];
            writeln!(out, "  {} ({}) {}", holiday.date, weekday, holiday.display_name(locale))?;
        }
    }
    writeln!(out, "{}", locale.text(Text::BusinessDaysNote))?;
    Ok(())
}
