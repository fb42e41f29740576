use crate::calc::date_math::days_between;
use crate::i18n::{Locale, Text};
use anyhow::Result;
use chrono::NaiveDate;

pub fn run(start: NaiveDate, end: NaiveDate, locale: Locale) -> Result<()> {
    write_date_diff(start, end, locale, &mut std::io::stdout())
}

pub(crate) fn write_date_diff<W: std::io::Write>(
    start: NaiveDate,
    end: NaiveDate,
    locale: Locale,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "{} - {}: {} {}",
        locale.long_date(start),
        locale.long_date(end),
        days_between(start, end),
        locale.text(Text::Days)
    )?;
    Ok(())
}
