use crate::calc::date_math::{compute_age, AgeReport};
use crate::i18n::Locale;
use anyhow::Result;
use chrono::{Local, NaiveDate};

pub fn run(birth: NaiveDate, today: Option<NaiveDate>, locale: Locale) -> Result<()> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = compute_age(birth, today)?;
    write_age(&report, locale, &mut std::io::stdout())
}

pub(crate) fn write_age<W: std::io::Write>(report: &AgeReport, locale: Locale, out: &mut W) -> Result<()> {
    match locale {
        Locale::Ja => {
            writeln!(out, "年齢: {}歳 {}日", report.years, report.days)?;
            writeln!(out, "生まれてから: {}日", report.total_days)?;
            writeln!(out, "次の誕生日まで: {}日", report.days_until_birthday)?;
        }
        Locale::En => {
            writeln!(out, "Age: {} years {} days", report.years, report.days)?;
            writeln!(out, "Days lived: {}", report.total_days)?;
            writeln!(out, "Days until next birthday: {}", report.days_until_birthday)?;
        }
    }
    Ok(())
}
