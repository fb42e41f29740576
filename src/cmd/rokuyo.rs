use crate::calc::rokuyo_of;
use crate::i18n::Locale;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};

pub fn run(date: NaiveDate, locale: Locale) -> Result<()> {
    write_rokuyo(date, locale, &mut std::io::stdout())
}

pub(crate) fn write_rokuyo<W: std::io::Write>(date: NaiveDate, locale: Locale, out: &mut W) -> Result<()> {
    let label = rokuyo_of(date);
    let weekday = locale.weekday_headers()[date.weekday().num_days_from_sunday() as usize];
    writeln!(
        out,
        "{} ({}) {} / {}",
        locale.long_date(date),
        weekday,
        label.kanji(),
        label.romaji()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(date: NaiveDate, locale: Locale) -> String {
        let mut buf = Vec::new();
        write_rokuyo(date, locale, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_rokuyo_ja() {
        // (5 + 1) % 6 == 0
        let out = render(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(), Locale::Ja);
        assert_eq!(out, "2026年5月1日 (金) 先勝 / Sakigachi\n");
    }

    #[test]
    fn test_write_rokuyo_en() {
        // (1 + 3) % 6 == 4
        let out = render(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(), Locale::En);
        assert_eq!(out, "January 3, 2026 (Sa) 大安 / Taian\n");
    }
}
