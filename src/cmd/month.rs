use crate::calc::{render_month, GridContext, MonthCell, MonthGrid, Rokuyo, Selection};
use crate::i18n::{center, pad_left, Locale, Text};
use anyhow::Result;
use chrono::Local;

const CELL_WIDTH: usize = 4;

pub fn run(year: i32, month: u32, filter: Option<Rokuyo>, locale: Locale) -> Result<()> {
    let holidays = super::load_holiday_table()?;
    super::warn_if_uncovered(&holidays, year..=year);
    let grid = render_month(
        year,
        month,
        GridContext {
            holidays: &holidays,
            selection: &Selection::Empty,
            rokuyo_filter: filter,
            today: Local::now().date_naive(),
        },
    )?;
    write_month(&grid, filter, locale, &mut std::io::stdout())
}

fn marker(cell: &MonthCell) -> char {
    match cell {
        MonthCell::Blank => ' ',
        MonthCell::Day(d) if d.matches_rokuyo_filter => '#',
        MonthCell::Day(d) if d.holiday.is_some() => '*',
        MonthCell::Day(d) if d.is_today => '<',
        MonthCell::Day(_) => ' ',
    }
}

pub(crate) fn write_month<W: std::io::Write>(
    grid: &MonthGrid,
    filter: Option<Rokuyo>,
    locale: Locale,
    out: &mut W,
) -> Result<()> {
    let width = CELL_WIDTH * 7;
    writeln!(out, "{}", center(&locale.month_title(grid.year, grid.month), width).trim_end())?;

    let header: String = locale
        .weekday_headers()
        .iter()
        .map(|h| format!("{} ", pad_left(h, CELL_WIDTH - 1)))
        .collect();
    writeln!(out, "{}", header.trim_end())?;

    for row in grid.rows() {
        if row.iter().all(|c| *c == MonthCell::Blank) {
            continue;
        }
        let line: String = row
            .iter()
            .map(|cell| match cell.as_day() {
                Some(d) => format!("{:>3}{}", d.day(), marker(cell)),
                None => " ".repeat(CELL_WIDTH),
            })
            .collect();
        writeln!(out, "{}", line.trim_end())?;
    }

    let holidays: Vec<_> = grid.days().filter(|d| d.holiday.is_some()).collect();
    if !holidays.is_empty() {
        writeln!(out)?;
        for d in holidays {
            writeln!(
                out,
                "  {:>2} {} ({})",
                d.day(),
                d.holiday_name(locale).unwrap_or_default(),
                d.rokuyo.label(locale)
            )?;
        }
    }

    let business = grid.days().filter(|d| d.is_business_day()).count();
    writeln!(out)?;
    writeln!(
        out,
        "{}: {} {}",
        locale.text(Text::BusinessDaysTitle),
        business,
        locale.text(Text::Days)
    )?;

    if let Some(f) = filter {
        let hits = grid.days().filter(|d| d.matches_rokuyo_filter).count();
        writeln!(out)?;
        writeln!(
            out,
            "{}: {} ({} {})",
            locale.text(Text::Filter),
            f.label(locale),
            hits,
            locale.text(Text::Days)
        )?;
    }

    writeln!(
        out,
        "* {}  < {}  # {}",
        locale.text(Text::Holiday),
        locale.text(Text::Today),
        locale.text(Text::Filter)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HolidayData, HolidayTable};
    use chrono::NaiveDate;

    fn grid_for(year: i32, month: u32, filter: Option<Rokuyo>, holidays: &HolidayTable) -> MonthGrid {
        render_month(
            year,
            month,
            GridContext {
                holidays,
                selection: &Selection::Empty,
                rokuyo_filter: filter,
                today: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            },
        )
        .unwrap()
    }

    fn render(grid: &MonthGrid, filter: Option<Rokuyo>, locale: Locale) -> String {
        let mut buf = Vec::new();
        write_month(grid, filter, locale, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_month_january_2026_english() {
        let holidays = HolidayData::bundled().unwrap().to_table().unwrap();
        let g = grid_for(2026, 1, None, &holidays);
        let out = render(&g, None, Locale::En);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("January 2026"));
        assert_eq!(lines[1], " Su  Mo  Tu  We  Th  Fr  Sa");
        // Thursday the 1st is a holiday
        assert_eq!(lines[2], "                  1*  2   3");
        assert!(out.contains(" 15<"));
        assert!(out.contains("   1 New Year's Day (Sakimake)"));
        assert!(out.contains("  12 Coming of Age Day"));
        assert!(out.contains("Business days: 20 days"));
    }

    #[test]
    fn test_write_month_skips_blank_rows() {
        let holidays = HolidayTable::default();
        // February 2026 starts on Sunday and fills exactly four rows
        let g = grid_for(2026, 2, None, &holidays);
        let out = render(&g, None, Locale::En);
        let day_rows = out
            .lines()
            .skip(2)
            .take_while(|l| !l.is_empty() && !l.starts_with('*'))
            .count();
        assert_eq!(day_rows, 4);
    }

    #[test]
    fn test_write_month_japanese_headers() {
        let holidays = HolidayTable::default();
        let g = grid_for(2026, 5, None, &holidays);
        let out = render(&g, None, Locale::Ja);
        assert!(out.contains("2026年5月"));
        assert!(out.lines().nth(1).unwrap().starts_with(" 日"));
    }

    #[test]
    fn test_write_month_reports_filter_hits() {
        let holidays = HolidayTable::default();
        let g = grid_for(2026, 1, Some(Rokuyo::Taian), &holidays);
        let out = render(&g, Some(Rokuyo::Taian), Locale::Ja);
        assert!(out.contains("  3#"));
        assert!(out.contains("六曜: 大安 (5 日)"));
    }
}
