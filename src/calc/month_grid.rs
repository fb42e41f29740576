use crate::calc::date_math::days_in_month;
use crate::calc::error::CalendarError;
use crate::calc::rokuyo::{rokuyo, Rokuyo};
use crate::calc::selection::Selection;
use crate::data::{Holiday, HolidayTable};
use crate::i18n::Locale;
use chrono::{Datelike, NaiveDate};

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Text color policy for a day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTone {
    /// Sundays and holidays.
    Accent,
    Saturday,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// 0 = Sunday … 6 = Saturday
    pub weekday: u32,
    pub holiday: Option<Holiday>,
    pub rokuyo: Rokuyo,
    pub is_today: bool,
    pub in_selection: bool,
    pub is_selection_start: bool,
    pub matches_rokuyo_filter: bool,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn holiday_name(&self, locale: Locale) -> Option<&str> {
        self.holiday.as_ref().map(|h| h.display_name(locale))
    }

    pub fn is_weekend(&self) -> bool {
        self.weekday == 0 || self.weekday == 6
    }

    /// Same rule as [`crate::calc::business_day::is_business_day`], from the cell's own flags.
    pub fn is_business_day(&self) -> bool {
        !self.is_weekend() && self.holiday.is_none()
    }

    pub fn tone(&self) -> DayTone {
        if self.weekday == 0 || self.holiday.is_some() {
            DayTone::Accent
        } else if self.weekday == 6 {
            DayTone::Saturday
        } else {
            DayTone::Default
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MonthCell {
    Blank,
    Day(DayCell),
}

impl MonthCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            MonthCell::Day(d) => Some(d),
            MonthCell::Blank => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Always `GRID_CELLS` long.
    cells: Vec<MonthCell>,
}

impl MonthGrid {
    pub fn rows(&self) -> impl Iterator<Item = &[MonthCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(MonthCell::as_day)
    }
}

/// Inputs besides (year, month) that annotate the grid.
#[derive(Debug, Clone, Copy)]
pub struct GridContext<'a> {
    pub holidays: &'a HolidayTable,
    pub selection: &'a Selection,
    pub rokuyo_filter: Option<Rokuyo>,
    pub today: NaiveDate,
}

/// Lays out `month` (1-based) of `year` as a Sunday-first 6×7 grid.
pub fn render_month(year: i32, month: u32, ctx: GridContext<'_>) -> Result<MonthGrid, CalendarError> {
    let invalid = || CalendarError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let day_count = days_in_month(year, month).ok_or_else(invalid)?;
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut cells = Vec::with_capacity(GRID_CELLS);
    cells.resize(lead, MonthCell::Blank);

    for (offset, date) in first.iter_days().take(day_count as usize).enumerate() {
        let label = rokuyo(month, date.day());
        cells.push(MonthCell::Day(DayCell {
            date,
            weekday: ((lead + offset) % GRID_COLUMNS) as u32,
            holiday: ctx.holidays.get(date).cloned(),
            rokuyo: label,
            is_today: date == ctx.today,
            in_selection: ctx.selection.contains(date),
            is_selection_start: ctx.selection.is_start(date),
            matches_rokuyo_filter: ctx.rokuyo_filter == Some(label),
        }));
    }
    cells.resize(GRID_CELLS, MonthCell::Blank);

    Ok(MonthGrid { year, month, cells })
}
