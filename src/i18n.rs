use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Display language for labels, month titles and popups.
#[derive(Serialize, Deserialize, clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn toggle(self) -> Locale {
        match self {
            Locale::Ja => Locale::En,
            Locale::En => Locale::Ja,
        }
    }

    pub fn month_title(self, year: i32, month: u32) -> String {
        match self {
            Locale::Ja => format!("{}年{}月", year, month),
            Locale::En => format!("{} {}", month_name(month), year),
        }
    }

    pub fn year_title(self, year: i32) -> String {
        match self {
            Locale::Ja => format!("{}年", year),
            Locale::En => year.to_string(),
        }
    }

    /// Seven two-column weekday headers, Sunday first.
    pub fn weekday_headers(self) -> [&'static str; 7] {
        match self {
            Locale::Ja => ["日", "月", "火", "水", "木", "金", "土"],
            Locale::En => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        }
    }

    pub fn text(self, key: Text) -> &'static str {
        use Text::*;
        match (self, key) {
            (Locale::Ja, BusinessDaysTitle) => "営業日数",
            (Locale::En, BusinessDaysTitle) => "Business days",
            (Locale::Ja, DateRange) => "期間",
            (Locale::En, DateRange) => "Date range",
            (Locale::Ja, Days) => "日",
            (Locale::En, Days) => "days",
            (Locale::Ja, BusinessDaysNote) => "土日・祝日を除く",
            (Locale::En, BusinessDaysNote) => "Excludes weekends and national holidays",
            (Locale::Ja, Holidays) => "祝日",
            (Locale::En, Holidays) => "Holidays",
            (Locale::Ja, Today) => "今日",
            (Locale::En, Today) => "Today",
            (Locale::Ja, Holiday) => "祝日",
            (Locale::En, Holiday) => "Holiday",
            (Locale::Ja, StartDate) => "開始日",
            (Locale::En, StartDate) => "Start date",
            (Locale::Ja, Selected) => "選択範囲",
            (Locale::En, Selected) => "Selected",
            (Locale::Ja, Filter) => "六曜",
            (Locale::En, Filter) => "Rokuyo",
            (Locale::Ja, NoFilter) => "なし",
            (Locale::En, NoFilter) => "none",
        }
    }

    /// Long-form date used in the range popup.
    pub fn long_date(self, date: chrono::NaiveDate) -> String {
        use chrono::Datelike;
        match self {
            Locale::Ja => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
            Locale::En => format!("{} {}, {}", month_name(date.month()), date.day(), date.year()),
        }
    }
}

/// Fixed UI strings with a translation per locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    BusinessDaysTitle,
    DateRange,
    Days,
    BusinessDaysNote,
    Holidays,
    Today,
    Holiday,
    StartDate,
    Selected,
    Filter,
    NoFilter,
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Terminal columns taken by `s`. CJK ideographs and full-width forms take two.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Right-aligns `s` to `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Centers `s` within `width` terminal columns.
pub fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}
