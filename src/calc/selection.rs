use chrono::NaiveDate;

/// Closed date interval, normalized so that `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        DateRange {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days, both endpoints included.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Two-click range selection.
///
/// The state is a plain value: handlers take the current state and return the
/// next one, so whoever owns the view session owns the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    StartOnly(NaiveDate),
    Complete(DateRange),
}

impl Selection {
    pub fn click(self, date: NaiveDate) -> Selection {
        match self {
            Selection::Empty | Selection::Complete(_) => Selection::StartOnly(date),
            Selection::StartOnly(start) => Selection::Complete(DateRange::new(start, date)),
        }
    }

    pub fn close(self) -> Selection {
        Selection::Empty
    }

    pub fn range(&self) -> Option<DateRange> {
        match self {
            Selection::Complete(r) => Some(*r),
            _ => None,
        }
    }

    /// True only for dates inside a completed range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.range().is_some_and(|r| r.contains(date))
    }

    /// True only while the end has not been chosen yet.
    pub fn is_start(&self, date: NaiveDate) -> bool {
        matches!(self, Selection::StartOnly(s) if *s == date)
    }

    pub fn popup_visible(&self) -> bool {
        matches!(self, Selection::Complete(_))
    }
}
