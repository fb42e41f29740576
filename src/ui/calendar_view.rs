use crate::calc::date_math::with_year_clamped;
use crate::calc::{
    count_business_days, render_month, rokuyo_of, DayCell, DayTone, GridContext, MonthCell, MonthGrid,
    Rokuyo, Selection,
};
use crate::data::{AppSettings, HolidayTable, Session};
use crate::i18n::{center, Locale, Text};
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

// Cell backgrounds
const RANGE_BG: Color = Color::Indexed(153); // light blue
const FILTER_BG: Color = Color::Indexed(229); // pale yellow

const MONTH_WIDTH: u16 = 22;
const MONTH_HEIGHT: u16 = 9;

#[derive(Debug, PartialEq)]
enum Mode {
    Normal,
    YearPicker,
}

pub struct App<'a> {
    holidays: &'a HolidayTable,
    settings: AppSettings,
    locale: Locale,
    today: NaiveDate,
    year: i32,
    /// Keyboard focus; always inside `year`.
    cursor: NaiveDate,
    selection: Selection,
    rokuyo_filter: Option<Rokuyo>,
    mode: Mode,
    year_options: Vec<i32>,
    year_state: ListState,
}

impl<'a> App<'a> {
    pub fn new(
        holidays: &'a HolidayTable,
        settings: AppSettings,
        locale: Locale,
        session: &Session,
        today: NaiveDate,
    ) -> Self {
        let year = session.year.unwrap_or(today.year());
        let cursor = if year == today.year() {
            today
        } else {
            with_year_clamped(today, year)
        };
        App {
            holidays,
            settings,
            locale,
            today,
            year,
            cursor,
            selection: Selection::Empty,
            rokuyo_filter: session.rokuyo_filter,
            mode: Mode::Normal,
            year_options: Vec::new(),
            year_state: ListState::default(),
        }
    }

    /// View state worth restoring on the next launch.
    pub fn session(&self) -> Session {
        Session {
            year: Some(self.year),
            rokuyo_filter: self.rokuyo_filter,
        }
    }

    fn set_year(&mut self, year: i32) {
        self.year = year;
        self.cursor = with_year_clamped(self.cursor, year);
        tracing::debug!(year, covered = self.holidays.covers_year(year), "view year changed");
    }

    fn move_cursor(&mut self, days: i64) {
        if let Some(next) = self.cursor.checked_add_signed(Duration::days(days)) {
            self.cursor = next;
            self.year = next.year();
        }
    }

    fn click(&mut self) {
        self.selection = self.selection.click(self.cursor);
        if let Selection::Complete(range) = self.selection {
            tracing::debug!(start = %range.start(), end = %range.end(), "range selected");
        }
    }

    fn open_year_picker(&mut self) {
        self.year_options = self.settings.selectable_years(self.today.year());
        let pos = self
            .year_options
            .iter()
            .position(|&y| y == self.year)
            .unwrap_or(0);
        self.year_state.select(Some(pos));
        self.mode = Mode::YearPicker;
    }

    /// Returns true when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.mode {
            Mode::YearPicker => {
                match code {
                    KeyCode::Up | KeyCode::Char('k') => self.year_state.select_previous(),
                    KeyCode::Down | KeyCode::Char('j') => {
                        let last = self.year_options.len().saturating_sub(1);
                        let next = self.year_state.selected().map_or(0, |i| (i + 1).min(last));
                        self.year_state.select(Some(next));
                    }
                    KeyCode::Enter => {
                        let picked = self
                            .year_state
                            .selected()
                            .and_then(|i| self.year_options.get(i).copied());
                        if let Some(year) = picked {
                            self.set_year(year);
                        }
                        self.mode = Mode::Normal;
                    }
                    KeyCode::Esc | KeyCode::Char('y') => self.mode = Mode::Normal,
                    _ => {}
                }
                false
            }

            Mode::Normal => {
                match code {
                    KeyCode::Char('q') => return true,
                    KeyCode::Esc => self.selection = self.selection.close(),
                    KeyCode::Enter | KeyCode::Char(' ') => self.click(),
                    KeyCode::Left => self.move_cursor(-1),
                    KeyCode::Right => self.move_cursor(1),
                    KeyCode::Up => self.move_cursor(-7),
                    KeyCode::Down => self.move_cursor(7),
                    KeyCode::Char('n') => self.set_year(self.year + 1),
                    KeyCode::Char('p') => self.set_year(self.year - 1),
                    KeyCode::Char('t') => {
                        self.year = self.today.year();
                        self.cursor = self.today;
                    }
                    KeyCode::Char('r') => self.rokuyo_filter = Rokuyo::cycle(self.rokuyo_filter),
                    KeyCode::Char('c') => self.rokuyo_filter = None,
                    KeyCode::Char('y') => self.open_year_picker(),
                    KeyCode::Char('l') => self.locale = self.locale.toggle(),
                    _ => {}
                }
                false
            }
        }
    }

    /// The twelve months of the view year.
    fn grids(&self) -> Vec<MonthGrid> {
        let ctx = GridContext {
            holidays: self.holidays,
            selection: &self.selection,
            rokuyo_filter: self.rokuyo_filter,
            today: self.today,
        };
        (1..=12)
            .filter_map(|month| render_month(self.year, month, ctx).ok())
            .collect()
    }

    /// Body of the business-day popup, present only for a completed range.
    fn popup_lines(&self) -> Option<Vec<String>> {
        let range = self.selection.range()?;
        let count = count_business_days(range, self.holidays);
        let loc = self.locale;
        Some(vec![
            format!(
                "{}: {} - {}",
                loc.text(Text::DateRange),
                loc.long_date(range.start()),
                loc.long_date(range.end())
            ),
            format!("({} {})", range.len_days(), loc.text(Text::Days)),
            String::new(),
            format!("{}: {} {}", loc.text(Text::BusinessDaysTitle), count, loc.text(Text::Days)),
            String::new(),
            loc.text(Text::BusinessDaysNote).to_string(),
        ])
    }

    /// One-line description of the focused day.
    fn cursor_details(&self) -> String {
        let loc = self.locale;
        let mut line = format!(
            "{}  {}",
            loc.long_date(self.cursor),
            rokuyo_of(self.cursor).label(loc)
        );
        if let Some(h) = self.holidays.get(self.cursor) {
            line.push_str(&format!("  {}", h.display_name(loc)));
        }
        match self.selection {
            Selection::StartOnly(start) => {
                line.push_str(&format!("  [{}: {}]", loc.text(Text::StartDate), loc.long_date(start)))
            }
            Selection::Complete(range) => line.push_str(&format!(
                "  [{}: {} - {}]",
                loc.text(Text::Selected),
                loc.long_date(range.start()),
                loc.long_date(range.end())
            )),
            Selection::Empty => {}
        }
        line
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                // year title + filter
                Constraint::Length(MONTH_HEIGHT * 4), // 4 x 3 months
                Constraint::Length(1),                // cursor details
                Constraint::Min(2),                   // help
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_year(f, chunks[1]);
        f.render_widget(Paragraph::new(self.cursor_details()), chunks[2]);
        self.render_help(f, chunks[3]);

        if self.selection.popup_visible() {
            self.render_popup(f);
        }
        if self.mode == Mode::YearPicker {
            self.render_year_picker(f);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let loc = self.locale;
        let filter = match self.rokuyo_filter {
            Some(r) => Span::styled(
                format!("{}: {}", loc.text(Text::Filter), r.label(loc)),
                Style::default().fg(Color::Black).bg(FILTER_BG),
            ),
            None => Span::raw(format!("{}: {}", loc.text(Text::Filter), loc.text(Text::NoFilter))),
        };
        let mut status = vec![filter];
        if !self.holidays.covers_year(self.year) {
            status.push(Span::styled(
                format!("  ({} n/a)", loc.text(Text::Holidays)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let lines = vec![
            Line::from(Span::styled(
                loc.year_title(self.year),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(status),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_year(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(MONTH_HEIGHT); 4])
            .split(area);
        let grids = self.grids();
        for (i, grid) in grids.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(MONTH_WIDTH),
                    Constraint::Length(MONTH_WIDTH),
                    Constraint::Length(MONTH_WIDTH),
                    Constraint::Min(0),
                ])
                .split(rows[i / 3]);
            self.draw_month(f, grid, cols[i % 3]);
        }
    }

    fn draw_month(&self, f: &mut Frame, grid: &MonthGrid, area: Rect) {
        let width = (MONTH_WIDTH - 1) as usize;
        let title = center(&self.locale.month_title(grid.year, grid.month), width);
        let header: Vec<Span> = self
            .locale
            .weekday_headers()
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let style = match i {
                    0 => Style::default().fg(Color::Red),
                    6 => Style::default().fg(Color::Blue),
                    _ => Style::default(),
                };
                Span::styled(format!("{} ", h), style)
            })
            .collect();

        let mut lines = vec![
            Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            Line::from(header),
        ];
        for row in grid.rows() {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|cell| match cell {
                    MonthCell::Blank => vec![Span::raw("   ")],
                    MonthCell::Day(day) => vec![
                        Span::styled(
                            format!("{:2}", day.day()),
                            calendar_day_style(day, day.date == self.cursor),
                        ),
                        Span::raw(" "),
                    ],
                })
                .collect();
            lines.push(Line::from(spans));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help = Line::from(vec![
            Span::styled("arrows", Style::default().fg(Color::Cyan)),
            Span::raw(" move  "),
            Span::styled("enter", Style::default().fg(Color::Cyan)),
            Span::raw(" select  "),
            Span::styled("esc", Style::default().fg(Color::Cyan)),
            Span::raw(" close  "),
            Span::styled("n/p", Style::default().fg(Color::Cyan)),
            Span::raw(" year  "),
            Span::styled("t", Style::default().fg(Color::Cyan)),
            Span::raw(" today  "),
            Span::styled("y", Style::default().fg(Color::Cyan)),
            Span::raw(" pick year  "),
            Span::styled("r/c", Style::default().fg(Color::Cyan)),
            Span::raw(" rokuyo filter  "),
            Span::styled("l", Style::default().fg(Color::Cyan)),
            Span::raw(" language  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]);
        f.render_widget(Paragraph::new(help).style(Style::default().add_modifier(Modifier::DIM)), area);
    }

    fn render_popup(&self, f: &mut Frame) {
        let Some(lines) = self.popup_lines() else {
            return;
        };
        let area = centered_rect(60, 40, f.area());
        f.render_widget(Clear, area);
        let body: Vec<Line> = lines.into_iter().map(Line::from).collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.locale.text(Text::BusinessDaysTitle)))
            .title_bottom(" esc ");
        f.render_widget(Paragraph::new(body).block(block), area);
    }

    fn render_year_picker(&mut self, f: &mut Frame) {
        let area = centered_rect(30, 50, f.area());
        f.render_widget(Clear, area);
        let items: Vec<ListItem> = self
            .year_options
            .iter()
            .map(|&y| ListItem::new(self.locale.year_title(y)))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White));
        f.render_stateful_widget(list, area, &mut self.year_state);
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}

// ── Rendering helpers ─────────────────────────────────────────────────────────

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Determines the ratatui `Style` for a day cell.
///
/// The cursor wins, then the rokuyō filter, the selected range, the pending
/// start date and today. Sundays and holidays are red, Saturdays blue.
pub(crate) fn calendar_day_style(cell: &DayCell, is_cursor: bool) -> Style {
    if is_cursor {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD);
    }

    let mut s = match cell.tone() {
        DayTone::Accent => Style::default().fg(Color::Red),
        DayTone::Saturday => Style::default().fg(Color::Blue),
        DayTone::Default => Style::default(),
    };
    if cell.matches_rokuyo_filter {
        s = s.bg(FILTER_BG).add_modifier(Modifier::BOLD);
    } else if cell.in_selection {
        s = s.bg(RANGE_BG);
    } else if cell.is_selection_start {
        s = s.bg(RANGE_BG).add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    } else if cell.is_today {
        s = s.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    s
}
