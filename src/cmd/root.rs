use crate::data::{AppSettings, Persistable, Session};
use crate::i18n::Locale;
use crate::ui::calendar_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;

pub fn run(locale: Option<Locale>) -> Result<()> {
    let settings = AppSettings::load()?;
    let holidays = super::load_holiday_table()?;
    let session = Session::load()?;
    let locale = locale.unwrap_or(settings.locale);
    tracing::info!(
        version = holidays.version(),
        entries = holidays.len(),
        ?locale,
        "starting calendar view"
    );

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let today = Local::now().date_naive();
    let mut app = App::new(&holidays, settings, locale, &session, today);

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    app.session().save()?;

    result
}
