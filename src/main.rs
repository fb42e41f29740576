mod calc;
mod cmd;
mod data;
mod i18n;
mod ui;

use calc::pricing::Rounding;
use calc::Rokuyo;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use i18n::Locale;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "koyomi", about = "Japanese calendar with holidays, rokuyo and business days")]
struct Cli {
    /// Path to the data directory containing config and data files (default: ./config)
    #[arg(long, global = true, default_value = "./config")]
    data_dir: PathBuf,

    /// Display language, overriding config.yaml
    #[arg(long, global = true, value_enum)]
    locale: Option<Locale>,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write default config and the bundled holiday table
    Init,
    /// List national holidays
    Holidays {
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Print one month as a grid
    Month {
        year: i32,
        /// 1-12
        month: u32,
        /// Highlight days with this rokuyo label
        #[arg(short, long, value_enum)]
        rokuyo: Option<Rokuyo>,
    },
    /// Count business days in an inclusive date range
    BusinessDays { start: NaiveDate, end: NaiveDate },
    /// Show the rokuyo label of a date
    Rokuyo { date: NaiveDate },
    /// Number of days between two dates
    DateDiff { start: NaiveDate, end: NaiveDate },
    /// Age, days lived and days until the next birthday
    Age {
        birthdate: NaiveDate,
        /// Reference date (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Consumption tax in both directions
    Tax {
        /// Amount in yen; `,` separators are accepted
        amount: String,
        /// Tax rate in percent
        #[arg(short, long, default_value_t = 10.0)]
        rate: f64,
        #[arg(long, value_enum, default_value_t = Rounding::Round)]
        rounding: Rounding,
    },
    /// Discounted price
    Discount {
        price: String,
        /// Discount rate in percent
        #[arg(short, long, default_value_t = 20.0)]
        rate: f64,
    },
    /// Evaluate expressions left to right, showing each step
    Calc {
        #[arg(required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,
        /// Delete history entry ID before listing (repeatable)
        #[arg(long = "drop", value_name = "ID")]
        drop: Vec<u64>,
        /// Discard the history instead of listing it
        #[arg(long)]
        clear_history: bool,
    },
    /// Convert CSV to a JSON array of objects
    Csv2json {
        /// CSV file, or `-` for standard input
        input: PathBuf,
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
        /// Treat the first row as data and name columns column1..N
        #[arg(long)]
        no_header: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // future directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        tracing::info!(dir = %data_dir.display(), "data directory is missing or empty, running init");
        cmd::init::run()?;
    }

    let locale = match cli.locale {
        Some(l) => l,
        None => data::AppSettings::load()?.locale,
    };

    match cli.command {
        None => cmd::root::run(cli.locale),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Holidays { year }) => cmd::holidays::run(year, locale),
        Some(Commands::Month { year, month, rokuyo }) => cmd::month::run(year, month, rokuyo, locale),
        Some(Commands::BusinessDays { start, end }) => cmd::business_days::run(start, end, locale),
        Some(Commands::Rokuyo { date }) => cmd::rokuyo::run(date, locale),
        Some(Commands::DateDiff { start, end }) => cmd::date_diff::run(start, end, locale),
        Some(Commands::Age { birthdate, today }) => cmd::age::run(birthdate, today, locale),
        Some(Commands::Tax { amount, rate, rounding }) => cmd::tax::run(&amount, rate, rounding, locale),
        Some(Commands::Discount { price, rate }) => cmd::tax::run_discount(&price, rate, locale),
        Some(Commands::Calc {
            expressions,
            drop,
            clear_history,
        }) => cmd::calc::run(
            &expressions,
            &cmd::calc::HistoryEdits {
                drop,
                clear: clear_history,
            },
        ),
        Some(Commands::Csv2json {
            input,
            delimiter,
            no_header,
        }) => cmd::csv2json::run(&input, delimiter, !no_header),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_needs_init_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does_not_exist");
        assert!(dir_needs_init(&missing));
    }

    #[test]
    fn test_dir_needs_init_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_nonempty_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file.txt"), "data").unwrap();
        assert!(!dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_dates_and_kanji_rokuyo() {
        let cli = Cli::try_parse_from(["koyomi", "month", "2026", "5", "--rokuyo", "大安"]).unwrap();
        match cli.command {
            Some(Commands::Month { year, month, rokuyo }) => {
                assert_eq!((year, month), (2026, 5));
                assert_eq!(rokuyo, Some(Rokuyo::Taian));
            }
            _ => panic!("expected month command"),
        }

        let cli = Cli::try_parse_from(["koyomi", "--locale", "en", "business-days", "2026-05-01", "2026-05-10"])
            .unwrap();
        assert_eq!(cli.locale, Some(Locale::En));
        assert!(matches!(cli.command, Some(Commands::BusinessDays { .. })));
        assert!(Cli::try_parse_from(["koyomi", "rokuyo", "2026-13-01"]).is_err());
    }

    #[test]
    fn test_cli_verbose_counts() {
        let cli = Cli::try_parse_from(["koyomi", "-vv", "holidays"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_some());
    }

    #[test]
    fn test_cli_calc_history_flags() {
        let cli = Cli::try_parse_from(["koyomi", "calc", "--drop", "1", "--drop", "3", "1+1", "-5+3", "2*3"])
            .unwrap();
        match cli.command {
            Some(Commands::Calc {
                expressions,
                drop,
                clear_history,
            }) => {
                assert_eq!(expressions, vec!["1+1", "-5+3", "2*3"]);
                assert_eq!(drop, vec![1, 3]);
                assert!(!clear_history);
            }
            _ => panic!("expected calc command"),
        }
    }

    #[test]
    fn test_cli_csv2json_flags() {
        let cli = Cli::try_parse_from(["koyomi", "csv2json", "-", "--no-header", "-d", ";"]).unwrap();
        match cli.command {
            Some(Commands::Csv2json {
                input,
                delimiter,
                no_header,
            }) => {
                assert_eq!(input, PathBuf::from("-"));
                assert_eq!(delimiter, ';');
                assert!(no_header);
            }
            _ => panic!("expected csv2json command"),
        }
    }
}
