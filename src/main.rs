use clap::{Parser, Subcommand};
use prayer_timetable::cli;
use prayer_timetable::error::TimetableResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "timetable")]
#[command(about = "Convert spreadsheet prayer timetables into date-indexed 24-hour JSON")]
#[command(long_about = "Timetable - spreadsheet prayer timetables to JSON

Reads the first sheet of an .xlsx/.xls/.ods file, skips title and label rows,
normalizes every prayer time to 24-hour HH:MM and keys each row by date.

COMMANDS:
  convert   - Convert a timetable spreadsheet to JSON
  inspect   - Show where the data starts and how the first row is read

COLUMN LAYOUT (left to right):
  fajr start, fajr jamat, sunrise, dhuhr start, dhuhr jamat,
  asr start, asr jamat, maghrib, isha start, isha jamat

EXAMPLES:
  timetable convert ramadan.xlsx --start-date 2024-03-11
  timetable convert ramadan.xlsx -d 2024-03-11 -o timetable.json
  timetable inspect ramadan.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert a timetable spreadsheet to JSON.

Each data row becomes one day, starting at --start-date and advancing one
calendar day per row. Blank rows are skipped.

TIME FORMATS:
  Spreadsheet time values    0.25      → 06:00
  12-hour text               1:30 PM   → 13:30
  Bare text                  1:30      → 13:30 for dhuhr, 01:30 for fajr
  Dot / space separated      1.30, 1 30

AM/PM INFERENCE (bare times):
  fajr, sunrise              unchanged
  dhuhr                      1-10 → afternoon, 11 and 12 unchanged
  asr, maghrib, isha         1-11 → afternoon, 12 unchanged

OUTPUT:
  One line per date by default; --compact for a single line.
  Without --output the JSON is printed to stdout.")]
    /// Convert a timetable spreadsheet to JSON
    Convert {
        /// Path to spreadsheet (.xlsx, .xlsm, .xlsb, .xls, .ods)
        file: PathBuf,

        /// Date of the first data row (YYYY-MM-DD)
        #[arg(short = 'd', long, env = "TIMETABLE_START_DATE")]
        start_date: String,

        /// Output JSON file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show detected header rows and the first normalized data row
    Inspect {
        /// Path to spreadsheet
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    if verbose || std::env::var_os("RUST_LOG").is_some() {
        let default_filter = if verbose { "prayer_timetable=debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .init();
    }
}

fn main() -> TimetableResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            file,
            start_date,
            output,
            compact,
            verbose,
        } => {
            init_logging(verbose);
            cli::convert(file, start_date, output, compact, verbose)
        }

        Commands::Inspect { file } => {
            init_logging(false);
            cli::inspect(file)
        }
    }
}
