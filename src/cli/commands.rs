use crate::core::{build_timetable, parse_start_date, select_data_rows, ConvertOptions};
use crate::error::TimetableResult;
use crate::excel::SheetImporter;
use crate::types::{date_key, DayRecord, PrayerKey, Timetable};
use crate::writer;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the convert command.
///
/// Progress goes to stderr so the JSON can be piped when no output file is
/// given.
pub fn convert(
    input: PathBuf,
    start_date: String,
    output: Option<PathBuf>,
    compact: bool,
    verbose: bool,
) -> TimetableResult<()> {
    eprintln!("{}", "🕌 Timetable - Converting spreadsheet".bold().green());
    eprintln!("   Input:      {}", input.display());
    eprintln!("   Start date: {}\n", start_date);

    let options = ConvertOptions {
        start_date: parse_start_date(&start_date)?,
        compact,
    };

    if verbose {
        eprintln!("{}", "📖 Reading spreadsheet...".cyan());
    }
    let rows = SheetImporter::new(&input).import()?;

    if verbose {
        let data = select_data_rows(&rows);
        eprintln!("   Found {} rows in first sheet", rows.len());
        eprintln!(
            "   Data starts at row {} ({} data rows)\n",
            data.start_index + 1,
            data.rows.len()
        );
    }

    let timetable = build_timetable(&rows, options.start_date)?;

    if verbose {
        print_summary(&timetable);
    }

    match output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(writer::DEFAULT_OUTPUT_NAME)
            } else {
                path
            };
            if verbose {
                eprintln!("{}", "💾 Writing JSON file...".cyan());
            }
            writer::write_timetable(&path, &timetable, options.compact)?;
            eprintln!("{}", "✅ Conversion Complete!".bold().green());
            eprintln!("   {} days written to {}\n", timetable.len(), path.display());
        }
        None => {
            println!("{}", writer::render(&timetable, options.compact)?);
            eprintln!("{}", "✅ Conversion Complete!".bold().green());
            eprintln!("   {} days converted\n", timetable.len());
        }
    }

    Ok(())
}

/// Execute the inspect command: show how the sheet will be read
pub fn inspect(input: PathBuf) -> TimetableResult<()> {
    println!("{}", "🔍 Timetable - Inspecting spreadsheet".bold().green());
    println!("   File: {}\n", input.display());

    let rows = SheetImporter::new(&input).import()?;
    let data = select_data_rows(&rows);

    println!("   Rows in first sheet: {}", rows.len());
    println!(
        "   Header rows skipped: {}",
        data.start_index.min(rows.len())
    );
    println!("   Data rows:           {}\n", data.rows.len());

    match data.rows.first() {
        Some(first) => {
            println!("{}", "📋 First data row:".cyan());
            let raw: Vec<String> = first.iter().map(|c| format!("{:?}", c.to_string())).collect();
            println!("   Raw:        [{}]", raw.join(", "));
            let record = crate::core::map_row(first);
            println!("   Normalized: {}\n", format_record(&record));
        }
        None => {
            println!("{}", "⚠️  No data rows found".yellow());
        }
    }

    Ok(())
}

fn print_summary(timetable: &Timetable) {
    let (Some(first), Some(last)) = (timetable.first_date(), timetable.last_date()) else {
        return;
    };
    eprintln!("{}", "📊 Timetable".cyan());
    eprintln!(
        "   {} days: {} → {}",
        timetable.len(),
        date_key(first).bright_blue(),
        date_key(last).bright_blue()
    );

    let blanks = count_blank_slots(timetable);
    if blanks > 0 {
        eprintln!(
            "   {}",
            format!("⚠️  {} time slots were empty or unreadable", blanks).yellow()
        );
    }
    eprintln!();
}

/// Number of empty time fields across the whole timetable
fn count_blank_slots(timetable: &Timetable) -> usize {
    timetable
        .iter()
        .map(|entry| {
            PrayerKey::ALL
                .iter()
                .map(|&prayer| {
                    let start = usize::from(entry.record.start(prayer).is_empty());
                    let jamat = entry
                        .record
                        .jamat(prayer)
                        .map_or(0, |t| usize::from(t.is_empty()));
                    start + jamat
                })
                .sum::<usize>()
        })
        .sum()
}

/// "fajr 05:00/05:20  sunrise 06:45 ..." for terminal display
fn format_record(record: &DayRecord) -> String {
    PrayerKey::ALL
        .iter()
        .map(|&prayer| {
            let start = display_time(record.start(prayer).as_str());
            match record.jamat(prayer) {
                Some(jamat) => format!("{} {}/{}", prayer, start, display_time(jamat.as_str())),
                None => format!("{} {}", prayer, start),
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn display_time(time: &str) -> &str {
    if time.is_empty() {
        "--:--"
    } else {
        time
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
