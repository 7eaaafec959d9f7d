// Data Calendar
// Prints the lane layout of a JSON item list for the configured view

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use data_calendar::models::calendar_item::CalendarItem;
use data_calendar::models::settings::CalendarSettings;
use data_calendar::services::grid::rows_for_view;
use data_calendar::services::layout::{compute_event_layout, overflow_for_row, overflow_label};
use data_calendar::services::settings::SettingsService;
use data_calendar::utils::date::{format_iso_date, parse_iso_date};

/// Print the lane layout of calendar items for one month or week
#[derive(Parser)]
#[command(name = "data-calendar")]
#[command(version)]
#[command(about = "Lay out calendar items on a month or week grid", long_about = None)]
struct Cli {
    /// JSON file holding an array of calendar items
    items: PathBuf,

    /// Any date inside the period to show (defaults to today)
    #[arg(value_parser = parse_iso_date)]
    date: Option<NaiveDate>,

    /// Settings file (defaults to the per-user config path)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn load_settings(config_path: Option<PathBuf>) -> Result<CalendarSettings> {
    match config_path.or_else(SettingsService::default_path) {
        Some(path) => SettingsService::load(&path),
        None => Ok(CalendarSettings::default()),
    }
}

fn load_items(path: &Path) -> Result<Vec<CalendarItem>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read items from {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse items in {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config)?;
    let items = load_items(&cli.items)?;
    let anchor = cli.date.unwrap_or_else(|| Local::now().date_naive());

    log::info!(
        "Laying out {} items for the {} containing {}",
        items.len(),
        settings.default_view.as_str(),
        anchor
    );

    let rows = rows_for_view(settings.default_view, anchor, settings.week_start());
    let layout = compute_event_layout(&items, &rows);

    for row in &layout {
        let (Some(first), Some(last)) = (row.days.first(), row.days.last()) else {
            continue;
        };
        println!(
            "{} .. {}  ({} lanes)",
            format_iso_date(first.date),
            format_iso_date(last.date),
            row.lane_count
        );

        let mut segments: Vec<_> = row.segments.iter().collect();
        segments.sort_by_key(|segment| (segment.lane, segment.start_col));
        for segment in segments {
            let hidden = if segment.lane < settings.max_visible_items { "" } else { " (hidden)" };
            println!(
                "  lane {} cols {}-{} {}{}{} [{}]{}",
                segment.lane,
                segment.start_col,
                segment.end_col(),
                if segment.is_continuation { "<" } else { "" },
                segment.item.label,
                if segment.continues_after { ">" } else { "" },
                segment.item.id,
                hidden
            );
        }

        let overflow: Vec<String> = overflow_for_row(row, settings.max_visible_items)
            .into_iter()
            .map(|hidden| overflow_label(hidden).unwrap_or_else(|| "-".to_string()))
            .collect();
        if overflow.iter().any(|label| label != "-") {
            println!("  more: {}", overflow.join(" "));
        }
    }

    if !settings.legend.is_empty() {
        let legend: Vec<String> = settings
            .legend
            .iter()
            .map(|entry| format!("{} ({})", entry.label, entry.color))
            .collect();
        println!("legend: {}", legend.join(", "));
    }

    Ok(())
}
