//! cfboard - render a student's judge analytics in the terminal
//!
//! Loads a snapshot JSON produced by the data-fetch collaborator and prints
//! the profile views: contest history, solving statistics, the activity
//! heatmap, and the sync status.
//!
//! Uses XDG Base Directory specification for file locations:
//! - Logs: $XDG_STATE_HOME/cfboard/cfboard.log (~/.local/state/cfboard/cfboard.log)
//! - Config: $XDG_CONFIG_HOME/cfboard/config.toml (~/.config/cfboard/config.toml)

use anyhow::{Context, Result};
use cfboard_core::analytics::{
    generate_profile, ContestHistoryView, HeatLevel, HeatmapView, ProfileAnalytics,
    ProfileOptions, SolvingStatsView,
};
use cfboard_core::{snapshot, Config, ContestWindow, StudentSnapshot, SubmissionWindow};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cfboard")]
#[command(about = "Render a student's judge analytics as text")]
#[command(version)]
struct Args {
    /// Path to the student snapshot JSON
    snapshot: PathBuf,

    /// Submission window in days (7, 30, 90, or 365)
    #[arg(long)]
    submission_window: Option<SubmissionWindow>,

    /// Contest window in days (30, 90, or 365)
    #[arg(long)]
    contest_window: Option<ContestWindow>,

    /// Emit the profile as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Skip the heatmap grid
    #[arg(long)]
    no_heatmap: bool,

    /// Verbose output (show records skipped during load)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard =
        cfboard_core::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!(snapshot = %args.snapshot.display(), "cfboard starting");

    let (student, report) = snapshot::load_snapshot(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;

    if args.verbose {
        for warning in &report.warnings {
            eprintln!("warning: {}", warning);
        }
    }
    if report.records_skipped > 0 {
        eprintln!(
            "Skipped {} malformed record(s); run with --verbose for details",
            report.records_skipped
        );
    }

    let options = ProfileOptions {
        contest_window: args
            .contest_window
            .unwrap_or(config.analytics.contest_window),
        submission_window: args
            .submission_window
            .unwrap_or(config.analytics.submission_window),
        sync_cooldown: config.sync.cooldown(),
        heatmap_end: None,
    };

    let profile = generate_profile(
        &student.rating_history,
        &student.submissions,
        student.last_synced_at,
        Utc::now(),
        &options,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    print_summary(&student, &profile);
    print_contest_history(&profile.contest_history);
    print_solving_stats(&profile.solving);
    if !args.no_heatmap {
        print_heatmap(&profile.heatmap);
    }

    Ok(())
}

fn print_summary(student: &StudentSnapshot, profile: &ProfileAnalytics) {
    match &student.info {
        Some(info) => {
            println!("@{}", info.handle);
            println!(
                "  Rating: {} (max {})",
                info.rating.map_or_else(|| "N/A".to_string(), |r| r.to_string()),
                info.max_rating
                    .map_or_else(|| "N/A".to_string(), |r| r.to_string()),
            );
            println!(
                "  Rank: {} (max {})",
                info.rank.as_deref().unwrap_or("N/A"),
                info.max_rank.as_deref().unwrap_or("N/A"),
            );
        }
        None => println!("(no judge profile info in snapshot)"),
    }

    let gate = if profile.sync.sync_allowed {
        "resync available"
    } else {
        "resync on cooldown"
    };
    println!(
        "  Last synced: {} ({})",
        profile.sync.last_synced_display, gate
    );
    println!();
}

fn print_contest_history(view: &ContestHistoryView) {
    println!("Contest History (last {} days)", view.window);

    if view.rows.is_empty() {
        println!("  No contests found in selected range");
        println!();
        return;
    }

    println!(
        "  {:<32} {:<12} {:>7} {:>6} {:>9}",
        "Contest", "Date", "Change", "Rank", "Unsolved"
    );
    for row in &view.rows {
        println!(
            "  {:<32} {:<12} {:>7} {:>6} {:>9}",
            row.contest_name,
            row.date_display(),
            row.delta_display(),
            row.rank,
            row.unsolved_count
        );
    }
    println!();
}

fn print_solving_stats(view: &SolvingStatsView) {
    println!("Problem Solving (last {} days)", view.window);
    println!("  Total solved:     {}", view.total_solved);
    println!("  Most difficult:   {}", view.most_difficult_display());
    println!("  Average rating:   {}", view.average_rating_display());
    println!("  Average per day:  {}", view.average_per_day_display());

    if view.rating_histogram.is_empty() {
        println!("  No rated problems solved in this range");
    } else {
        println!("  Rating distribution:");
        for bucket in &view.rating_histogram {
            println!(
                "    {:<9} {} {}",
                bucket.label(),
                "#".repeat(bucket.count.min(40)),
                bucket.count
            );
        }
    }
    println!();
}

/// Render the year grid the way the dashboard does: seven rows, one column
/// per week, oldest day in the top-left.
fn print_heatmap(view: &HeatmapView) {
    println!(
        "Submission Heatmap (last 365 days, {} submissions)",
        view.total_submissions()
    );

    let columns = (view.days.len() + 6) / 7;
    for row in 0..7 {
        let mut line = String::with_capacity(columns + 2);
        line.push_str("  ");
        for col in 0..columns {
            let idx = col * 7 + row;
            match view.days.get(idx) {
                Some(day) => line.push(heat_glyph(day.level())),
                None => line.push(' '),
            }
        }
        println!("{}", line);
    }
}

fn heat_glyph(level: HeatLevel) -> char {
    match level {
        HeatLevel::None => '\u{b7}',      // ·
        HeatLevel::Low => '\u{2591}',     // ░
        HeatLevel::Medium => '\u{2592}',  // ▒
        HeatLevel::High => '\u{2593}',    // ▓
        HeatLevel::VeryHigh => '\u{2588}', // █
    }
}
