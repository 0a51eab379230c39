//! Profile analytics facade.
//!
//! Assembles the derived views a student profile page displays from one
//! snapshot of raw judge records:
//!
//! - contest history: time-windowed contest results with rating delta and
//!   unsolved-problem counts
//! - solving statistics: solved count, average/max rating, per-day rate,
//!   and the difficulty histogram over the windowed submissions
//! - activity heatmap: the full-year grid, independent of any window
//! - sync status: the freshness gate result and last-synced display text
//!
//! Every view is computed against the same `now`, so the contest table
//! never references a different clock than the heatmap beside it.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::analytics::heatmap::{heatmap, HeatmapDay};
use crate::analytics::histogram::{histogram, RatingBucket};
use crate::analytics::solved::{unsolved_count, SolvedProblemIndex};
use crate::analytics::window::filter_window;
use crate::format;
use crate::sync::{default_cooldown, SyncFreshness};
use crate::types::{ContestResult, ContestWindow, Submission, SubmissionWindow};

/// Filter parameters for one analytics pass.
#[derive(Debug, Clone)]
pub struct ProfileOptions {
    /// Trailing window for the contest history view
    pub contest_window: ContestWindow,
    /// Trailing window for the solving-statistics view
    pub submission_window: SubmissionWindow,
    /// Minimum age of the last sync before a resync is permitted
    pub sync_cooldown: Duration,
    /// Final day of the heatmap grid; defaults to the calendar day of the
    /// pass's `now`
    pub heatmap_end: Option<NaiveDate>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            contest_window: ContestWindow::default(),
            submission_window: SubmissionWindow::default(),
            sync_cooldown: default_cooldown(),
            heatmap_end: None,
        }
    }
}

/// One row of the contest history table.
#[derive(Debug, Clone, Serialize)]
pub struct ContestRow {
    pub contest_id: u64,
    pub contest_name: String,
    /// Calendar day the rating update was published
    pub date: NaiveDate,
    pub rank: u32,
    /// Rating after the contest (the trend chart's y value)
    pub new_rating: i32,
    pub rating_delta: i32,
    /// Problems attempted but never solved in this contest, over the full
    /// submission history
    pub unsolved_count: usize,
}

impl ContestRow {
    /// Sign-prefixed delta for the table, "+23" or "-15".
    pub fn delta_display(&self) -> String {
        format::signed_delta(self.rating_delta)
    }

    /// Short "MM/DD" label for the trend chart's x-axis.
    pub fn chart_label(&self) -> String {
        self.date.format("%m/%d").to_string()
    }

    /// Full "YYYY-MM-DD" date for the table.
    pub fn date_display(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Rating trend and contest table over the contest window.
#[derive(Debug, Clone, Serialize)]
pub struct ContestHistoryView {
    pub window: ContestWindow,
    /// Windowed contests, input order preserved
    pub rows: Vec<ContestRow>,
}

/// Solving statistics over the submission window.
#[derive(Debug, Clone, Serialize)]
pub struct SolvingStatsView {
    pub window: SubmissionWindow,
    /// Distinct problems solved in the window
    pub total_solved: usize,
    /// Highest solved-problem rating, `None` when nothing is solved
    pub most_difficult_rating: Option<u32>,
    /// Rounded mean solved-problem rating, `None` when nothing is solved
    pub average_rating: Option<u32>,
    /// Solved count divided by the window length in days
    pub average_per_day: Option<f64>,
    /// Difficulty histogram, ascending, empty buckets omitted
    pub rating_histogram: Vec<RatingBucket>,
}

impl SolvingStatsView {
    /// Two-decimal per-day rate, or "N/A" when nothing is solved.
    pub fn average_per_day_display(&self) -> String {
        match self.average_per_day {
            Some(rate) => format!("{:.2}", rate),
            None => "N/A".to_string(),
        }
    }

    pub fn average_rating_display(&self) -> String {
        match self.average_rating {
            Some(rating) => rating.to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn most_difficult_display(&self) -> String {
        match self.most_difficult_rating {
            Some(rating) => rating.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// Full-year activity heatmap, independent of the analytics windows.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapView {
    /// Exactly 365 entries, oldest first, ending at the pass's `today`
    pub days: Vec<HeatmapDay>,
}

impl HeatmapView {
    /// Total submissions that landed inside the year span.
    pub fn total_submissions(&self) -> usize {
        self.days.iter().map(|d| d.count).sum()
    }
}

/// Sync gate result surfaced beside the views.
#[derive(Debug, Clone, Serialize)]
pub struct SyncStatusView {
    pub last_synced_at: Option<DateTime<Utc>>,
    pub freshness: SyncFreshness,
    /// Whether a manual resync may be issued right now
    pub sync_allowed: bool,
    /// Human-readable last-synced instant, e.g. "2m ago" or "Not Synced"
    pub last_synced_display: String,
}

/// All derived views for one student.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileAnalytics {
    pub contest_history: ContestHistoryView,
    pub solving: SolvingStatsView,
    pub heatmap: HeatmapView,
    pub sync: SyncStatusView,
}

/// Compute every profile view for one student.
///
/// `results` and `submissions` must be a single consistent snapshot; the
/// caller copies at the collaborator boundary if records can arrive
/// concurrently. `now` anchors the windows, the heatmap's end date, and
/// the sync gate alike, so the returned views can never disagree about
/// what time it is. Pure: no I/O, no shared state, no failure path for
/// data-shape issues.
pub fn generate_profile(
    results: &[ContestResult],
    submissions: &[Submission],
    last_synced_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    options: &ProfileOptions,
) -> ProfileAnalytics {
    let today = options.heatmap_end.unwrap_or_else(|| now.date_naive());

    tracing::debug!(
        contests = results.len(),
        submissions = submissions.len(),
        contest_window = %options.contest_window,
        submission_window = %options.submission_window,
        "Computing profile analytics"
    );

    // Contest history. Unsolved counts come from the full submission list;
    // only the contest rows themselves are windowed.
    let rows: Vec<ContestRow> = filter_window(results, options.contest_window.days(), now)
        .into_iter()
        .map(|contest| ContestRow {
            contest_id: contest.contest_id,
            contest_name: contest.contest_name.clone(),
            date: contest.rating_updated_at.date_naive(),
            rank: contest.rank,
            new_rating: contest.new_rating,
            rating_delta: contest.rating_delta(),
            unsolved_count: unsolved_count(submissions, contest.contest_id),
        })
        .collect();

    // Solving statistics over the windowed submission subset.
    let windowed = filter_window(submissions, options.submission_window.days(), now);
    let index = SolvedProblemIndex::build(windowed);
    let solving = SolvingStatsView {
        window: options.submission_window,
        total_solved: index.len(),
        most_difficult_rating: index.max_rating(),
        average_rating: index.average_rating(),
        average_per_day: index.average_per_day(options.submission_window.days()),
        rating_histogram: histogram(index.ratings()),
    };

    // Heatmap over ALL submissions, windowing never applies.
    let heatmap_view = HeatmapView {
        days: heatmap(submissions, today),
    };

    let freshness = SyncFreshness::evaluate(last_synced_at, now, options.sync_cooldown);
    let sync = SyncStatusView {
        last_synced_at,
        freshness,
        sync_allowed: freshness == SyncFreshness::Stale,
        last_synced_display: format::relative_time_opt(last_synced_at, now),
    };

    ProfileAnalytics {
        contest_history: ContestHistoryView {
            window: options.contest_window,
            rows,
        },
        solving,
        heatmap: heatmap_view,
        sync,
    }
}
