//! Full-year activity heatmap.

use crate::types::Submission;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// Number of calendar days the heatmap always spans.
pub const HEATMAP_SPAN_DAYS: u64 = 365;

/// Severity band for a day's activity count.
///
/// The cut points are part of the contract; styling and tests downstream
/// depend on exactly these: 0 none, 1 low, 2-4 medium, 5-9 high, 10+ very
/// high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl HeatLevel {
    /// Band for a raw submission count.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => HeatLevel::None,
            1 => HeatLevel::Low,
            2..=4 => HeatLevel::Medium,
            5..=9 => HeatLevel::High,
            _ => HeatLevel::VeryHigh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeatLevel::None => "none",
            HeatLevel::Low => "low",
            HeatLevel::Medium => "medium",
            HeatLevel::High => "high",
            HeatLevel::VeryHigh => "very_high",
        }
    }
}

/// Activity count for one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapDay {
    /// Calendar day, no time component
    pub date: NaiveDate,
    /// Raw submission events on that day
    pub count: usize,
}

impl HeatmapDay {
    /// Severity band for this day.
    pub fn level(&self) -> HeatLevel {
        HeatLevel::from_count(self.count)
    }
}

/// Build the fixed 365-day activity grid ending at `today`.
///
/// Counts raw submission events per calendar day: resubmissions of the
/// same problem count individually, since this measures activity rather
/// than distinct solves. Every day in `[today - 364, today]` gets an entry,
/// zero-count days included, so the grid shape is stable whatever the
/// input. Submissions outside the span are ignored. The analytics time
/// window never applies here: the heatmap always covers a full year.
///
/// Day grouping uses the UTC calendar date of each timestamp; `today` must
/// be expressed in the same convention.
pub fn heatmap(submissions: &[Submission], today: NaiveDate) -> Vec<HeatmapDay> {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for sub in submissions {
        *counts.entry(sub.submitted_at.date_naive()).or_insert(0) += 1;
    }

    let start = today - Days::new(HEATMAP_SPAN_DAYS - 1);
    start
        .iter_days()
        .take(HEATMAP_SPAN_DAYS as usize)
        .map(|date| HeatmapDay {
            date,
            count: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}
