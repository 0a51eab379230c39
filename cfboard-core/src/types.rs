//! Core domain types for cfboard
//!
//! These types normalize the judge's record shapes for a single student.
//! They arrive from the data-fetch collaborator as immutable snapshots;
//! nothing in this crate mutates them after construction.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Contest result** | One entry in a student's rating history |
//! | **Submission** | One attempt at a problem, accepted or not |
//! | **Problem key** | `(contest id, problem index)`, the identity of a problem |
//! | **Verdict** | Judge-reported outcome; `OK` means solved |
//! | **Window** | Trailing number of days an analytics view covers |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Contests
// ============================================

/// One entry in a student's rating history.
///
/// Produced by the judge after a rated contest. `contest_id` is unique per
/// entry within a single feed; ordering by `rating_updated_at` is not
/// guaranteed and must not be assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestResult {
    /// Judge-assigned contest identifier
    pub contest_id: u64,
    /// Human-readable contest name
    pub contest_name: String,
    /// Final rank in the contest
    pub rank: u32,
    /// Rating before the contest
    pub old_rating: i32,
    /// Rating after the contest
    pub new_rating: i32,
    /// When the rating update was published
    pub rating_updated_at: DateTime<Utc>,
}

impl ContestResult {
    /// Rating change for this contest (may be negative).
    pub fn rating_delta(&self) -> i32 {
        self.new_rating - self.old_rating
    }
}

// ============================================
// Submissions
// ============================================

/// Judge-reported outcome of a submission.
///
/// Only `Ok` means solved; every other verdict counts as a failed attempt.
/// Verdict strings not in this list collapse to [`Verdict::Other`] so an
/// unfamiliar judge outcome never breaks a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum Verdict {
    Ok,
    WrongAnswer,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    RuntimeError,
    CompilationError,
    Challenged,
    Skipped,
    Testing,
    Other,
}

impl Verdict {
    /// Whether this verdict means the problem was solved.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    /// Returns the judge's identifier for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Ok => "OK",
            Verdict::WrongAnswer => "WRONG_ANSWER",
            Verdict::TimeLimitExceeded => "TIME_LIMIT_EXCEEDED",
            Verdict::MemoryLimitExceeded => "MEMORY_LIMIT_EXCEEDED",
            Verdict::RuntimeError => "RUNTIME_ERROR",
            Verdict::CompilationError => "COMPILATION_ERROR",
            Verdict::Challenged => "CHALLENGED",
            Verdict::Skipped => "SKIPPED",
            Verdict::Testing => "TESTING",
            Verdict::Other => "OTHER",
        }
    }
}

impl From<String> for Verdict {
    fn from(s: String) -> Self {
        match s.as_str() {
            "OK" => Verdict::Ok,
            "WRONG_ANSWER" => Verdict::WrongAnswer,
            "TIME_LIMIT_EXCEEDED" => Verdict::TimeLimitExceeded,
            "MEMORY_LIMIT_EXCEEDED" => Verdict::MemoryLimitExceeded,
            "RUNTIME_ERROR" => Verdict::RuntimeError,
            "COMPILATION_ERROR" => Verdict::CompilationError,
            "CHALLENGED" => Verdict::Challenged,
            "SKIPPED" => Verdict::Skipped,
            "TESTING" => Verdict::Testing,
            _ => Verdict::Other,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Composite identity of a problem: contest plus index label within it.
///
/// Two submissions with the same key target the same problem, whatever their
/// verdicts or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemKey {
    /// Contest the problem belongs to
    pub contest_id: u64,
    /// Problem label within the contest ("A", "B1", ...)
    pub index: String,
}

impl ProblemKey {
    pub fn new(contest_id: u64, index: impl Into<String>) -> Self {
        Self {
            contest_id,
            index: index.into(),
        }
    }
}

impl std::fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.contest_id, self.index)
    }
}

/// One attempt at a problem.
///
/// Supplied externally in arbitrary order; resubmissions of the same problem
/// appear as separate records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Contest the submission belongs to
    pub contest_id: u64,
    /// Problem label within the contest
    pub problem_index: String,
    /// Judge-reported outcome
    pub verdict: Verdict,
    /// When the submission was made
    pub submitted_at: DateTime<Utc>,
    /// Difficulty rating of the problem, if the judge has assigned one
    pub problem_rating: Option<u32>,
}

impl Submission {
    /// The problem this submission targets.
    pub fn problem_key(&self) -> ProblemKey {
        ProblemKey::new(self.contest_id, self.problem_index.clone())
    }
}

// ============================================
// Judge profile
// ============================================

/// Judge-side profile info for a student, as last synced.
///
/// Rendered in the profile sidebar; absent fields display as fallbacks
/// rather than failing the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeUserInfo {
    /// Judge handle
    pub handle: String,
    /// Current rating
    pub rating: Option<i32>,
    /// Highest rating ever reached
    #[serde(rename = "maxRating")]
    pub max_rating: Option<i32>,
    /// Current rank title ("specialist", "expert", ...)
    pub rank: Option<String>,
    /// Highest rank title ever reached
    #[serde(rename = "maxRank")]
    pub max_rank: Option<String>,
    /// Avatar URL
    pub avatar: Option<String>,
}

// ============================================
// Analytics windows
// ============================================

/// Trailing window for the solving-statistics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum SubmissionWindow {
    /// Last 7 days
    Week,
    /// Last 30 days
    #[default]
    Month,
    /// Last 90 days
    Quarter,
    /// Last 365 days
    Year,
}

impl SubmissionWindow {
    /// Window length in days.
    pub fn days(&self) -> i64 {
        match self {
            SubmissionWindow::Week => 7,
            SubmissionWindow::Month => 30,
            SubmissionWindow::Quarter => 90,
            SubmissionWindow::Year => 365,
        }
    }
}

impl TryFrom<u16> for SubmissionWindow {
    type Error = String;

    fn try_from(days: u16) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(SubmissionWindow::Week),
            30 => Ok(SubmissionWindow::Month),
            90 => Ok(SubmissionWindow::Quarter),
            365 => Ok(SubmissionWindow::Year),
            _ => Err(format!(
                "unsupported submission window: {} (expected 7, 30, 90, or 365)",
                days
            )),
        }
    }
}

impl From<SubmissionWindow> for u16 {
    fn from(window: SubmissionWindow) -> Self {
        window.days() as u16
    }
}

impl std::fmt::Display for SubmissionWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl std::str::FromStr for SubmissionWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: u16 = s
            .parse()
            .map_err(|_| format!("invalid window: {}", s))?;
        SubmissionWindow::try_from(days)
    }
}

/// Trailing window for the contest history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ContestWindow {
    /// Last 30 days
    #[default]
    Month,
    /// Last 90 days
    Quarter,
    /// Last 365 days
    Year,
}

impl ContestWindow {
    /// Window length in days.
    pub fn days(&self) -> i64 {
        match self {
            ContestWindow::Month => 30,
            ContestWindow::Quarter => 90,
            ContestWindow::Year => 365,
        }
    }
}

impl TryFrom<u16> for ContestWindow {
    type Error = String;

    fn try_from(days: u16) -> Result<Self, Self::Error> {
        match days {
            30 => Ok(ContestWindow::Month),
            90 => Ok(ContestWindow::Quarter),
            365 => Ok(ContestWindow::Year),
            _ => Err(format!(
                "unsupported contest window: {} (expected 30, 90, or 365)",
                days
            )),
        }
    }
}

impl From<ContestWindow> for u16 {
    fn from(window: ContestWindow) -> Self {
        window.days() as u16
    }
}

impl std::fmt::Display for ContestWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl std::str::FromStr for ContestWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: u16 = s
            .parse()
            .map_err(|_| format!("invalid window: {}", s))?;
        ContestWindow::try_from(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_string() {
        assert_eq!(Verdict::from("OK".to_string()), Verdict::Ok);
        assert_eq!(
            Verdict::from("WRONG_ANSWER".to_string()),
            Verdict::WrongAnswer
        );
        assert_eq!(
            Verdict::from("SOME_FUTURE_VERDICT".to_string()),
            Verdict::Other
        );
    }

    #[test]
    fn test_verdict_accepted() {
        assert!(Verdict::Ok.is_accepted());
        assert!(!Verdict::WrongAnswer.is_accepted());
        assert!(!Verdict::Other.is_accepted());
    }

    #[test]
    fn test_rating_delta() {
        let contest = ContestResult {
            contest_id: 1,
            contest_name: "Round #1".to_string(),
            rank: 120,
            old_rating: 1500,
            new_rating: 1457,
            rating_updated_at: Utc::now(),
        };
        assert_eq!(contest.rating_delta(), -43);
    }

    #[test]
    fn test_problem_key_display() {
        let key = ProblemKey::new(1728, "B1");
        assert_eq!(key.to_string(), "1728-B1");
    }

    #[test]
    fn test_window_parsing() {
        assert_eq!("7".parse::<SubmissionWindow>(), Ok(SubmissionWindow::Week));
        assert_eq!(
            "365".parse::<SubmissionWindow>(),
            Ok(SubmissionWindow::Year)
        );
        assert!("14".parse::<SubmissionWindow>().is_err());

        assert_eq!("90".parse::<ContestWindow>(), Ok(ContestWindow::Quarter));
        assert!("7".parse::<ContestWindow>().is_err());
    }

    #[test]
    fn test_window_days() {
        assert_eq!(SubmissionWindow::default().days(), 30);
        assert_eq!(ContestWindow::default().days(), 30);
        assert_eq!(ContestWindow::Year.days(), 365);
    }
}
