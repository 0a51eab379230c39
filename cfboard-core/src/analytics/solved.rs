//! Solved-problem deduplication and per-contest attempt accounting.

use crate::types::{ProblemKey, Submission};
use std::collections::{HashMap, HashSet};

/// Deduplicated index of a student's solved problems.
///
/// Built from submissions in input order: the first accepted submission for
/// a key fixes that key's rating (a missing rating records as 0), and later
/// accepted submissions for the same key are ignored. This freezes the
/// historical record rather than averaging or overwriting: a problem whose
/// rating the judge later revised keeps the rating it had when first solved.
#[derive(Debug, Clone, Default)]
pub struct SolvedProblemIndex {
    ratings: HashMap<ProblemKey, u32>,
}

impl SolvedProblemIndex {
    /// Build the index from submissions in the order given.
    pub fn build<'a>(submissions: impl IntoIterator<Item = &'a Submission>) -> Self {
        let mut ratings: HashMap<ProblemKey, u32> = HashMap::new();

        for sub in submissions {
            if !sub.verdict.is_accepted() {
                continue;
            }
            ratings
                .entry(sub.problem_key())
                .or_insert_with(|| sub.problem_rating.unwrap_or(0));
        }

        Self { ratings }
    }

    /// Number of distinct solved problems.
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Recorded rating for a solved problem, if it was solved.
    pub fn rating_of(&self, key: &ProblemKey) -> Option<u32> {
        self.ratings.get(key).copied()
    }

    /// Ratings of all solved problems, in no particular order.
    pub fn ratings(&self) -> impl Iterator<Item = u32> + '_ {
        self.ratings.values().copied()
    }

    /// Highest rating among solved problems, `None` when nothing is solved.
    pub fn max_rating(&self) -> Option<u32> {
        self.ratings.values().max().copied()
    }

    /// Rounded arithmetic mean of solved-problem ratings, `None` when
    /// nothing is solved.
    pub fn average_rating(&self) -> Option<u32> {
        if self.ratings.is_empty() {
            return None;
        }

        let sum: u64 = self.ratings.values().map(|&r| r as u64).sum();
        Some((sum as f64 / self.ratings.len() as f64).round() as u32)
    }

    /// Solved problems per day over a window of `window_days`.
    ///
    /// Divides by the window length, not by elapsed days of actual activity,
    /// so short windows with sparse data bias toward zero. Downstream views
    /// depend on this exact divisor.
    pub fn average_per_day(&self, window_days: i64) -> Option<f64> {
        if self.ratings.is_empty() || window_days <= 0 {
            return None;
        }
        Some(self.ratings.len() as f64 / window_days as f64)
    }
}

/// Count of problems attempted but never solved within one contest.
///
/// "Attempted" is any submission in the contest regardless of verdict;
/// a problem with at least one accepted submission is never unsolved, no
/// matter how many failed attempts preceded the success. This operates over
/// the full submission history supplied to it; unsolved-count is a property
/// of the contest, independent of any analytics window.
pub fn unsolved_count(submissions: &[Submission], contest_id: u64) -> usize {
    let mut attempted: HashSet<&str> = HashSet::new();
    let mut solved: HashSet<&str> = HashSet::new();

    for sub in submissions.iter().filter(|s| s.contest_id == contest_id) {
        attempted.insert(sub.problem_index.as_str());
        if sub.verdict.is_accepted() {
            solved.insert(sub.problem_index.as_str());
        }
    }

    attempted.difference(&solved).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn submission(
        contest_id: u64,
        index: &str,
        verdict: Verdict,
        rating: Option<u32>,
        secs: i64,
    ) -> Submission {
        Submission {
            contest_id,
            problem_index: index.to_string(),
            verdict,
            submitted_at: at(secs),
            problem_rating: rating,
        }
    }

    #[test]
    fn test_first_accepted_submission_wins() {
        // Re-solving the same problem with a revised rating must not touch
        // the recorded value, and a failed attempt never counts as solved.
        let subs = vec![
            submission(1, "A", Verdict::Ok, Some(800), 100),
            submission(1, "A", Verdict::Ok, Some(1200), 200),
            submission(1, "B", Verdict::WrongAnswer, None, 150),
        ];

        let index = SolvedProblemIndex::build(&subs);
        assert_eq!(index.len(), 1);
        assert_eq!(index.rating_of(&ProblemKey::new(1, "A")), Some(800));
        assert_eq!(index.rating_of(&ProblemKey::new(1, "B")), None);

        assert_eq!(unsolved_count(&subs, 1), 1);
    }

    #[test]
    fn test_size_grows_only_for_new_keys() {
        let mut subs = vec![submission(1, "A", Verdict::Ok, Some(800), 1)];
        let one = SolvedProblemIndex::build(&subs).len();

        subs.push(submission(1, "A", Verdict::Ok, Some(900), 2));
        let still_one = SolvedProblemIndex::build(&subs).len();

        subs.push(submission(2, "A", Verdict::Ok, Some(1000), 3));
        let two = SolvedProblemIndex::build(&subs).len();

        assert_eq!(one, 1);
        assert_eq!(still_one, 1);
        assert_eq!(two, 2);
    }

    #[test]
    fn test_missing_rating_records_as_zero() {
        let subs = vec![submission(5, "C", Verdict::Ok, None, 1)];
        let index = SolvedProblemIndex::build(&subs);
        assert_eq!(index.rating_of(&ProblemKey::new(5, "C")), Some(0));
    }

    #[test]
    fn test_aggregates() {
        let subs = vec![
            submission(1, "A", Verdict::Ok, Some(800), 1),
            submission(1, "B", Verdict::Ok, Some(1100), 2),
            submission(2, "A", Verdict::Ok, Some(950), 3),
        ];
        let index = SolvedProblemIndex::build(&subs);

        assert_eq!(index.max_rating(), Some(1100));
        // (800 + 1100 + 950) / 3 = 950
        assert_eq!(index.average_rating(), Some(950));
        assert_eq!(index.average_per_day(30), Some(0.1));
    }

    #[test]
    fn test_empty_index_yields_sentinels() {
        let index = SolvedProblemIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.max_rating(), None);
        assert_eq!(index.average_rating(), None);
        assert_eq!(index.average_per_day(30), None);
    }

    #[test]
    fn test_unsolved_never_exceeds_attempted() {
        let subs = vec![
            submission(7, "A", Verdict::WrongAnswer, None, 1),
            submission(7, "A", Verdict::TimeLimitExceeded, None, 2),
            submission(7, "B", Verdict::WrongAnswer, None, 3),
            submission(7, "B", Verdict::Ok, Some(1400), 4),
            submission(8, "A", Verdict::WrongAnswer, None, 5),
        ];

        // Contest 7: attempted {A, B}, solved {B} -> 1 unsolved
        assert_eq!(unsolved_count(&subs, 7), 1);
        // Other-contest submissions never leak in
        assert_eq!(unsolved_count(&subs, 8), 1);
        assert_eq!(unsolved_count(&subs, 9), 0);
    }

    #[test]
    fn test_unsolved_zero_when_everything_solved() {
        let subs = vec![
            submission(3, "A", Verdict::WrongAnswer, None, 1),
            submission(3, "A", Verdict::Ok, Some(900), 2),
            submission(3, "B", Verdict::Ok, Some(1000), 3),
        ];
        assert_eq!(unsolved_count(&subs, 3), 0);
    }
}
