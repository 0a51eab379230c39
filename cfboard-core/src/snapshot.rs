//! Student snapshot loading.
//!
//! The data-fetch collaborator hands this crate one JSON document per
//! student: judge profile info, rating history, submissions, and the
//! instant of the last successful sync. The record arrays are parsed
//! element by element: a malformed element (missing timestamp, missing
//! problem index, wrong shape) is logged, counted, and skipped so the rest
//! of the batch still loads. Only a document that is not JSON at all, or
//! not an object, fails the load.

use crate::error::{Error, Result};
use crate::types::{ContestResult, JudgeUserInfo, Submission, Verdict};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::path::Path;

/// Everything known about one student's judge activity, as last synced.
#[derive(Debug, Clone)]
pub struct StudentSnapshot {
    /// Judge profile info, if the sync captured it
    pub info: Option<JudgeUserInfo>,
    /// Rating history, in feed order
    pub rating_history: Vec<ContestResult>,
    /// Submissions, in feed order
    pub submissions: Vec<Submission>,
    /// When the snapshot was last successfully synced
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl StudentSnapshot {
    /// Judge handle, if known.
    pub fn handle(&self) -> Option<&str> {
        self.info.as_ref().map(|info| info.handle.as_str())
    }
}

/// Counters from one snapshot load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Contest entries loaded
    pub contests_loaded: usize,
    /// Submissions loaded
    pub submissions_loaded: usize,
    /// Malformed records skipped
    pub records_skipped: usize,
    /// One message per skipped record
    pub warnings: Vec<String>,
}

// Wire shapes as the judge (and the fetch collaborator) emit them. The
// submission nests its problem; the domain type flattens it.

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    info: Option<serde_json::Value>,
    #[serde(default, rename = "ratingHistory")]
    rating_history: Vec<serde_json::Value>,
    #[serde(default)]
    submissions: Vec<serde_json::Value>,
    #[serde(default, rename = "lastSynced")]
    last_synced: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct RawContestResult {
    #[serde(rename = "contestId")]
    contest_id: u64,
    #[serde(rename = "contestName")]
    contest_name: String,
    rank: u32,
    #[serde(rename = "oldRating")]
    old_rating: i32,
    #[serde(rename = "newRating")]
    new_rating: i32,
    #[serde(rename = "ratingUpdateTimeSeconds")]
    rating_update_time_seconds: i64,
}

#[derive(Debug, Deserialize)]
struct RawProblem {
    index: String,
    #[serde(default)]
    rating: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawSubmission {
    #[serde(rename = "contestId")]
    contest_id: u64,
    #[serde(rename = "creationTimeSeconds")]
    creation_time_seconds: i64,
    #[serde(default)]
    verdict: Option<Verdict>,
    problem: RawProblem,
}

fn epoch_seconds(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

/// Load a student snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<(StudentSnapshot, LoadReport)> {
    let content = std::fs::read_to_string(path)?;
    parse_snapshot(&content)
}

/// Parse a student snapshot from a JSON string.
pub fn parse_snapshot(json: &str) -> Result<(StudentSnapshot, LoadReport)> {
    let raw: RawSnapshot = serde_json::from_str(json)
        .map_err(|e| Error::Snapshot(format!("snapshot is not a valid document: {}", e)))?;

    let mut report = LoadReport::default();
    let mut rating_history = Vec::with_capacity(raw.rating_history.len());
    let mut submissions = Vec::with_capacity(raw.submissions.len());

    // Profile info is optional; a malformed object degrades to "no info"
    // instead of failing the load.
    let info: Option<JudgeUserInfo> = match raw.info {
        Some(value) => match serde_json::from_value(value) {
            Ok(info) => Some(info),
            Err(e) => {
                skip(&mut report, "info", 0, e.to_string());
                None
            }
        },
        None => None,
    };

    for (i, value) in raw.rating_history.into_iter().enumerate() {
        match parse_contest(value) {
            Ok(contest) => {
                rating_history.push(contest);
                report.contests_loaded += 1;
            }
            Err(reason) => skip(&mut report, "contest", i, reason),
        }
    }

    for (i, value) in raw.submissions.into_iter().enumerate() {
        match parse_submission(value) {
            Ok(sub) => {
                submissions.push(sub);
                report.submissions_loaded += 1;
            }
            Err(reason) => skip(&mut report, "submission", i, reason),
        }
    }

    tracing::debug!(
        contests = report.contests_loaded,
        submissions = report.submissions_loaded,
        skipped = report.records_skipped,
        "Parsed student snapshot"
    );

    Ok((
        StudentSnapshot {
            info,
            rating_history,
            submissions,
            last_synced_at: raw.last_synced,
        },
        report,
    ))
}

fn skip(report: &mut LoadReport, kind: &str, index: usize, reason: String) {
    let warning = format!("skipping {} record {}: {}", kind, index, reason);
    tracing::warn!("{}", warning);
    report.warnings.push(warning);
    report.records_skipped += 1;
}

fn parse_contest(value: serde_json::Value) -> std::result::Result<ContestResult, String> {
    let raw: RawContestResult =
        serde_json::from_value(value).map_err(|e| e.to_string())?;

    let rating_updated_at = epoch_seconds(raw.rating_update_time_seconds)
        .ok_or_else(|| format!("timestamp out of range: {}", raw.rating_update_time_seconds))?;

    Ok(ContestResult {
        contest_id: raw.contest_id,
        contest_name: raw.contest_name,
        rank: raw.rank,
        old_rating: raw.old_rating,
        new_rating: raw.new_rating,
        rating_updated_at,
    })
}

fn parse_submission(value: serde_json::Value) -> std::result::Result<Submission, String> {
    let raw: RawSubmission = serde_json::from_value(value).map_err(|e| e.to_string())?;

    let submitted_at = epoch_seconds(raw.creation_time_seconds)
        .ok_or_else(|| format!("timestamp out of range: {}", raw.creation_time_seconds))?;

    Ok(Submission {
        contest_id: raw.contest_id,
        problem_index: raw.problem.index,
        // A submission still in judging has no verdict yet; it counts as an
        // attempt but never as a solve.
        verdict: raw.verdict.unwrap_or(Verdict::Other),
        submitted_at,
        problem_rating: raw.problem.rating,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "info": {
            "handle": "alice",
            "rating": 1543,
            "maxRating": 1602,
            "rank": "specialist",
            "maxRank": "expert"
        },
        "ratingHistory": [
            {
                "contestId": 1,
                "contestName": "Round #1",
                "rank": 120,
                "oldRating": 1500,
                "newRating": 1543,
                "ratingUpdateTimeSeconds": 1718000000
            },
            { "contestId": 2, "contestName": "missing fields" }
        ],
        "submissions": [
            {
                "contestId": 1,
                "creationTimeSeconds": 1717990000,
                "verdict": "OK",
                "problem": { "index": "A", "rating": 800 }
            },
            {
                "contestId": 1,
                "creationTimeSeconds": 1717991000,
                "verdict": "WRONG_ANSWER",
                "problem": { "index": "B" }
            },
            { "contestId": 1, "creationTimeSeconds": 1717992000 }
        ],
        "lastSynced": "2024-06-10T08:00:00Z"
    }"#;

    #[test]
    fn test_parse_snapshot_skips_malformed_records() {
        let (snapshot, report) = parse_snapshot(SNAPSHOT).expect("snapshot parses");

        assert_eq!(snapshot.handle(), Some("alice"));
        assert_eq!(snapshot.rating_history.len(), 1);
        assert_eq!(snapshot.submissions.len(), 2);
        assert!(snapshot.last_synced_at.is_some());

        assert_eq!(report.contests_loaded, 1);
        assert_eq!(report.submissions_loaded, 2);
        // One contest and one submission were malformed
        assert_eq!(report.records_skipped, 2);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_parsed_fields() {
        let (snapshot, _) = parse_snapshot(SNAPSHOT).expect("snapshot parses");

        let contest = &snapshot.rating_history[0];
        assert_eq!(contest.contest_id, 1);
        assert_eq!(contest.rating_delta(), 43);

        let solve = &snapshot.submissions[0];
        assert_eq!(solve.problem_index, "A");
        assert!(solve.verdict.is_accepted());
        assert_eq!(solve.problem_rating, Some(800));

        let attempt = &snapshot.submissions[1];
        assert_eq!(attempt.verdict, Verdict::WrongAnswer);
        assert_eq!(attempt.problem_rating, None);
    }

    #[test]
    fn test_unknown_verdict_collapses_to_other() {
        let json = r#"{
            "submissions": [
                {
                    "contestId": 3,
                    "creationTimeSeconds": 1717990000,
                    "verdict": "IDLENESS_LIMIT_EXCEEDED",
                    "problem": { "index": "C" }
                }
            ]
        }"#;
        let (snapshot, report) = parse_snapshot(json).expect("snapshot parses");
        assert_eq!(snapshot.submissions[0].verdict, Verdict::Other);
        assert_eq!(report.records_skipped, 0);
    }

    #[test]
    fn test_malformed_info_degrades_to_none() {
        let json = r#"{ "info": { "rating": "not a number" } }"#;
        let (snapshot, report) = parse_snapshot(json).expect("snapshot parses");
        assert!(snapshot.info.is_none());
        assert_eq!(report.records_skipped, 1);
    }

    #[test]
    fn test_empty_document() {
        let (snapshot, report) = parse_snapshot("{}").expect("empty object is a valid snapshot");
        assert!(snapshot.info.is_none());
        assert!(snapshot.rating_history.is_empty());
        assert!(snapshot.submissions.is_empty());
        assert!(snapshot.last_synced_at.is_none());
        assert_eq!(report.records_skipped, 0);
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        assert!(parse_snapshot("not json").is_err());
        assert!(parse_snapshot("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_load_snapshot_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("student.json");
        std::fs::write(&path, SNAPSHOT).expect("write fixture");

        let (snapshot, _) = load_snapshot(&path).expect("load succeeds");
        assert_eq!(snapshot.rating_history.len(), 1);
    }
}
