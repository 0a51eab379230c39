//! # cfboard-core
//!
//! Core library for cfboard - a dashboard for tracking students'
//! competitive-programming activity on an external judge.
//!
//! This library provides:
//! - Domain types for contest results, submissions, and judge profiles
//! - The analytics engine that derives the profile views (rating trend,
//!   solving statistics, activity heatmap)
//! - The sync freshness gate that rate-limits resyncs against the judge
//! - Snapshot loading, configuration, and logging infrastructure
//!
//! ## Architecture
//!
//! Data flows one way through three layers:
//! - **Raw:** the judge record snapshot supplied by the fetch collaborator
//!   (immutable for the duration of a pass)
//! - **Derived:** window filter, solved-problem index, heatmap, histogram,
//!   unsolved counts (pure, regenerable)
//! - **Views:** the profile facade's contest history, solving statistics,
//!   heatmap, and sync status
//!
//! ## Example
//!
//! ```rust,no_run
//! use cfboard_core::analytics::{generate_profile, ProfileOptions};
//! use cfboard_core::snapshot;
//!
//! let (student, report) =
//!     snapshot::load_snapshot(std::path::Path::new("student.json")).expect("snapshot");
//! println!("loaded {} submissions", report.submissions_loaded);
//!
//! let profile = generate_profile(
//!     &student.rating_history,
//!     &student.submissions,
//!     student.last_synced_at,
//!     chrono::Utc::now(),
//!     &ProfileOptions::default(),
//! );
//! println!("solved {} problems", profile.solving.total_solved);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use snapshot::{LoadReport, StudentSnapshot};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod snapshot;
pub mod sync;
pub mod types;
