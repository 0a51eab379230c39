//! Analytics module for cfboard
//!
//! Turns one student's raw judge records into the derived views the
//! dashboard displays. Data flows one way:
//!
//! ```text
//! raw records ──► window filter ──► solved index ──► histogram
//!            │                 └──► unsolved counts
//!            └──► heatmap (never windowed)
//!                                   ▼
//!                            profile facade
//! ```
//!
//! Everything here is synchronous and pure: the record slices are treated
//! as an immutable snapshot for the duration of one pass, and data-shape
//! problems degrade to empty or sentinel aggregates instead of errors.

pub mod heatmap;
pub mod histogram;
pub mod profile;
pub mod solved;
pub mod window;

pub use heatmap::{heatmap as build_heatmap, HeatLevel, HeatmapDay, HEATMAP_SPAN_DAYS};
pub use histogram::{histogram, RatingBucket, BUCKET_WIDTH};
pub use profile::{
    generate_profile, ContestHistoryView, ContestRow, HeatmapView, ProfileAnalytics,
    ProfileOptions, SolvingStatsView, SyncStatusView,
};
pub use solved::{unsolved_count, SolvedProblemIndex};
pub use window::{filter_window, Timestamped};
