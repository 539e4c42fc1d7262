//! Keyword-driven opportunity signals for SaaS Radar.
//!
//! Classifies post text into intent categories, extracts payment and pain
//! phrases, scores each post on a bounded 0-10 validation scale, and
//! aggregates posts into per-intent patterns and a markdown report. Every
//! function here is pure and total.

pub mod classify;
pub mod dedup;
pub mod extract;
pub mod lexicon;
pub mod patterns;
pub mod record;
pub mod report;
pub mod scorer;

pub use classify::classify;
pub use dedup::{dedup_by_title, merge_posts, rank_by_score};
pub use extract::{extract_signals, ExtractedSignals};
pub use patterns::{aggregate, theme_summary, top_validated, Pattern};
pub use record::PostRecord;
pub use report::{render_report, ReportInput, ReportOptions};
pub use scorer::validation_score;
