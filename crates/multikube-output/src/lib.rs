//! Output merging for multikube.
//!
//! Turns the ordered per-context results of a dispatch into a single text
//! stream, either as one table with a leading `CLUSTER` column
//! ([`merge_tabular`]) or as delimited per-context blocks
//! ([`merge_grouped`]). Which one to use is decided by [`OutputMode`], kept
//! apart from the merge algorithms themselves.

mod header;
mod merger;
mod mode;

pub use header::{HEADER_KEYWORDS, HEADER_THRESHOLD, is_header_line};
pub use merger::{CLUSTER_LABEL, MergedOutput, merge, merge_grouped, merge_tabular};
pub use mode::{NON_TABULAR_COMMANDS, OutputMode};
