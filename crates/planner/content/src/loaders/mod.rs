//! Content loaders for reading solve inputs from files.
//!
//! Each loader converts one on-disk format (see [`crate::formats`]) into
//! typed `planner-core` inputs, rejecting out-of-range values at the
//! boundary so the core never sees them.

pub mod mission;
pub mod survey;

pub use mission::{MissionConfig, MissionLoader};
pub use survey::SurveyLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
