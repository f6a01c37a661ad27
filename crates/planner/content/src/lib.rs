//! File loaders that turn mission configuration and survey data into
//! `planner-core` inputs.
//!
//! Two formats are supported: mission TOML (agent roster, targets, optional
//! resource-name aliases) and survey JSON (the scanner collaborator's site
//! records). Loaders validate at the boundary, so negative counts never
//! reach the unsigned core model.

pub mod formats;
pub mod loaders;

pub use loaders::{LoadResult, MissionConfig, MissionLoader, SurveyLoader};
