//! On-disk file formats, mirrored as serde structs.
//!
//! Numeric fields are deserialized as `i64` on purpose: the typed core
//! model is unsigned, so negative values in a file must be rejected here
//! at the boundary with a descriptive error instead of a serde type error.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Root of a mission TOML file.
///
/// ```toml
/// [[agent]]
/// id = "Tyler Typical"
/// max_visits = 5
/// banned = ["J105433 I"]
///
/// [targets]
/// "Water" = 5
/// "Bacteria" = 3
///
/// [aliases]
/// "Water" = "Aqueous Liquids"
/// "Bacteria" = "Microorganisms"
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissionFile {
    #[serde(default, rename = "agent")]
    pub agents: Vec<AgentSpec>,

    #[serde(default)]
    pub targets: BTreeMap<String, i64>,

    /// Optional demand-side → survey-side resource name translation.
    /// Target names without an entry pass through unchanged.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// One `[[agent]]` table in a mission file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSpec {
    pub id: String,
    pub max_visits: i64,
    #[serde(default)]
    pub banned: Vec<String>,
}

/// One scanned site record in a survey JSON file. This is the data
/// contract with the upstream scanner: identifier plus resource → integer
/// abundance, nothing about pixels, paths, or calibration.
#[derive(Debug, Deserialize)]
pub struct SiteRecord {
    pub id: String,
    pub resources: BTreeMap<String, i64>,
}
