//! Input data model for a single mission solve.
//!
//! Agents, sites, and targets are immutable for the duration of one solve.
//! All collections are ordered (`BTreeMap`/`BTreeSet`) so that network
//! construction visits them in a stable order regardless of build.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Upper bound of the scanner's abundance scale.
///
/// Survey bars are measured in percent, so any value above this indicates
/// corrupted upstream data rather than a very rich deposit.
pub const MAX_ABUNDANCE: u32 = 100;

/// Unique identifier for an agent (a deployable character).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Unique identifier for a resource-producing site (a planet).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SiteId(pub String);

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiteId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Name of a collectable resource type (e.g. "Base Metals").
///
/// Resource kinds are open-ended survey names, not a closed enum: the
/// scanner decides the vocabulary, the planner only matches strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ResourceKind(pub String);

impl ResourceKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceKind {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// A deployable character with a visit budget and an exclusion list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,

    /// Maximum number of visits this agent may perform in one plan.
    /// Zero is legal: the agent exists but receives no work orders.
    pub max_visits: u32,

    /// Sites this agent must never be assigned to.
    pub banned: BTreeSet<SiteId>,
}

impl Agent {
    pub fn new(id: impl Into<AgentId>, max_visits: u32) -> Self {
        Self {
            id: id.into(),
            max_visits,
            banned: BTreeSet::new(),
        }
    }

    /// Adds a forbidden site (builder pattern).
    #[must_use]
    pub fn ban(mut self, site: impl Into<SiteId>) -> Self {
        self.banned.insert(site.into());
        self
    }

    /// Returns true if this agent is forbidden from visiting `site`.
    pub fn is_banned(&self, site: &SiteId) -> bool {
        self.banned.contains(site)
    }
}

/// A surveyed site and its measured resource abundances.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    pub id: SiteId,

    /// Measured abundance per resource, 0..=[`MAX_ABUNDANCE`].
    /// A missing entry means the site does not offer that resource.
    pub resources: BTreeMap<ResourceKind, u32>,
}

impl Site {
    pub fn new(id: impl Into<SiteId>) -> Self {
        Self {
            id: id.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Records an offered resource (builder pattern).
    #[must_use]
    pub fn offer(mut self, resource: impl Into<ResourceKind>, abundance: u32) -> Self {
        self.resources.insert(resource.into(), abundance);
        self
    }

    /// Abundance of `resource` at this site, 0 when absent.
    pub fn abundance(&self, resource: &ResourceKind) -> u32 {
        self.resources.get(resource).copied().unwrap_or(0)
    }
}

/// Required collected units per resource type across the whole plan.
///
/// A target is satisfied when total collected units reach the requirement.
/// Each offering's delivery is capped at the requirement; when several
/// sites offer the same targeted resource, spare agent budget may collect
/// beyond the requirement in aggregate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Targets(pub BTreeMap<ResourceKind, u32>);

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requirement for a resource (builder pattern).
    #[must_use]
    pub fn require(mut self, resource: impl Into<ResourceKind>, units: u32) -> Self {
        self.0.insert(resource.into(), units);
        self
    }

    /// Units still demanded for `resource`, 0 when untargeted.
    pub fn required(&self, resource: &ResourceKind) -> u32 {
        self.0.get(resource).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResourceKind, u32)> {
        self.0.iter().map(|(resource, &units)| (resource, units))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ResourceKind, u32)> for Targets {
    fn from_iter<I: IntoIterator<Item = (ResourceKind, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
