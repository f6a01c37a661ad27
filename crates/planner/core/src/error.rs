//! Configuration error taxonomy.
//!
//! Configuration errors are raised before any network node is allocated, so
//! a failed solve never leaves a partially built graph behind. Infeasible
//! targets are deliberately *not* represented here: falling short of a
//! target is a normal, reportable outcome carried by
//! [`TargetOutcome`](crate::plan::TargetOutcome), not an error.

use crate::model::{AgentId, ResourceKind, SiteId};

/// Malformed or contradictory solve input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Two agents share the same identifier.
    #[error("duplicate agent identifier {0}")]
    DuplicateAgent(AgentId),

    /// Two sites share the same identifier.
    #[error("duplicate site identifier {0}")]
    DuplicateSite(SiteId),

    /// A target demands zero units, which is meaningless as a requirement.
    #[error("target for {0} must be a positive unit count")]
    ZeroTarget(ResourceKind),

    /// A measured abundance exceeds the scanner's percent scale.
    #[error("abundance {abundance} for {resource} at {site} exceeds the 0-100 scale")]
    AbundanceOutOfRange {
        site: SiteId,
        resource: ResourceKind,
        abundance: u32,
    },

    /// A target names a resource no reachable site offers, so the solve
    /// could only ever under-deliver it. Surfaced up front instead of
    /// silently returning a shortfall.
    #[error("target for {0} cannot be sourced: no reachable site offers it")]
    UnsourcedTarget(ResourceKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ConfigError::UnsourcedTarget("Felsic Magma".into());
        assert_eq!(
            err.to_string(),
            "target for Felsic Magma cannot be sourced: no reachable site offers it"
        );

        let err = ConfigError::AbundanceOutOfRange {
            site: "S1".into(),
            resource: "Water".into(),
            abundance: 140,
        };
        assert!(err.to_string().contains("140"));
        assert!(err.to_string().contains("S1"));
    }
}
