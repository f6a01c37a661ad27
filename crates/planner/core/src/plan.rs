//! Flow-to-plan extraction.
//!
//! Walks the solved residual graph and turns saturated Agent→Offering edges
//! back into per-agent work orders, plus a per-target delivery report.
//! Extraction is read-only over the solved network: running it twice over
//! the same flow produces an identical plan.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{Agent, AgentId, ResourceKind, SiteId, Targets};
use crate::network::FlowNetwork;
use crate::solver::FlowOutcome;

/// A single work order: collect one resource at one site.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    pub site: SiteId,
    pub resource: ResourceKind,
    /// Measured abundance, i.e. the yield of this visit.
    pub abundance: u32,
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Visit {} -> Collect {} (Yield: {})",
            self.site, self.resource, self.abundance
        )
    }
}

/// Delivered units versus requirement for one targeted resource.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetOutcome {
    pub resource: ResourceKind,
    pub required: u32,
    pub collected: u32,
}

impl TargetOutcome {
    /// Units still missing after the solve; zero when the target was met.
    pub fn shortfall(&self) -> u32 {
        self.required.saturating_sub(self.collected)
    }

    pub fn is_met(&self) -> bool {
        self.collected >= self.required
    }
}

/// Machine-readable result of one solve.
///
/// This is the artifact the textual report is rendered from: every agent
/// appears in `orders` (idle agents with an empty list), outcomes cover
/// every targeted resource, and `total_yield` is the summed abundance of
/// all visits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionPlan {
    pub orders: BTreeMap<AgentId, Vec<Visit>>,
    pub outcomes: Vec<TargetOutcome>,
    pub total_yield: u64,
}

impl MissionPlan {
    /// Targets the solve could not fully deliver.
    pub fn unmet_targets(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_met())
    }

    pub fn is_fully_met(&self) -> bool {
        self.outcomes.iter().all(TargetOutcome::is_met)
    }
}

/// Reads the solved flow back into per-agent work orders.
///
/// Each Agent→Offering edge carrying flow becomes one [`Visit`]. Within an
/// agent's list, visits are ordered by descending yield, ties broken by
/// site then resource identifier so reports are reproducible.
pub fn extract(
    network: &FlowNetwork,
    agents: &[Agent],
    targets: &Targets,
    outcome: FlowOutcome,
) -> MissionPlan {
    let mut orders: BTreeMap<AgentId, Vec<Visit>> = BTreeMap::new();

    for (index, agent) in agents.iter().enumerate() {
        let node = network.agent_nodes[index];
        let visits = orders.entry(agent.id.clone()).or_default();

        for &e in &network.adjacency[node] {
            // Skip reverse twins; forward pair members sit at even indices.
            if e % 2 != 0 || network.flow(e) == 0 {
                continue;
            }
            let Some(offering) = network.offering_at(network.edges[e].to) else {
                continue;
            };
            visits.push(Visit {
                site: offering.site.clone(),
                resource: offering.resource.clone(),
                abundance: offering.abundance,
            });
        }

        visits.sort_by(|a, b| {
            b.abundance
                .cmp(&a.abundance)
                .then_with(|| a.site.cmp(&b.site))
                .then_with(|| a.resource.cmp(&b.resource))
        });
    }

    let mut collected: BTreeMap<&ResourceKind, u32> = BTreeMap::new();
    for offering in network.offerings() {
        let delivered = network.flow(offering.sink_edge) as u32;
        *collected.entry(&offering.resource).or_insert(0) += delivered;
    }

    let outcomes = targets
        .iter()
        .map(|(resource, required)| TargetOutcome {
            resource: resource.clone(),
            required,
            collected: collected.get(resource).copied().unwrap_or(0),
        })
        .collect();

    MissionPlan {
        orders,
        outcomes,
        total_yield: outcome.total_yield().max(0) as u64,
    }
}
