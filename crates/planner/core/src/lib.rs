//! Deterministic mission-assignment optimizer.
//!
//! `planner-core` assigns agents with visit budgets and exclusion lists to
//! resource-producing sites so that per-resource targets are met and total
//! collected yield is maximized. The problem is modeled as min-cost max-flow
//! over a layered DAG (Source → Agent → Offering → Sink); see [`network`]
//! for the construction, [`solver`] for the augmenting-path computation,
//! and [`plan`] for flow-to-plan extraction.
//!
//! The crate is pure computation: no I/O, no logging, no shared state.
//! Each call to [`plan_mission`] builds, solves, and discards its own
//! network, so independent solves may run on separate threads.

pub mod error;
pub mod model;
pub mod network;
pub mod plan;
pub mod solver;

pub use error::ConfigError;
pub use model::{Agent, AgentId, MAX_ABUNDANCE, ResourceKind, Site, SiteId, Targets};
pub use network::{FlowNetwork, NetworkBuilder, Offering};
pub use plan::{MissionPlan, TargetOutcome, Visit};
pub use solver::FlowOutcome;

/// Runs one complete solve: validate and build the network, compute the
/// min-cost maximum flow, and extract the per-agent plan.
///
/// Configuration problems surface as [`ConfigError`] before any flow is
/// computed. Targets that cannot be fully met are *not* errors; they come
/// back as nonzero [`TargetOutcome::shortfall`] values on the plan.
pub fn plan_mission(
    agents: &[Agent],
    sites: &[Site],
    targets: &Targets,
) -> Result<MissionPlan, ConfigError> {
    let mut network = NetworkBuilder::new(agents, sites, targets).build()?;
    let outcome = solver::solve(&mut network);
    Ok(plan::extract(&network, agents, targets, outcome))
}
