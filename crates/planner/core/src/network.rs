//! Flow network construction.
//!
//! The network is a fixed-shape layered DAG:
//!
//! ```text
//! Source --max_visits--> Agent --1 (cost -abundance)--> Offering --target--> Sink
//! ```
//!
//! Nodes are plain arena indices and edges live in one flat vector with
//! forward/reverse pairs at adjacent slots (`index ^ 1` flips direction),
//! so residual mutation during augmentation is a couple of array writes.
//! The network is built once per solve and discarded after extraction.
//!
//! # Invariants
//!
//! - Every Agent→Offering edge is a legal combination: banned sites and
//!   zero abundances never produce an edge.
//! - Offerings exist only for targeted resources; untargeted offerings are
//!   pruned before a node is allocated for them.
//! - Validation runs before the first node is allocated, so a rejected
//!   configuration never yields a partially built graph.

use std::collections::BTreeSet;

use crate::error::ConfigError;
use crate::model::{Agent, MAX_ABUNDANCE, ResourceKind, Site, SiteId, Targets};

/// Arena index of the source node.
pub(crate) const SOURCE: usize = 0;

/// One directed residual edge.
#[derive(Clone, Debug)]
pub(crate) struct Edge {
    pub to: usize,
    /// Remaining residual capacity.
    pub cap: i64,
    pub cost: i64,
}

/// A collectable (site, resource) pairing materialized as a network node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Offering {
    pub site: SiteId,
    pub resource: ResourceKind,
    pub abundance: u32,
    /// Arena index of this offering's node.
    pub(crate) node: usize,
    /// Index of the Offering→Sink edge, for reading delivered flow.
    pub(crate) sink_edge: usize,
}

/// The solve-scoped flow graph.
///
/// Owned exclusively by one solve invocation; the solver mutates residual
/// capacities in place and the extractor reads them back out.
#[derive(Clone, Debug)]
pub struct FlowNetwork {
    pub(crate) adjacency: Vec<Vec<usize>>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) sink: usize,
    /// Node index per agent, parallel to the input agent slice.
    pub(crate) agent_nodes: Vec<usize>,
    pub(crate) offerings: Vec<Offering>,
}

impl FlowNetwork {
    fn with_nodes(count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); count],
            edges: Vec::new(),
            sink: count - 1,
            agent_nodes: Vec::new(),
            offerings: Vec::new(),
        }
    }

    /// Adds a forward edge and its zero-capacity reverse twin, returning the
    /// forward edge's index.
    pub(crate) fn add_edge(&mut self, from: usize, to: usize, cap: i64, cost: i64) -> usize {
        let forward = self.edges.len();
        self.edges.push(Edge { to, cap, cost });
        self.edges.push(Edge {
            to: from,
            cap: 0,
            cost: -cost,
        });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(forward ^ 1);
        forward
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn offerings(&self) -> &[Offering] {
        &self.offerings
    }

    /// Flow currently pushed through the forward edge `index`.
    pub(crate) fn flow(&self, index: usize) -> i64 {
        self.edges[index ^ 1].cap
    }

    /// The offering materialized at `node`, if any.
    pub(crate) fn offering_at(&self, node: usize) -> Option<&Offering> {
        self.offerings
            .binary_search_by_key(&node, |offering| offering.node)
            .ok()
            .map(|i| &self.offerings[i])
    }
}

/// Translates agents, sites, and targets into a [`FlowNetwork`] whose
/// min-cost maximum flow corresponds to an optimal, constraint-respecting
/// visit plan.
pub struct NetworkBuilder<'a> {
    agents: &'a [Agent],
    sites: &'a [Site],
    targets: &'a Targets,
}

impl<'a> NetworkBuilder<'a> {
    pub fn new(agents: &'a [Agent], sites: &'a [Site], targets: &'a Targets) -> Self {
        Self {
            agents,
            sites,
            targets,
        }
    }

    /// Validates the configuration and constructs the network.
    pub fn build(self) -> Result<FlowNetwork, ConfigError> {
        self.validate()?;

        // Count offering nodes up front so the arena can be laid out in one
        // pass: [source, agents.., offerings.., sink].
        let offering_count: usize = self
            .sites
            .iter()
            .map(|site| {
                site.resources
                    .iter()
                    .filter(|&(resource, &abundance)| {
                        abundance > 0 && self.targets.required(resource) > 0
                    })
                    .count()
            })
            .sum();

        let node_count = 1 + self.agents.len() + offering_count + 1;
        let mut network = FlowNetwork::with_nodes(node_count);
        let sink = network.sink;

        // Layer 1: Source -> Agent, capacity = visit budget.
        for (index, agent) in self.agents.iter().enumerate() {
            let node = 1 + index;
            network.agent_nodes.push(node);
            network.add_edge(SOURCE, node, i64::from(agent.max_visits), 0);
        }

        // Layers 2 and 3: Agent -> Offering -> Sink.
        let mut next_node = 1 + self.agents.len();
        for site in self.sites {
            for (resource, &abundance) in &site.resources {
                let required = self.targets.required(resource);
                if abundance == 0 || required == 0 {
                    continue;
                }

                let node = next_node;
                next_node += 1;

                // An agent collects a given offering at most once, and the
                // yield is negated so min-cost flow maximizes it.
                for (index, agent) in self.agents.iter().enumerate() {
                    if agent.is_banned(&site.id) {
                        continue;
                    }
                    network.add_edge(network.agent_nodes[index], node, 1, -i64::from(abundance));
                }

                let sink_edge = network.add_edge(node, sink, i64::from(required), 0);
                network.offerings.push(Offering {
                    site: site.id.clone(),
                    resource: resource.clone(),
                    abundance,
                    node,
                    sink_edge,
                });
            }
        }

        Ok(network)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut agent_ids = BTreeSet::new();
        for agent in self.agents {
            if !agent_ids.insert(&agent.id) {
                return Err(ConfigError::DuplicateAgent(agent.id.clone()));
            }
        }

        let mut site_ids = BTreeSet::new();
        for site in self.sites {
            if !site_ids.insert(&site.id) {
                return Err(ConfigError::DuplicateSite(site.id.clone()));
            }
            for (resource, &abundance) in &site.resources {
                if abundance > MAX_ABUNDANCE {
                    return Err(ConfigError::AbundanceOutOfRange {
                        site: site.id.clone(),
                        resource: resource.clone(),
                        abundance,
                    });
                }
            }
        }

        for (resource, units) in self.targets.iter() {
            if units == 0 {
                return Err(ConfigError::ZeroTarget(resource.clone()));
            }
            if !self.is_sourced(resource) {
                return Err(ConfigError::UnsourcedTarget(resource.clone()));
            }
        }

        Ok(())
    }

    /// A resource is sourced when some site offers it and at least one agent
    /// with a nonzero budget is allowed to visit that site.
    fn is_sourced(&self, resource: &ResourceKind) -> bool {
        self.sites.iter().any(|site| {
            site.abundance(resource) > 0
                && self
                    .agents
                    .iter()
                    .any(|agent| agent.max_visits > 0 && !agent.is_banned(&site.id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_agents() -> Vec<Agent> {
        vec![Agent::new("A", 2), Agent::new("B", 1).ban("S2")]
    }

    fn two_sites() -> Vec<Site> {
        vec![
            Site::new("S1").offer("Ore", 80).offer("Gas", 40),
            Site::new("S2").offer("Ore", 90),
        ]
    }

    #[test]
    fn builds_layered_arena_in_order() {
        let agents = two_agents();
        let sites = two_sites();
        let targets = Targets::new().require("Ore", 2);

        let network = NetworkBuilder::new(&agents, &sites, &targets)
            .build()
            .expect("configuration is valid");

        // source + 2 agents + 2 Ore offerings (Gas pruned) + sink
        assert_eq!(network.node_count(), 6);
        assert_eq!(network.offerings().len(), 2);
        assert_eq!(network.agent_nodes, vec![1, 2]);
        assert_eq!(network.sink, 5);
    }

    #[test]
    fn untargeted_resources_produce_no_offering() {
        let agents = two_agents();
        let sites = two_sites();
        let targets = Targets::new().require("Ore", 1);

        let network = NetworkBuilder::new(&agents, &sites, &targets).build().unwrap();
        assert!(
            network
                .offerings()
                .iter()
                .all(|offering| offering.resource == "Ore".into())
        );
    }

    #[test]
    fn banned_site_produces_no_agent_edge() {
        let agents = two_agents();
        let sites = two_sites();
        let targets = Targets::new().require("Ore", 2);

        let network = NetworkBuilder::new(&agents, &sites, &targets).build().unwrap();
        let s2 = network
            .offerings()
            .iter()
            .find(|offering| offering.site == "S2".into())
            .unwrap();

        // Only agent A (node 1) may reach S2; agent B banned it. The reverse
        // twins stored at the offering point back at the visiting agents.
        let incoming: Vec<usize> = network.adjacency[s2.node]
            .iter()
            .map(|&e| network.edges[e].to)
            .filter(|&from| from != network.sink)
            .collect();
        assert_eq!(incoming, vec![1]);
    }

    #[test]
    fn agent_edges_carry_negated_abundance() {
        let agents = vec![Agent::new("A", 1)];
        let sites = vec![Site::new("S1").offer("Ore", 80)];
        let targets = Targets::new().require("Ore", 1);

        let network = NetworkBuilder::new(&agents, &sites, &targets).build().unwrap();
        let offering = &network.offerings()[0];
        let edge = network.adjacency[1]
            .iter()
            .map(|&e| &network.edges[e])
            .find(|edge| edge.to == offering.node)
            .unwrap();
        assert_eq!(edge.cap, 1);
        assert_eq!(edge.cost, -80);
    }

    #[test]
    fn rejects_duplicate_agents() {
        let agents = vec![Agent::new("A", 1), Agent::new("A", 3)];
        let sites = two_sites();
        let targets = Targets::new().require("Ore", 1);

        let err = NetworkBuilder::new(&agents, &sites, &targets)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateAgent("A".into()));
    }

    #[test]
    fn rejects_zero_unit_target() {
        let agents = two_agents();
        let sites = two_sites();
        let targets = Targets::new().require("Ore", 0);

        let err = NetworkBuilder::new(&agents, &sites, &targets)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTarget("Ore".into()));
    }

    #[test]
    fn rejects_target_nobody_can_source() {
        // Gas exists only on S2, and the only agent able to travel bans S2.
        let agents = vec![Agent::new("B", 3).ban("S2")];
        let sites = vec![Site::new("S1").offer("Ore", 50), Site::new("S2").offer("Gas", 60)];
        let targets = Targets::new().require("Gas", 1);

        let err = NetworkBuilder::new(&agents, &sites, &targets)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::UnsourcedTarget("Gas".into()));
    }

    #[test]
    fn rejects_out_of_scale_abundance() {
        let agents = vec![Agent::new("A", 1)];
        let sites = vec![Site::new("S1").offer("Ore", 140)];
        let targets = Targets::new().require("Ore", 1);

        let err = NetworkBuilder::new(&agents, &sites, &targets)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::AbundanceOutOfRange { abundance: 140, .. }));
    }
}
