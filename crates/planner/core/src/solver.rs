//! Min-cost max-flow over the mission network.
//!
//! Successive shortest augmenting paths: repeatedly find the cheapest
//! Source→Sink path in the residual graph, push the bottleneck capacity
//! along it, and stop when the sink is unreachable. Because yields are
//! negated into costs the relaxation must tolerate negative edge weights,
//! so paths are found with a queue-based label-correcting pass (SPFA)
//! rather than Dijkstra. The network is acyclic by construction, so
//! negative cycles cannot occur.
//!
//! Running out of augmenting paths while agents still have budget is
//! normal termination, not an error: it means the targets cannot be fully
//! met and the extractor reports the shortfall.

use std::collections::VecDeque;

use crate::network::{FlowNetwork, SOURCE};

/// Aggregate result of one flow computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowOutcome {
    /// Total units delivered to the sink (collected resource units).
    pub total_flow: i64,
    /// Total cost of the flow; negate for the total collected yield.
    pub total_cost: i64,
}

impl FlowOutcome {
    /// Total abundance collected by the flow.
    pub fn total_yield(&self) -> i64 {
        -self.total_cost
    }
}

/// Computes a maximum flow of minimum total cost, mutating residual
/// capacities in place.
///
/// The total cost (and therefore total yield) is deterministic. The
/// specific agent/offering pairing is not guaranteed stable between
/// equal-cost paths: when two offerings yield the same abundance, either
/// assignment is optimal and whichever the relaxation reaches first wins.
pub fn solve(network: &mut FlowNetwork) -> FlowOutcome {
    let mut outcome = FlowOutcome::default();

    while let Some(path) = cheapest_augmenting_path(network) {
        let bottleneck = path
            .iter()
            .map(|&e| network.edges[e].cap)
            .min()
            .unwrap_or(0);
        debug_assert!(bottleneck > 0, "augmenting path must have residual room");

        for &e in &path {
            network.edges[e].cap -= bottleneck;
            network.edges[e ^ 1].cap += bottleneck;
            outcome.total_cost += network.edges[e].cost * bottleneck;
        }
        outcome.total_flow += bottleneck;
    }

    outcome
}

/// Finds the minimum-cost Source→Sink path in the residual graph, returned
/// as edge indices from source to sink, or `None` when the sink is
/// unreachable.
fn cheapest_augmenting_path(network: &FlowNetwork) -> Option<Vec<usize>> {
    const UNREACHED: i64 = i64::MAX;

    let nodes = network.node_count();
    let mut dist = vec![UNREACHED; nodes];
    let mut prev_edge = vec![usize::MAX; nodes];
    let mut in_queue = vec![false; nodes];
    let mut queue = VecDeque::new();

    dist[SOURCE] = 0;
    queue.push_back(SOURCE);
    in_queue[SOURCE] = true;

    while let Some(node) = queue.pop_front() {
        in_queue[node] = false;
        for &e in &network.adjacency[node] {
            let edge = &network.edges[e];
            if edge.cap <= 0 {
                continue;
            }
            let candidate = dist[node] + edge.cost;
            if candidate < dist[edge.to] {
                dist[edge.to] = candidate;
                prev_edge[edge.to] = e;
                if !in_queue[edge.to] {
                    queue.push_back(edge.to);
                    in_queue[edge.to] = true;
                }
            }
        }
    }

    if dist[network.sink] == UNREACHED {
        return None;
    }

    // Walk the predecessor chain back from the sink. The reverse twin of
    // each path edge points at the node the edge was relaxed from.
    let mut path = Vec::new();
    let mut node = network.sink;
    while node != SOURCE {
        let e = prev_edge[node];
        path.push(e);
        node = network.edges[e ^ 1].to;
    }
    path.reverse();
    Some(path)
}
