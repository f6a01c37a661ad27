//! Textual report rendering.
//!
//! The report is a pure function of the machine-readable [`MissionPlan`]:
//! rendering the same plan twice yields the same text.

use std::fmt::Write;

use planner_core::MissionPlan;

/// Renders the per-agent work orders plus a shortfall summary.
pub fn render_plan(plan: &MissionPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Total System Abundance: {}", plan.total_yield);
    let _ = writeln!(out);
    let _ = writeln!(out, "--- MISSION ASSIGNMENTS ---");

    for (agent, visits) in &plan.orders {
        let _ = writeln!(out);
        let _ = writeln!(out, "{agent}:");
        if visits.is_empty() {
            let _ = writeln!(out, "  (No tasks assigned)");
        }
        for visit in visits {
            let _ = writeln!(out, "  - {visit}");
        }
    }

    let unmet: Vec<_> = plan.unmet_targets().collect();
    if !unmet.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- UNMET TARGETS ---");
        for outcome in unmet {
            let _ = writeln!(
                out,
                "  {}: short {} unit(s) ({} of {} collected)",
                outcome.resource,
                outcome.shortfall(),
                outcome.collected,
                outcome.required
            );
        }
    }

    out
}
