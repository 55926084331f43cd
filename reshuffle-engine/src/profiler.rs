//! Agent Profiler - derives a per-run load and performance snapshot.
//!
//! Profiles are computed fresh from the live account set at the start of
//! every run and discarded afterwards; the planner mutates its own working
//! copy as proposals accrue, so stale cached loads would corrupt capacity
//! accounting.

use reshuffle_core::{Account, Agent, AgentProfile};

/// Build a profile for every collection-eligible agent in the roster.
///
/// Supervisory and administrative roles are excluded. Pure function: inputs
/// are never mutated.
pub fn profile(roster: &[Agent], accounts: &[Account]) -> Vec<AgentProfile> {
    roster
        .iter()
        .filter(|agent| agent.role.is_collection_eligible())
        .map(|agent| {
            let mut current_load = 0i32;
            let mut positive = 0i32;
            for account in accounts {
                if account.assigned_agent_id == Some(agent.agent_id) {
                    current_load += 1;
                    if account.status.is_positive_outcome() {
                        positive += 1;
                    }
                }
            }
            // Never divide by zero: an idle agent has no track record.
            let success_rate = if current_load > 0 {
                positive as f32 / current_load as f32
            } else {
                0.0
            };
            AgentProfile {
                agent_id: agent.agent_id,
                current_load,
                success_rate,
                specializations: agent.specializations.clone(),
                capacity: agent.effective_capacity(),
            }
        })
        .collect()
}
