//! Assignment Planner - greedy matching of flagged accounts to agents.
//!
//! Single pass, no backtracking: accounts are visited in their input
//! (portfolio) order, never re-sorted by severity or value. For each account
//! the precedence ladder is relationship preservation, then specialization,
//! then best performer. The working profile list is an explicit mutable
//! arena indexed by position; the selected candidate's load advances so
//! later accounts see it, which makes the result greedy rather than
//! globally optimal. No randomness anywhere; ties resolve by stable sort
//! order, so identical inputs always produce identical proposals.

use reshuffle_core::{
    Account, AccountStatus, AgentProfile, AssignmentProposal, FlaggedAccount, PlanReport,
    PlannerOptions, UnmatchedAccount, UnmatchedReason, TAG_HIGH_VALUE, TAG_LEGAL,
};
use std::cmp::Ordering;

/// Compute a proposed reassignment for each flagged account.
///
/// Accounts for which no candidate qualifies appear in
/// [`PlanReport::unmatched`] instead of being silently dropped.
pub fn plan(
    flagged: &[FlaggedAccount],
    profiles: &[AgentProfile],
    options: &PlannerOptions,
) -> PlanReport {
    let mut report = PlanReport::default();

    if profiles.is_empty() {
        report.unmatched = flagged
            .iter()
            .map(|f| UnmatchedAccount {
                account_id: f.account.account_id,
                reason: UnmatchedReason::NoEligibleAgents,
            })
            .collect();
        return report;
    }

    // Base scan order for every account. Sorted once; only selected
    // candidates' loads change afterwards, without re-sorting.
    let mut working: Vec<AgentProfile> = profiles.to_vec();
    if options.balance_workload {
        working.sort_by_key(|p| p.current_load);
    } else {
        working.sort_by(|a, b| {
            b.success_rate
                .partial_cmp(&a.success_rate)
                .unwrap_or(Ordering::Equal)
        });
    }

    for entry in flagged {
        match select_target(&working, &entry.account, options) {
            Some((index, reason)) => {
                let target = &mut working[index];
                report.proposals.push(AssignmentProposal {
                    account_id: entry.account.account_id,
                    target_agent_id: target.agent_id,
                    previous_agent_id: entry.account.assigned_agent_id,
                    reason,
                });
                target.current_load += 1;
            }
            None => report.unmatched.push(UnmatchedAccount {
                account_id: entry.account.account_id,
                reason: UnmatchedReason::CapacityExhausted,
            }),
        }
    }

    report
}

/// Walk the precedence ladder for one account. Returns the index of the
/// chosen candidate in the working arena and the reason string.
fn select_target(
    working: &[AgentProfile],
    account: &Account,
    options: &PlannerOptions,
) -> Option<(usize, String)> {
    // Capacity is only a hard constraint under workload balancing;
    // otherwise it is advisory and ignored.
    let fits = |p: &AgentProfile| !options.balance_workload || p.has_spare_capacity();

    if options.preserve_relationships {
        if let Some(previous) = account.assigned_agent_id {
            if let Some(index) = working.iter().position(|p| p.agent_id == previous) {
                if fits(&working[index]) {
                    return Some((index, "Relationship preserved".to_string()));
                }
            }
        }
    }

    if options.respect_specialization {
        if account.balance > options.high_value_threshold {
            if let Some(index) = working
                .iter()
                .position(|p| p.has_tag(TAG_HIGH_VALUE) && fits(p))
            {
                return Some((index, "High-value specialist match".to_string()));
            }
        }
        if account.status == AccountStatus::Legal {
            if let Some(index) = working.iter().position(|p| p.has_tag(TAG_LEGAL) && fits(p)) {
                return Some((index, "Legal specialist match".to_string()));
            }
        }
    }

    // Best performer among remaining candidates; first in scan order wins
    // ties to keep the pass deterministic.
    let mut best: Option<usize> = None;
    for (index, profile) in working.iter().enumerate() {
        if !fits(profile) {
            continue;
        }
        match best {
            Some(current) if working[current].success_rate >= profile.success_rate => {}
            _ => best = Some(index),
        }
    }
    best.map(|index| {
        let rate = working[index].success_rate * 100.0;
        (index, format!("Best performer ({rate:.0}% success rate)"))
    })
}
