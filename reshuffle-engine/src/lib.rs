//! Reshuffle Engine - the evaluation → profiling → planning pipeline.
//!
//! All three stages are pure, synchronous, and bounded by input size; the
//! only side-effecting stage (the committer) lives in `reshuffle-storage`.
//! `run` wires the stages together for the preview/review flow and logs
//! stage boundaries; callers wanting finer control invoke the stages
//! directly.

pub mod evaluator;
pub mod planner;
pub mod profiler;

pub use evaluator::evaluate;
pub use planner::plan;
pub use profiler::profile;

use reshuffle_core::{
    Account, Agent, AgentProfile, CriteriaSet, FlaggedAccount, PlanReport, PlannerOptions,
    Timestamp,
};

/// Everything a caller needs to preview one reshuffle run before commit.
#[derive(Debug, Clone, PartialEq)]
pub struct ReshuffleOutcome {
    pub flagged: Vec<FlaggedAccount>,
    pub profiles: Vec<AgentProfile>,
    pub plan: PlanReport,
}

/// Run the full pure pipeline over one portfolio snapshot.
///
/// Malformed configuration never aborts the run: thresholds are substituted
/// with their documented defaults and each substitution is logged. `now` is
/// supplied by the caller so the run is reproducible.
pub fn run(
    accounts: &[Account],
    roster: &[Agent],
    criteria: &CriteriaSet,
    options: &PlannerOptions,
    now: Timestamp,
) -> ReshuffleOutcome {
    let (criteria, substitutions) = criteria.clone().sanitize();
    for error in &substitutions {
        tracing::warn!(error = %error, "substituted default for malformed criterion");
    }
    let (options, substitutions) = options.clone().sanitize();
    for error in &substitutions {
        tracing::warn!(error = %error, "substituted default for malformed planner option");
    }

    let flagged = evaluate(accounts, &criteria, now);
    tracing::info!(
        scanned = accounts.len(),
        flagged = flagged.len(),
        "criteria evaluation complete"
    );

    let profiles = profile(roster, accounts);
    if profiles.is_empty() {
        tracing::warn!("no collection-eligible agents in roster");
    }

    let plan = planner::plan(&flagged, &profiles, &options);
    tracing::info!(
        proposals = plan.proposals.len(),
        unmatched = plan.unmatched.len(),
        "assignment planning complete"
    );

    ReshuffleOutcome {
        flagged,
        profiles,
        plan,
    }
}
