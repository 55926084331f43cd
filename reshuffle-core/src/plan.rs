//! Planner and committer data types: options, proposals, and audit records.

use crate::criteria::DEFAULT_HIGH_VALUE_AMOUNT;
use crate::error::{ConfigError, StorageError};
use crate::{Account, AccountId, AgentId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavior switches for the Assignment Planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerOptions {
    /// Scan least-loaded agents first and enforce capacity.
    pub balance_workload: bool,
    /// Prefer agents whose specialization tags match the account.
    pub respect_specialization: bool,
    /// Keep an account with its current agent when that agent has room.
    pub preserve_relationships: bool,
    /// Balance at or above which an account is routed to a high-value
    /// specialist. Mirrors the high-value criterion threshold.
    pub high_value_threshold: f64,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            balance_workload: true,
            respect_specialization: true,
            preserve_relationships: true,
            high_value_threshold: DEFAULT_HIGH_VALUE_AMOUNT,
        }
    }
}

impl PlannerOptions {
    /// Replace a malformed threshold with the documented default.
    pub fn sanitize(mut self) -> (Self, Vec<ConfigError>) {
        let mut substitutions = Vec::new();
        if !(self.high_value_threshold > 0.0) {
            substitutions.push(ConfigError::InvalidValue {
                field: "high-value-threshold".to_string(),
                value: self.high_value_threshold.to_string(),
                reason: format!("threshold must be positive, using {DEFAULT_HIGH_VALUE_AMOUNT}"),
            });
            self.high_value_threshold = DEFAULT_HIGH_VALUE_AMOUNT;
        }
        (self, substitutions)
    }
}

/// An account that matched at least one active criterion, with every
/// matched reason in criterion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedAccount {
    pub account: Account,
    pub reasons: Vec<String>,
}

/// A candidate reassignment produced by the planner. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentProposal {
    pub account_id: AccountId,
    pub target_agent_id: AgentId,
    pub previous_agent_id: Option<AgentId>,
    /// Human-readable justification carried into the audit trail.
    pub reason: String,
}

/// Why a flagged account could not be matched to any agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnmatchedReason {
    /// Profiling yielded no collection-eligible agents at all.
    NoEligibleAgents,
    /// Every candidate was at capacity.
    CapacityExhausted,
}

impl fmt::Display for UnmatchedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedReason::NoEligibleAgents => write!(f, "no eligible agents"),
            UnmatchedReason::CapacityExhausted => write!(f, "all candidates at capacity"),
        }
    }
}

/// A flagged account the planner could not place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedAccount {
    pub account_id: AccountId,
    pub reason: UnmatchedReason,
}

/// Full output of one planning pass.
///
/// `unmatched` is first-class: "reshuffle needed but no agent available" is
/// a different outcome from "nothing needed reshuffling", and callers must
/// never infer it from a count mismatch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanReport {
    pub proposals: Vec<AssignmentProposal>,
    pub unmatched: Vec<UnmatchedAccount>,
}

impl PlanReport {
    /// True when every flagged account received a proposal.
    pub fn is_fully_matched(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// One committed ownership change. Append-only; never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub account_id: AccountId,
    pub previous_agent_id: Option<AgentId>,
    pub new_agent_id: AgentId,
    pub reason: String,
    pub timestamp: Timestamp,
}

/// A proposal the external store rejected during commit.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitFailure {
    pub proposal: AssignmentProposal,
    pub error: StorageError,
}

/// Outcome of applying one plan as a batch.
///
/// Updates already applied are never rolled back when a later row fails;
/// both subsets are reported so partial completion is visible, not hidden.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommitReport {
    pub applied: Vec<AuditRecord>,
    pub failed: Vec<CommitFailure>,
}

impl CommitReport {
    /// True when the whole batch was applied.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_options_defaults() {
        let opts = PlannerOptions::default();
        assert!(opts.balance_workload);
        assert!(opts.respect_specialization);
        assert!(opts.preserve_relationships);
        assert_eq!(opts.high_value_threshold, DEFAULT_HIGH_VALUE_AMOUNT);
    }

    #[test]
    fn test_planner_options_sanitize() {
        let opts = PlannerOptions {
            high_value_threshold: -1.0,
            ..PlannerOptions::default()
        };
        let (clean, errors) = opts.sanitize();
        assert_eq!(errors.len(), 1);
        assert_eq!(clean.high_value_threshold, DEFAULT_HIGH_VALUE_AMOUNT);
    }

    #[test]
    fn test_plan_report_matching_flags() {
        let report = PlanReport::default();
        assert!(report.is_fully_matched());

        let report = PlanReport {
            proposals: vec![],
            unmatched: vec![UnmatchedAccount {
                account_id: uuid::Uuid::now_v7(),
                reason: UnmatchedReason::CapacityExhausted,
            }],
        };
        assert!(!report.is_fully_matched());
    }

    #[test]
    fn test_unmatched_reason_display() {
        assert_eq!(
            UnmatchedReason::NoEligibleAgents.to_string(),
            "no eligible agents"
        );
        assert_eq!(
            UnmatchedReason::CapacityExhausted.to_string(),
            "all candidates at capacity"
        );
    }
}
