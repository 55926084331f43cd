//! Core entity structs: accounts, roster agents, and per-run agent profiles.

use crate::{AccountId, AccountStatus, AgentId, AgentRole, RiskTier, Timestamp};
use serde::{Deserialize, Serialize};

/// Default per-agent account capacity under workload balancing.
pub const DEFAULT_AGENT_CAPACITY: i32 = 50;

/// Specialization tag for agents handling large-balance accounts.
pub const TAG_HIGH_VALUE: &str = "high-value";

/// Specialization tag for agents handling cases in legal proceedings.
pub const TAG_LEGAL: &str = "legal";

/// A debt-collection case.
///
/// Created and updated by the surrounding portfolio system; read-only to the
/// pipeline. `assigned_agent_id` is the one field the Plan Committer mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    /// Outstanding balance owed.
    pub balance: f64,
    /// Days the payment has been late (DPD).
    pub days_overdue: i32,
    pub status: AccountStatus,
    pub risk_tier: RiskTier,
    /// Absent means the debtor has never been contacted.
    pub last_contact_at: Option<Timestamp>,
    /// Absent means the account is unassigned.
    pub assigned_agent_id: Option<AgentId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub metadata: Option<serde_json::Value>,
}

impl Account {
    /// Days elapsed since the last contact, if the debtor was ever contacted.
    pub fn days_since_contact(&self, now: Timestamp) -> Option<i64> {
        self.last_contact_at
            .map(|last| (now - last).num_days())
    }
}

/// A roster member as supplied by the surrounding user system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: AgentId,
    pub name: String,
    pub role: AgentRole,
    /// Externally supplied suitability labels (e.g. "high-value", "legal").
    pub specializations: Vec<String>,
    /// Per-agent capacity override; None falls back to [`DEFAULT_AGENT_CAPACITY`].
    pub capacity: Option<i32>,
}

impl Agent {
    /// Effective capacity for planning.
    pub fn effective_capacity(&self) -> i32 {
        self.capacity.unwrap_or(DEFAULT_AGENT_CAPACITY)
    }
}

/// Per-run performance and load snapshot for an eligible agent.
///
/// Created fresh by the profiler at the start of every run and mutated
/// in-memory by the planner as proposals accrue; never cached across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub agent_id: AgentId,
    /// Count of accounts currently assigned to this agent.
    pub current_load: i32,
    /// Fraction of this agent's accounts with a positive outcome, in [0, 1].
    pub success_rate: f32,
    pub specializations: Vec<String>,
    pub capacity: i32,
}

impl AgentProfile {
    /// Whether the agent can take one more account under capacity rules.
    pub fn has_spare_capacity(&self) -> bool {
        self.current_load < self.capacity
    }

    /// Whether the agent carries the given specialization tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.specializations.iter().any(|t| t == tag)
    }
}
