//! Reshuffle Test Utilities
//!
//! Centralized test infrastructure for the Reshuffle workspace:
//! - Fixture constructors for accounts and roster agents
//! - Proptest generators for core types

// Re-export core types for convenience
pub use reshuffle_core::{
    Account, AccountId, AccountStatus, Agent, AgentId, AgentProfile, AgentRole, CriteriaSet,
    Criterion, FlaggedAccount, PlannerOptions, RiskTier, Timestamp, DEFAULT_AGENT_CAPACITY,
    TAG_HIGH_VALUE, TAG_LEGAL,
};

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

// ============================================================================
// FIXTURES
// ============================================================================

/// A fixed reference instant so fixtures and generators are reproducible.
pub fn fixed_now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// A healthy, recently contacted, unassigned account.
pub fn account(now: Timestamp) -> Account {
    Account {
        account_id: Uuid::now_v7(),
        balance: 1_000.0,
        days_overdue: 0,
        status: AccountStatus::Contacted,
        risk_tier: RiskTier::Low,
        last_contact_at: Some(now - Duration::days(1)),
        assigned_agent_id: None,
        created_at: now - Duration::days(120),
        updated_at: now,
        metadata: None,
    }
}

/// A collection-eligible roster agent with no specializations.
pub fn agent(name: &str) -> Agent {
    Agent {
        agent_id: Uuid::now_v7(),
        name: name.to_string(),
        role: AgentRole::Agent,
        specializations: Vec::new(),
        capacity: None,
    }
}

/// A specialist agent carrying the given tags.
pub fn specialist(name: &str, tags: &[&str]) -> Agent {
    Agent {
        specializations: tags.iter().map(|t| t.to_string()).collect(),
        ..agent(name)
    }
}

/// A profile snapshot for direct planner tests.
pub fn profile(agent_id: AgentId, load: i32, success_rate: f32) -> AgentProfile {
    AgentProfile {
        agent_id,
        current_load: load,
        success_rate,
        specializations: Vec::new(),
        capacity: DEFAULT_AGENT_CAPACITY,
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

/// Strategy over every account status.
pub fn arb_account_status() -> impl Strategy<Value = AccountStatus> {
    prop_oneof![
        Just(AccountStatus::Pending),
        Just(AccountStatus::Contacted),
        Just(AccountStatus::PromiseToPay),
        Just(AccountStatus::BrokenPromise),
        Just(AccountStatus::Legal),
        Just(AccountStatus::Settled),
    ]
}

/// Strategy over every risk tier.
pub fn arb_risk_tier() -> impl Strategy<Value = RiskTier> {
    prop_oneof![
        Just(RiskTier::Low),
        Just(RiskTier::Medium),
        Just(RiskTier::High),
        Just(RiskTier::Critical),
    ]
}

/// Strategy over every roster role.
pub fn arb_agent_role() -> impl Strategy<Value = AgentRole> {
    prop_oneof![
        Just(AgentRole::Agent),
        Just(AgentRole::FieldAgent),
        Just(AgentRole::Supervisor),
        Just(AgentRole::Admin),
    ]
}

/// Strategy over accounts anchored at [`fixed_now`].
///
/// Contact recency spans never-contacted through half a year stale so
/// evaluator properties exercise both sides of every threshold.
pub fn arb_account() -> impl Strategy<Value = Account> {
    (
        0.0f64..200_000.0,
        0i32..365,
        arb_account_status(),
        arb_risk_tier(),
        proptest::option::of(0i64..180),
        proptest::bool::ANY,
    )
        .prop_map(
            |(balance, days_overdue, status, risk_tier, contact_age, assigned)| {
                let now = fixed_now();
                Account {
                    account_id: Uuid::now_v7(),
                    balance,
                    days_overdue,
                    status,
                    risk_tier,
                    last_contact_at: contact_age.map(|d| now - Duration::days(d)),
                    assigned_agent_id: assigned.then(Uuid::now_v7),
                    created_at: now - Duration::days(365),
                    updated_at: now,
                    metadata: None,
                }
            },
        )
}
