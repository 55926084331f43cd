//! Reshuffle Core - Entity Types
//!
//! Pure data structures with no behavior beyond validation helpers. All
//! other crates depend on this. The evaluator/profiler/planner logic lives
//! in `reshuffle-engine`; the committer and store live in
//! `reshuffle-storage`.

pub mod criteria;
pub mod entities;
pub mod enums;
pub mod error;
pub mod identity;
pub mod plan;

pub use criteria::{
    CriteriaSet, Criterion, CriterionRule, DEFAULT_HIGH_VALUE_AMOUNT, DEFAULT_OVERDUE_DAYS,
    DEFAULT_RISK_TIER, DEFAULT_STAGNANT_DAYS,
};
pub use entities::{
    Account, Agent, AgentProfile, DEFAULT_AGENT_CAPACITY, TAG_HIGH_VALUE, TAG_LEGAL,
};
pub use enums::{
    AccountStatus, AccountStatusParseError, AgentRole, AgentRoleParseError, RiskTier,
    RiskTierParseError,
};
pub use error::{ConfigError, ReshuffleError, ReshuffleResult, StorageError};
pub use identity::{new_account_id, new_agent_id, AccountId, AgentId, Timestamp};
pub use plan::{
    AssignmentProposal, AuditRecord, CommitFailure, CommitReport, FlaggedAccount, PlanReport,
    PlannerOptions, UnmatchedAccount, UnmatchedReason,
};
