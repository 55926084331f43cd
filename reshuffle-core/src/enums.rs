//! Enumerated case and roster attributes.
//!
//! Every enum carries a stable db-string representation so the surrounding
//! portfolio system can persist and round-trip values without depending on
//! Rust's derived serde names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ACCOUNT STATUS
// ============================================================================

/// Collection status of a debt account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    /// No contact attempted yet
    Pending,
    /// Debtor has been reached at least once
    Contacted,
    /// Debtor committed to a future payment
    PromiseToPay,
    /// A promise-to-pay was not honored
    BrokenPromise,
    /// Case escalated to legal proceedings
    Legal,
    /// Balance cleared, case closed
    Settled,
}

impl AccountStatus {
    /// Convert to database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "Pending",
            AccountStatus::Contacted => "Contacted",
            AccountStatus::PromiseToPay => "PromiseToPay",
            AccountStatus::BrokenPromise => "BrokenPromise",
            AccountStatus::Legal => "Legal",
            AccountStatus::Settled => "Settled",
        }
    }

    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Result<Self, AccountStatusParseError> {
        match s.to_lowercase().replace(['_', '-'], "").as_str() {
            "pending" => Ok(AccountStatus::Pending),
            "contacted" => Ok(AccountStatus::Contacted),
            "promisetopay" | "ptp" => Ok(AccountStatus::PromiseToPay),
            "brokenpromise" => Ok(AccountStatus::BrokenPromise),
            "legal" => Ok(AccountStatus::Legal),
            "settled" => Ok(AccountStatus::Settled),
            _ => Err(AccountStatusParseError(s.to_string())),
        }
    }

    /// Statuses that count toward an agent's success rate.
    pub fn is_positive_outcome(&self) -> bool {
        matches!(self, AccountStatus::Settled | AccountStatus::PromiseToPay)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for AccountStatus {
    type Err = AccountStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid account status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStatusParseError(pub String);

impl fmt::Display for AccountStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid account status: {}", self.0)
    }
}

impl std::error::Error for AccountStatusParseError {}

// ============================================================================
// RISK TIER
// ============================================================================

/// Coarse classification of collection difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Convert to database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
            RiskTier::Critical => "Critical",
        }
    }

    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Result<Self, RiskTierParseError> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskTier::Low),
            "medium" => Ok(RiskTier::Medium),
            "high" => Ok(RiskTier::High),
            "critical" => Ok(RiskTier::Critical),
            _ => Err(RiskTierParseError(s.to_string())),
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for RiskTier {
    type Err = RiskTierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid risk tier string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskTierParseError(pub String);

impl fmt::Display for RiskTierParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid risk tier: {}", self.0)
    }
}

impl std::error::Error for RiskTierParseError {}

// ============================================================================
// AGENT ROLE
// ============================================================================

/// Role of a roster member. Only collection roles receive reassigned work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    /// Desk collection agent
    Agent,
    /// Agent performing field visits
    FieldAgent,
    /// Supervisory role, excluded from assignment
    Supervisor,
    /// Administrative role, excluded from assignment
    Admin,
}

impl AgentRole {
    /// Convert to database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            AgentRole::Agent => "Agent",
            AgentRole::FieldAgent => "FieldAgent",
            AgentRole::Supervisor => "Supervisor",
            AgentRole::Admin => "Admin",
        }
    }

    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Result<Self, AgentRoleParseError> {
        match s.to_lowercase().replace(['_', '-'], "").as_str() {
            "agent" => Ok(AgentRole::Agent),
            "fieldagent" => Ok(AgentRole::FieldAgent),
            "supervisor" => Ok(AgentRole::Supervisor),
            "admin" => Ok(AgentRole::Admin),
            _ => Err(AgentRoleParseError(s.to_string())),
        }
    }

    /// Whether this role may hold collection accounts.
    pub fn is_collection_eligible(&self) -> bool {
        matches!(self, AgentRole::Agent | AgentRole::FieldAgent)
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

impl FromStr for AgentRole {
    type Err = AgentRoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s)
    }
}

/// Error when parsing an invalid agent role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRoleParseError(pub String);

impl fmt::Display for AgentRoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid agent role: {}", self.0)
    }
}

impl std::error::Error for AgentRoleParseError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_status_roundtrip() {
        for status in [
            AccountStatus::Pending,
            AccountStatus::Contacted,
            AccountStatus::PromiseToPay,
            AccountStatus::BrokenPromise,
            AccountStatus::Legal,
            AccountStatus::Settled,
        ] {
            let s = status.as_db_str();
            let parsed = AccountStatus::from_db_str(s).unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_account_status_parse_variants() {
        assert_eq!(
            AccountStatus::from_db_str("promise_to_pay").unwrap(),
            AccountStatus::PromiseToPay
        );
        assert_eq!(
            AccountStatus::from_db_str("broken-promise").unwrap(),
            AccountStatus::BrokenPromise
        );
        assert!(AccountStatus::from_db_str("written-off").is_err());
    }

    #[test]
    fn test_positive_outcomes() {
        assert!(AccountStatus::Settled.is_positive_outcome());
        assert!(AccountStatus::PromiseToPay.is_positive_outcome());
        assert!(!AccountStatus::BrokenPromise.is_positive_outcome());
        assert!(!AccountStatus::Legal.is_positive_outcome());
    }

    #[test]
    fn test_risk_tier_roundtrip() {
        for tier in [
            RiskTier::Low,
            RiskTier::Medium,
            RiskTier::High,
            RiskTier::Critical,
        ] {
            let s = tier.as_db_str();
            let parsed = RiskTier::from_db_str(s).unwrap();
            assert_eq!(tier, parsed);
        }
    }

    #[test]
    fn test_risk_tier_ordering() {
        assert!(RiskTier::Low < RiskTier::Critical);
        assert!(RiskTier::Medium < RiskTier::High);
    }

    #[test]
    fn test_agent_role_eligibility() {
        assert!(AgentRole::Agent.is_collection_eligible());
        assert!(AgentRole::FieldAgent.is_collection_eligible());
        assert!(!AgentRole::Supervisor.is_collection_eligible());
        assert!(!AgentRole::Admin.is_collection_eligible());
    }

    #[test]
    fn test_agent_role_roundtrip() {
        for role in [
            AgentRole::Agent,
            AgentRole::FieldAgent,
            AgentRole::Supervisor,
            AgentRole::Admin,
        ] {
            let s = role.as_db_str();
            let parsed = AgentRole::from_db_str(s).unwrap();
            assert_eq!(role, parsed);
        }
    }
}
