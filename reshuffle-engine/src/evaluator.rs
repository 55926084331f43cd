//! Criteria Evaluator - flags neglected or risky accounts.
//!
//! Flagging is a pure OR over the active criteria: an account is included
//! when at least one predicate matches, with one human-readable reason per
//! match, collected in configuration order. `now` is always supplied by the
//! caller; the evaluator never reads a wall clock.

use reshuffle_core::{Account, AccountStatus, CriteriaSet, Criterion, FlaggedAccount, Timestamp};

/// Scan the account set and flag every account matching at least one
/// active criterion.
pub fn evaluate(accounts: &[Account], criteria: &CriteriaSet, now: Timestamp) -> Vec<FlaggedAccount> {
    accounts
        .iter()
        .filter_map(|account| {
            let reasons: Vec<String> = criteria
                .criteria()
                .filter_map(|criterion| match_reason(criterion, account, now))
                .collect();
            if reasons.is_empty() {
                None
            } else {
                Some(FlaggedAccount {
                    account: account.clone(),
                    reasons,
                })
            }
        })
        .collect()
}

/// Evaluate one criterion against one account, returning the reason string
/// on a match.
fn match_reason(criterion: &Criterion, account: &Account, now: Timestamp) -> Option<String> {
    match criterion {
        Criterion::StagnantContact { days } => {
            let elapsed = account.days_since_contact(now)?;
            (elapsed >= *days).then(|| format!("Stagnant for {elapsed} days"))
        }
        Criterion::NeverContacted => account
            .last_contact_at
            .is_none()
            .then(|| "Never contacted".to_string()),
        Criterion::BrokenPromise => (account.status == AccountStatus::BrokenPromise)
            .then(|| "Broken promise on record".to_string()),
        Criterion::HighValue { amount } => (account.balance >= *amount)
            .then(|| format!("High-value account: {:.2}", account.balance)),
        Criterion::OverdueDays { days } => (account.days_overdue >= *days)
            .then(|| format!("Overdue for {} days", account.days_overdue)),
        Criterion::RiskTier { tier } => {
            (account.risk_tier == *tier).then(|| format!("Risk tier {tier}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use reshuffle_core::{AccountStatus, CriteriaSet, Criterion, RiskTier};
    use reshuffle_test_utils::{account, fixed_now};

    #[test]
    fn test_stagnant_account_flagged_with_elapsed_days() {
        let now = fixed_now();
        let acct = Account {
            last_contact_at: Some(now - Duration::days(45)),
            ..account(now)
        };
        let criteria = CriteriaSet::from_criteria([Criterion::StagnantContact { days: 30 }]);

        let flagged = evaluate(&[acct], &criteria, now);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].reasons, vec!["Stagnant for 45 days"]);
    }

    #[test]
    fn test_stagnant_requires_prior_contact() {
        let now = fixed_now();
        let acct = Account {
            last_contact_at: None,
            ..account(now)
        };
        let criteria = CriteriaSet::from_criteria([Criterion::StagnantContact { days: 30 }]);
        assert!(evaluate(&[acct], &criteria, now).is_empty());
    }

    #[test]
    fn test_never_contacted() {
        let now = fixed_now();
        let acct = Account {
            last_contact_at: None,
            ..account(now)
        };
        let criteria = CriteriaSet::from_criteria([Criterion::NeverContacted]);

        let flagged = evaluate(&[acct], &criteria, now);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].reasons, vec!["Never contacted"]);
    }

    #[test]
    fn test_broken_promise() {
        let now = fixed_now();
        let acct = Account {
            status: AccountStatus::BrokenPromise,
            ..account(now)
        };
        let criteria = CriteriaSet::from_criteria([Criterion::BrokenPromise]);
        assert_eq!(evaluate(&[acct], &criteria, now).len(), 1);
    }

    #[test]
    fn test_high_value_threshold_is_inclusive() {
        let now = fixed_now();
        let at = Account {
            balance: 50_000.0,
            ..account(now)
        };
        let below = Account {
            balance: 49_999.99,
            ..account(now)
        };
        let criteria = CriteriaSet::from_criteria([Criterion::HighValue { amount: 50_000.0 }]);

        assert_eq!(evaluate(&[at], &criteria, now).len(), 1);
        assert!(evaluate(&[below], &criteria, now).is_empty());
    }

    #[test]
    fn test_overdue_days() {
        let now = fixed_now();
        let acct = Account {
            days_overdue: 120,
            ..account(now)
        };
        let criteria = CriteriaSet::from_criteria([Criterion::OverdueDays { days: 90 }]);

        let flagged = evaluate(&[acct], &criteria, now);
        assert_eq!(flagged[0].reasons, vec!["Overdue for 120 days"]);
    }

    #[test]
    fn test_risk_tier_match() {
        let now = fixed_now();
        let acct = Account {
            risk_tier: RiskTier::Critical,
            ..account(now)
        };
        let criteria = CriteriaSet::from_criteria([Criterion::RiskTier {
            tier: RiskTier::Critical,
        }]);

        let flagged = evaluate(&[acct], &criteria, now);
        assert_eq!(flagged[0].reasons, vec!["Risk tier Critical"]);
    }

    #[test]
    fn test_multiple_reasons_collected_in_config_order() {
        let now = fixed_now();
        let acct = Account {
            balance: 80_000.0,
            days_overdue: 200,
            status: AccountStatus::BrokenPromise,
            last_contact_at: None,
            ..account(now)
        };
        let criteria = CriteriaSet::standard();

        let flagged = evaluate(&[acct], &criteria, now);
        assert_eq!(flagged.len(), 1);
        assert_eq!(
            flagged[0].reasons,
            vec![
                "Never contacted",
                "Broken promise on record",
                "High-value account: 80000.00",
                "Overdue for 200 days",
            ]
        );
    }

    #[test]
    fn test_healthy_account_not_flagged() {
        let now = fixed_now();
        assert!(evaluate(&[account(now)], &CriteriaSet::standard(), now).is_empty());
    }

    #[test]
    fn test_empty_criteria_flags_nothing() {
        let now = fixed_now();
        let acct = Account {
            status: AccountStatus::BrokenPromise,
            last_contact_at: None,
            ..account(now)
        };
        assert!(evaluate(&[acct], &CriteriaSet::empty(), now).is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let now = fixed_now();
        let accounts = vec![
            Account {
                days_overdue: 100,
                ..account(now)
            },
            account(now),
            Account {
                last_contact_at: None,
                ..account(now)
            },
        ];
        let criteria = CriteriaSet::standard();

        let first = evaluate(&accounts, &criteria, now);
        let second = evaluate(&accounts, &criteria, now);
        assert_eq!(first, second);
    }
}
