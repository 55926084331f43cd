//! Reshuffle criteria configuration.
//!
//! Each criterion is one variant of a sum type, so a rule cannot exist
//! without the payload its predicate needs (no "high-value rule with a
//! missing threshold"). A criterion is active by being present in the set;
//! disabling a rule means omitting it.

use crate::error::ConfigError;
use crate::RiskTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default threshold for the stagnant-contact criterion, in days.
pub const DEFAULT_STAGNANT_DAYS: i64 = 30;

/// Default balance threshold for the high-value criterion.
pub const DEFAULT_HIGH_VALUE_AMOUNT: f64 = 50_000.0;

/// Default threshold for the overdue-days criterion.
pub const DEFAULT_OVERDUE_DAYS: i32 = 90;

/// Default tier for the risk-tier criterion.
pub const DEFAULT_RISK_TIER: RiskTier = RiskTier::Critical;

/// One neglect/risk rule over an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Criterion {
    /// Last contact happened, but at least `days` days ago.
    StagnantContact { days: i64 },
    /// No contact has ever been recorded.
    NeverContacted,
    /// The account status is broken-promise.
    BrokenPromise,
    /// Outstanding balance is at least `amount`.
    HighValue { amount: f64 },
    /// Payment is at least `days` days late.
    OverdueDays { days: i32 },
    /// The account's risk tier equals `tier`.
    RiskTier { tier: RiskTier },
}

impl Criterion {
    /// Stable configuration key for this criterion kind.
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::StagnantContact { .. } => "stagnant-contact-days",
            Criterion::NeverContacted => "never-contacted",
            Criterion::BrokenPromise => "broken-promise",
            Criterion::HighValue { .. } => "high-value",
            Criterion::OverdueDays { .. } => "overdue-days",
            Criterion::RiskTier { .. } => "risk-tier",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// An active criterion plus advisory metadata from the configuration UI.
///
/// `priority` is carried through for display purposes only; flagging is a
/// pure OR of all active criteria and never consults it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionRule {
    pub criterion: Criterion,
    pub priority: i32,
}

impl CriterionRule {
    pub fn new(criterion: Criterion) -> Self {
        Self {
            criterion,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// The set of active criteria for one reshuffle run.
///
/// Supplied once per run by the configuration surface; never mutated during
/// evaluation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CriteriaSet {
    pub rules: Vec<CriterionRule>,
}

impl CriteriaSet {
    /// An empty set: nothing gets flagged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from bare criteria with default (zero) priorities.
    pub fn from_criteria(criteria: impl IntoIterator<Item = Criterion>) -> Self {
        Self {
            rules: criteria.into_iter().map(CriterionRule::new).collect(),
        }
    }

    /// The standard configuration: all six criteria at documented defaults.
    pub fn standard() -> Self {
        Self::from_criteria([
            Criterion::StagnantContact {
                days: DEFAULT_STAGNANT_DAYS,
            },
            Criterion::NeverContacted,
            Criterion::BrokenPromise,
            Criterion::HighValue {
                amount: DEFAULT_HIGH_VALUE_AMOUNT,
            },
            Criterion::OverdueDays {
                days: DEFAULT_OVERDUE_DAYS,
            },
            Criterion::RiskTier {
                tier: DEFAULT_RISK_TIER,
            },
        ])
    }

    /// Iterate the active criteria in configuration order.
    pub fn criteria(&self) -> impl Iterator<Item = &Criterion> {
        self.rules.iter().map(|r| &r.criterion)
    }

    /// Replace malformed thresholds with their documented defaults.
    ///
    /// A configuration error never aborts a run: every non-positive
    /// threshold is substituted and reported so the caller can log it.
    pub fn sanitize(mut self) -> (Self, Vec<ConfigError>) {
        let mut substitutions = Vec::new();
        for rule in &mut self.rules {
            match &mut rule.criterion {
                Criterion::StagnantContact { days } if *days <= 0 => {
                    substitutions.push(ConfigError::InvalidValue {
                        field: "stagnant-contact-days".to_string(),
                        value: days.to_string(),
                        reason: format!("threshold must be positive, using {DEFAULT_STAGNANT_DAYS}"),
                    });
                    *days = DEFAULT_STAGNANT_DAYS;
                }
                Criterion::HighValue { amount } if !(*amount > 0.0) => {
                    substitutions.push(ConfigError::InvalidValue {
                        field: "high-value".to_string(),
                        value: amount.to_string(),
                        reason: format!("threshold must be positive, using {DEFAULT_HIGH_VALUE_AMOUNT}"),
                    });
                    *amount = DEFAULT_HIGH_VALUE_AMOUNT;
                }
                Criterion::OverdueDays { days } if *days <= 0 => {
                    substitutions.push(ConfigError::InvalidValue {
                        field: "overdue-days".to_string(),
                        value: days.to_string(),
                        reason: format!("threshold must be positive, using {DEFAULT_OVERDUE_DAYS}"),
                    });
                    *days = DEFAULT_OVERDUE_DAYS;
                }
                _ => {}
            }
        }
        (self, substitutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_has_all_six() {
        let set = CriteriaSet::standard();
        let keys: Vec<&str> = set.criteria().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec![
                "stagnant-contact-days",
                "never-contacted",
                "broken-promise",
                "high-value",
                "overdue-days",
                "risk-tier",
            ]
        );
    }

    #[test]
    fn test_sanitize_substitutes_defaults() {
        let set = CriteriaSet::from_criteria([
            Criterion::StagnantContact { days: -5 },
            Criterion::HighValue { amount: 0.0 },
            Criterion::OverdueDays { days: 0 },
        ]);
        let (clean, errors) = set.sanitize();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            clean.rules[0].criterion,
            Criterion::StagnantContact {
                days: DEFAULT_STAGNANT_DAYS
            }
        );
        assert_eq!(
            clean.rules[1].criterion,
            Criterion::HighValue {
                amount: DEFAULT_HIGH_VALUE_AMOUNT
            }
        );
        assert_eq!(
            clean.rules[2].criterion,
            Criterion::OverdueDays {
                days: DEFAULT_OVERDUE_DAYS
            }
        );
    }

    #[test]
    fn test_sanitize_substitutes_nan_amount() {
        let set = CriteriaSet::from_criteria([Criterion::HighValue { amount: f64::NAN }]);
        let (clean, errors) = set.sanitize();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            clean.rules[0].criterion,
            Criterion::HighValue {
                amount: DEFAULT_HIGH_VALUE_AMOUNT
            }
        );
    }

    #[test]
    fn test_sanitize_keeps_valid_thresholds() {
        let set = CriteriaSet::standard();
        let (clean, errors) = set.clone().sanitize();
        assert!(errors.is_empty());
        assert_eq!(clean, set);
    }

    #[test]
    fn test_priority_is_advisory_metadata() {
        let rule = CriterionRule::new(Criterion::NeverContacted).with_priority(7);
        assert_eq!(rule.priority, 7);
        assert_eq!(rule.criterion.key(), "never-contacted");
    }

    #[test]
    fn test_criterion_serde_tagging() {
        let json = serde_json::to_value(Criterion::StagnantContact { days: 30 }).unwrap();
        assert_eq!(json["kind"], "stagnant-contact");
        let back: Criterion = serde_json::from_value(json).unwrap();
        assert_eq!(back, Criterion::StagnantContact { days: 30 });
    }
}
