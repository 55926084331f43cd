//! Reshuffle Storage - Account Store Trait and Plan Committer
//!
//! Defines the ownership-state abstraction the committer writes through.
//! Real persistence belongs to the surrounding portfolio system; the
//! in-memory implementation here backs tests and embedded callers.

use reshuffle_core::{
    Account, AccountId, AgentId, AssignmentProposal, AuditRecord, CommitFailure, CommitReport,
    StorageError, Timestamp,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// ============================================================================
// STORE TRAIT
// ============================================================================

/// Storage abstraction for account ownership and the audit trail.
///
/// The audit trail is append-only: implementations must never mutate or
/// delete existing records.
pub trait AccountStore: Send + Sync {
    /// Get an account by ID.
    fn account_get(&self, id: AccountId) -> Result<Option<Account>, StorageError>;

    /// List all accounts.
    fn account_list(&self) -> Result<Vec<Account>, StorageError>;

    /// Insert a new account.
    fn account_insert(&self, account: &Account) -> Result<(), StorageError>;

    /// Reassign an account to an agent, stamping `updated_at`.
    fn account_assign(
        &self,
        id: AccountId,
        agent_id: AgentId,
        updated_at: Timestamp,
    ) -> Result<(), StorageError>;

    /// Append one audit record.
    fn audit_insert(&self, record: &AuditRecord) -> Result<(), StorageError>;

    /// List all audit records in append order.
    fn audit_list(&self) -> Result<Vec<AuditRecord>, StorageError>;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Thread-safe in-memory implementation of [`AccountStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
    audit: Arc<RwLock<Vec<AuditRecord>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from an account snapshot.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let map: HashMap<AccountId, Account> = accounts
            .into_iter()
            .map(|account| (account.account_id, account))
            .collect();
        Self {
            accounts: Arc::new(RwLock::new(map)),
            audit: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn account_get(&self, id: AccountId) -> Result<Option<Account>, StorageError> {
        let map = self.accounts.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(map.get(&id).cloned())
    }

    fn account_list(&self) -> Result<Vec<Account>, StorageError> {
        let map = self.accounts.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut accounts: Vec<Account> = map.values().cloned().collect();
        // HashMap iteration order is arbitrary; keep listings stable.
        accounts.sort_by_key(|a| a.account_id);
        Ok(accounts)
    }

    fn account_insert(&self, account: &Account) -> Result<(), StorageError> {
        let mut map = self
            .accounts
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        if map.contains_key(&account.account_id) {
            return Err(StorageError::InsertFailed {
                id: account.account_id,
                reason: "account already exists".to_string(),
            });
        }
        map.insert(account.account_id, account.clone());
        Ok(())
    }

    fn account_assign(
        &self,
        id: AccountId,
        agent_id: AgentId,
        updated_at: Timestamp,
    ) -> Result<(), StorageError> {
        let mut map = self
            .accounts
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        let account = map
            .get_mut(&id)
            .ok_or(StorageError::AccountNotFound { id })?;
        account.assigned_agent_id = Some(agent_id);
        account.updated_at = updated_at;
        Ok(())
    }

    fn audit_insert(&self, record: &AuditRecord) -> Result<(), StorageError> {
        let mut log = self.audit.write().map_err(|_| StorageError::LockPoisoned)?;
        log.push(record.clone());
        Ok(())
    }

    fn audit_list(&self) -> Result<Vec<AuditRecord>, StorageError> {
        let log = self.audit.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(log.clone())
    }
}

// ============================================================================
// PLAN COMMITTER
// ============================================================================

/// Apply a finalized plan as one logical batch.
///
/// Proposals are applied sequentially; each success appends one audit
/// record. A rejected row is collected into [`CommitReport::failed`] and
/// the batch carries on — updates already applied are never rolled back,
/// so partial completion is an expected, reported outcome. Invoke at most
/// once per finalized plan; concurrent commits over overlapping accounts
/// must be serialized by the caller.
pub fn commit(
    store: &dyn AccountStore,
    proposals: &[AssignmentProposal],
    now: Timestamp,
) -> CommitReport {
    let mut report = CommitReport::default();

    for proposal in proposals {
        match store.account_assign(proposal.account_id, proposal.target_agent_id, now) {
            Ok(()) => {
                let record = AuditRecord {
                    account_id: proposal.account_id,
                    previous_agent_id: proposal.previous_agent_id,
                    new_agent_id: proposal.target_agent_id,
                    reason: proposal.reason.clone(),
                    timestamp: now,
                };
                match store.audit_insert(&record) {
                    Ok(()) => report.applied.push(record),
                    // The assignment stands; only the audit write failed.
                    Err(error) => {
                        tracing::error!(
                            account_id = %proposal.account_id,
                            error = %error,
                            "audit append failed after assignment"
                        );
                        report.failed.push(CommitFailure {
                            proposal: proposal.clone(),
                            error,
                        });
                    }
                }
            }
            Err(error) => {
                tracing::warn!(
                    account_id = %proposal.account_id,
                    target_agent_id = %proposal.target_agent_id,
                    error = %error,
                    "assignment rejected by store"
                );
                report.failed.push(CommitFailure {
                    proposal: proposal.clone(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        applied = report.applied.len(),
        failed = report.failed.len(),
        "plan commit finished"
    );
    report
}

// ============================================================================
// TESTS
// ============================================================================
