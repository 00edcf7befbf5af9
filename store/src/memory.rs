//! In-memory governance store.

use crate::governance::GovernanceStore;
use crate::StoreError;
use ballot_types::{AccountId, ProposalId};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    proposals: BTreeMap<ProposalId, Vec<u8>>,
    receipts: HashSet<(ProposalId, AccountId)>,
}

/// A thread-safe in-memory [`GovernanceStore`].
///
/// Proposals and receipts live behind one lock so `put_vote` is atomic.
#[derive(Default)]
pub struct MemoryGovernanceStore {
    inner: Mutex<Inner>,
}

impl MemoryGovernanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("governance store lock poisoned".into()))
    }
}

impl GovernanceStore for MemoryGovernanceStore {
    fn get_proposal(&self, id: &ProposalId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock()?.proposals.get(id).cloned())
    }

    fn put_proposal(&self, id: &ProposalId, data: &[u8]) -> Result<(), StoreError> {
        self.lock()?.proposals.insert(*id, data.to_vec());
        Ok(())
    }

    fn has_voted(&self, id: &ProposalId, voter: &AccountId) -> Result<bool, StoreError> {
        Ok(self.lock()?.receipts.contains(&(*id, *voter)))
    }

    fn put_vote(
        &self,
        id: &ProposalId,
        voter: &AccountId,
        proposal_data: &[u8],
    ) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if !inner.receipts.insert((*id, *voter)) {
            tracing::debug!(proposal = %id, voter = %voter, "duplicate vote receipt rejected");
            return Err(StoreError::Duplicate(format!("vote {id}/{voter}")));
        }
        inner.proposals.insert(*id, proposal_data.to_vec());
        Ok(())
    }

    fn proposal_count(&self) -> Result<u64, StoreError> {
        Ok(self.lock()?.proposals.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_types::Hash256;

    fn id(seed: u8) -> ProposalId {
        Hash256::new([seed; 32])
    }

    fn voter(seed: u8) -> AccountId {
        AccountId::new([seed; 32])
    }

    #[test]
    fn missing_proposal_is_none() {
        let store = MemoryGovernanceStore::new();
        assert_eq!(store.get_proposal(&id(1)).unwrap(), None);
        assert_eq!(store.proposal_count().unwrap(), 0);
    }

    #[test]
    fn put_then_get() {
        let store = MemoryGovernanceStore::new();
        store.put_proposal(&id(1), b"record").unwrap();
        assert_eq!(store.get_proposal(&id(1)).unwrap(), Some(b"record".to_vec()));
        assert_eq!(store.proposal_count().unwrap(), 1);
    }

    #[test]
    fn put_vote_writes_receipt_and_record() {
        let store = MemoryGovernanceStore::new();
        store.put_proposal(&id(1), b"v0").unwrap();
        store.put_vote(&id(1), &voter(9), b"v1").unwrap();
        assert!(store.has_voted(&id(1), &voter(9)).unwrap());
        assert!(!store.has_voted(&id(1), &voter(8)).unwrap());
        assert!(!store.has_voted(&id(2), &voter(9)).unwrap());
        assert_eq!(store.get_proposal(&id(1)).unwrap(), Some(b"v1".to_vec()));
    }

    #[test]
    fn duplicate_vote_writes_nothing() {
        let store = MemoryGovernanceStore::new();
        store.put_vote(&id(1), &voter(9), b"v1").unwrap();
        let err = store.put_vote(&id(1), &voter(9), b"v2").unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
        assert_eq!(store.get_proposal(&id(1)).unwrap(), Some(b"v1".to_vec()));
    }
}
