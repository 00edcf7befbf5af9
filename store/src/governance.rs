//! Governance storage trait.

use crate::StoreError;
use ballot_types::{AccountId, ProposalId};

/// Key-value storage for proposal records and vote receipts.
///
/// Records are opaque bytes keyed by the content-addressed proposal id.
/// Each method is atomic on its own. The governor may follow a
/// `put_proposal` with a second one that restores the earlier bytes when
/// the executor refuses a batch.
pub trait GovernanceStore {
    /// Fetch a proposal record, or `None` if no proposal has this id.
    fn get_proposal(&self, id: &ProposalId) -> Result<Option<Vec<u8>>, StoreError>;

    /// Insert or overwrite a proposal record.
    fn put_proposal(&self, id: &ProposalId, data: &[u8]) -> Result<(), StoreError>;

    /// Whether `voter` already holds a vote receipt for this proposal.
    fn has_voted(&self, id: &ProposalId, voter: &AccountId) -> Result<bool, StoreError>;

    /// Store a vote receipt together with the updated proposal record.
    ///
    /// Fails with [`StoreError::Duplicate`] if the receipt already exists,
    /// in which case nothing is written.
    fn put_vote(
        &self,
        id: &ProposalId,
        voter: &AccountId,
        proposal_data: &[u8],
    ) -> Result<(), StoreError>;

    /// Number of stored proposals.
    fn proposal_count(&self) -> Result<u64, StoreError>;
}
