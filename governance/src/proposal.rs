//! Governance proposals: action batches, tallies, and the stored record.

use crate::error::GovernanceError;
use crate::outcome::{derive_state, ProposalState};
use ballot_types::{AccountId, Hash256, ProposalId, Salt, SnapshotRoot, Timestamp, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The calls a proposal asks the executor to perform, as three parallel arrays.
///
/// Entry `i` of each array together forms one `(target, value, payload)` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBatch {
    pub targets: Vec<AccountId>,
    pub values: Vec<u128>,
    pub payloads: Vec<Vec<u8>>,
}

impl ActionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one call.
    pub fn push(&mut self, target: AccountId, value: u128, payload: impl Into<Vec<u8>>) {
        self.targets.push(target);
        self.values.push(value);
        self.payloads.push(payload.into());
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_action(
        mut self,
        target: AccountId,
        value: u128,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        self.push(target, value, payload);
        self
    }

    /// Number of calls, or an error if the arrays disagree.
    pub fn len(&self) -> Result<usize, GovernanceError> {
        let n = self.targets.len();
        if self.values.len() != n || self.payloads.len() != n {
            return Err(GovernanceError::ActionLengthMismatch {
                targets: n,
                values: self.values.len(),
                payloads: self.payloads.len(),
            });
        }
        Ok(n)
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty() && self.values.is_empty() && self.payloads.is_empty()
    }

    /// Check shape: equal lengths, non-empty, at most `max_actions` calls.
    pub fn validate(&self, max_actions: u32) -> Result<usize, GovernanceError> {
        let n = self.len()?;
        if n == 0 {
            return Err(GovernanceError::EmptyProposal);
        }
        if n > max_actions as usize {
            return Err(GovernanceError::TooManyActions {
                count: n,
                max: max_actions,
            });
        }
        Ok(n)
    }
}

/// Vote direction. Wire codes: 0 against, 1 for, 2 abstain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteSupport {
    Against = 0,
    For = 1,
    Abstain = 2,
}

impl VoteSupport {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for VoteSupport {
    type Error = GovernanceError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Against),
            1 => Ok(Self::For),
            2 => Ok(Self::Abstain),
            other => Err(GovernanceError::InvalidVoteSupport(other)),
        }
    }
}

impl fmt::Display for VoteSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Against => "against",
            Self::For => "for",
            Self::Abstain => "abstain",
        })
    }
}

/// Weighted vote totals. Each accumulator only ever grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub for_votes: Weight,
    pub against_votes: Weight,
    pub abstain_votes: Weight,
}

impl Tally {
    /// Tally with `weight` credited to `support`, or `None` on overflow.
    pub fn credited(&self, support: VoteSupport, weight: Weight) -> Option<Tally> {
        let mut next = *self;
        let slot = match support {
            VoteSupport::For => &mut next.for_votes,
            VoteSupport::Against => &mut next.against_votes,
            VoteSupport::Abstain => &mut next.abstain_votes,
        };
        *slot = slot.checked_add(weight)?;
        Some(next)
    }

    /// Sum of all three accumulators (saturating; used only for quorum).
    pub fn total(&self) -> Weight {
        self.for_votes
            .saturating_add(self.against_votes)
            .saturating_add(self.abstain_votes)
    }
}

/// The stored state of one proposal.
///
/// Everything except `tally`, the snapshot fields, `queued`, `executed` and
/// `salt` is fixed at creation. The set of voters lives in the store as vote
/// receipts rather than inside the record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub id: ProposalId,
    pub proposer: AccountId,
    pub actions: ActionBatch,
    pub description_hash: Hash256,
    pub created_at: Timestamp,
    pub voting_closes_at: Timestamp,
    pub tally: Tally,
    pub snapshot_root: Option<SnapshotRoot>,
    pub snapshot_bound: bool,
    pub queued: bool,
    pub executed: bool,
    pub salt: Option<Salt>,
}

impl ProposalRecord {
    /// Whether votes and snapshot binding are still accepted at `now`.
    pub fn is_open(&self, now: Timestamp) -> bool {
        now < self.voting_closes_at
    }

    /// Lifecycle state at `now` under `quorum`.
    pub fn state_at(&self, now: Timestamp, quorum: Weight) -> ProposalState {
        derive_state(Some(self), now, quorum)
    }

    pub fn encode(&self) -> Result<Vec<u8>, GovernanceError> {
        bincode::serialize(self).map_err(|e| GovernanceError::Codec(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, GovernanceError> {
        bincode::deserialize(bytes).map_err(|e| GovernanceError::Codec(e.to_string()))
    }
}

/// Read-only summary of a proposal.
///
/// Unknown proposals map to the all-zero default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalView {
    pub voting_starts_at: Timestamp,
    pub voting_closes_at: Timestamp,
    pub snapshot_bound: bool,
    pub queued: bool,
    pub executed: bool,
    pub for_votes: Weight,
    pub against_votes: Weight,
    pub abstain_votes: Weight,
    pub snapshot_root: SnapshotRoot,
}

impl From<&ProposalRecord> for ProposalView {
    fn from(record: &ProposalRecord) -> Self {
        Self {
            voting_starts_at: record.created_at,
            voting_closes_at: record.voting_closes_at,
            snapshot_bound: record.snapshot_bound,
            queued: record.queued,
            executed: record.executed,
            for_votes: record.tally.for_votes,
            against_votes: record.tally.against_votes,
            abstain_votes: record.tally.abstain_votes,
            snapshot_root: record.snapshot_root.unwrap_or(Hash256::ZERO),
        }
    }
}
