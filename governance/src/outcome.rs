//! Outcome derivation.
//!
//! A proposal's lifecycle state is never stored. It is recomputed from the
//! record's raw facts (voting window, tallies, snapshot and execution flags)
//! and the current time on every query.

use crate::proposal::ProposalRecord;
use ballot_types::{Timestamp, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalState {
    /// No proposal with this id.
    None,
    /// Voting window still open.
    Active,
    /// Closed without snapshot, quorum, or a strict majority.
    Defeated,
    /// Closed with quorum and a strict majority; ready to queue.
    Succeeded,
    /// Handed to the executor, awaiting execution.
    Queued,
    /// Executed by the executor.
    Executed,
}

impl fmt::Display for ProposalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Active => "active",
            Self::Defeated => "defeated",
            Self::Succeeded => "succeeded",
            Self::Queued => "queued",
            Self::Executed => "executed",
        })
    }
}

/// Derive the state of `record` at `now`.
///
/// Quorum counts for, against and abstain weight; the majority comparison
/// counts only for and against, and a tie is a defeat. A quorum of zero
/// disables the quorum check.
pub fn derive_state(
    record: Option<&ProposalRecord>,
    now: Timestamp,
    quorum: Weight,
) -> ProposalState {
    let Some(record) = record else {
        return ProposalState::None;
    };
    if record.voting_closes_at.is_epoch() {
        return ProposalState::None;
    }
    if record.is_open(now) {
        return ProposalState::Active;
    }
    // executed implies queued, so check it first
    if record.executed {
        return ProposalState::Executed;
    }
    if record.queued {
        return ProposalState::Queued;
    }
    if !record.snapshot_bound {
        return ProposalState::Defeated;
    }
    if !quorum.is_zero() && record.tally.total() < quorum {
        return ProposalState::Defeated;
    }
    if record.tally.for_votes <= record.tally.against_votes {
        return ProposalState::Defeated;
    }
    ProposalState::Succeeded
}
