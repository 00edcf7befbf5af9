//! Events emitted by the governor.
//!
//! Each event carries enough data for an observer to rebuild proposal and
//! parameter history without reading storage.

use crate::params::GovernableParam;
use crate::proposal::{ActionBatch, VoteSupport};
use ballot_types::{
    AccountId, Hash256, OperationId, ProposalId, Salt, SnapshotRoot, Timestamp, Weight,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernanceEvent {
    ProposalCreated {
        id: ProposalId,
        proposer: AccountId,
        actions: ActionBatch,
        description: String,
        description_hash: Hash256,
        created_at: Timestamp,
        voting_closes_at: Timestamp,
    },
    SnapshotBound {
        id: ProposalId,
        root: SnapshotRoot,
    },
    VoteCast {
        id: ProposalId,
        voter: AccountId,
        support: VoteSupport,
        weight: Weight,
    },
    ProposalQueued {
        id: ProposalId,
        salt: Salt,
        operation_id: OperationId,
        delay_secs: u64,
    },
    ProposalExecuted {
        id: ProposalId,
        #[serde(with = "ballot_types::serde_u128")]
        value: u128,
    },
    ParameterChanged {
        param: GovernableParam,
        #[serde(with = "ballot_types::serde_u128")]
        old: u128,
        #[serde(with = "ballot_types::serde_u128")]
        new: u128,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_is_externally_tagged() {
        let event = GovernanceEvent::VoteCast {
            id: Hash256::new([1; 32]),
            voter: AccountId::new([2; 32]),
            support: VoteSupport::For,
            weight: Weight::new(100),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["vote_cast"]["support"], "for");
        assert_eq!(json["vote_cast"]["weight"], 100);
        assert_eq!(json["vote_cast"]["voter"], "02".repeat(32));
    }

    #[test]
    fn parameter_event_round_trips_full_width_values() {
        let event = GovernanceEvent::ParameterChanged {
            param: GovernableParam::Quorum,
            old: 0,
            new: u128::MAX,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GovernanceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
