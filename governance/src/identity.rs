//! Content-addressed proposal identity, queue salts, and executor operation ids.
//!
//! All digests are Blake2b-256 over a domain tag followed by a canonical
//! encoding. Off-chain callers recompute ids with the same encoding:
//!
//! ```text
//! batch     = u32be(n_targets)  || target[32]...
//!          || u32be(n_values)   || value as u128 big-endian[16]...
//!          || u32be(n_payloads) || (u32be(len) || payload)...
//! id        = H("ballot/proposal-id/v1" || batch || H(description))
//! salt      = H("ballot/queue-salt/v1"  || id || H(description) || governor[32])
//! operation = H("ballot/operation/v1"   || batch || predecessor[32] || salt)
//! ```
//!
//! Array lengths are encoded separately, so malformed batches still hash
//! unambiguously.

use crate::proposal::ActionBatch;
use ballot_crypto::{blake2b_256, tagged_hash};
use ballot_types::{AccountId, Hash256, OperationId, ProposalId, Salt};

const PROPOSAL_ID_TAG: &[u8] = b"ballot/proposal-id/v1";
const QUEUE_SALT_TAG: &[u8] = b"ballot/queue-salt/v1";
const OPERATION_TAG: &[u8] = b"ballot/operation/v1";

/// Hash of a proposal's human-readable description.
pub fn description_hash(description: &str) -> Hash256 {
    blake2b_256(description.as_bytes())
}

/// Identifier of a proposal with these actions and description hash.
pub fn compute_id(actions: &ActionBatch, description_hash: &Hash256) -> ProposalId {
    let encoded = encode_batch(actions);
    tagged_hash(PROPOSAL_ID_TAG, &[&encoded[..], &description_hash.as_bytes()[..]])
}

/// Salt submitted with a queued batch, unique per proposal and per governor deployment.
pub fn queue_salt(id: &ProposalId, description_hash: &Hash256, governor: &AccountId) -> Salt {
    tagged_hash(
        QUEUE_SALT_TAG,
        &[&id.as_bytes()[..], &description_hash.as_bytes()[..], &governor.as_bytes()[..]],
    )
}

/// Identifier an executor can use for a scheduled batch.
pub fn operation_id(actions: &ActionBatch, predecessor: &Hash256, salt: &Salt) -> OperationId {
    let encoded = encode_batch(actions);
    tagged_hash(
        OPERATION_TAG,
        &[&encoded[..], &predecessor.as_bytes()[..], &salt.as_bytes()[..]],
    )
}

fn encode_batch(actions: &ActionBatch) -> Vec<u8> {
    let payload_bytes: usize = actions.payloads.iter().map(|p| p.len() + 4).sum();
    let mut out = Vec::with_capacity(
        12 + actions.targets.len() * 32 + actions.values.len() * 16 + payload_bytes,
    );

    out.extend_from_slice(&(actions.targets.len() as u32).to_be_bytes());
    for target in &actions.targets {
        out.extend_from_slice(target.as_bytes());
    }

    out.extend_from_slice(&(actions.values.len() as u32).to_be_bytes());
    for value in &actions.values {
        out.extend_from_slice(&value.to_be_bytes());
    }

    out.extend_from_slice(&(actions.payloads.len() as u32).to_be_bytes());
    for payload in &actions.payloads {
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(payload);
    }
    out
}
