//! Snapshot membership proofs.
//!
//! A snapshot commits to a roster of `(account, weight)` pairs. Leaves and
//! interior nodes are domain-separated Blake2b-256 digests:
//!
//! ```text
//! leaf = H(0x00 || account[32] || weight as u128 big-endian[16])
//! node = H(0x01 || min(a, b)[32] || max(a, b)[32])
//! ```
//!
//! Pairs are sorted before hashing, so a proof is just the list of sibling
//! hashes from leaf to root with no left/right markers. Off-chain tooling must
//! build trees with exactly these rules or proofs will never verify.

use crate::hash::tagged_hash;
use ballot_types::{AccountId, Hash256, SnapshotRoot, Weight};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

const LEAF_TAG: u8 = 0x00;
const NODE_TAG: u8 = 0x01;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("snapshot roster is empty")]
    EmptyRoster,

    #[error("account {0} appears more than once in the roster")]
    DuplicateAccount(AccountId),
}

/// Leaf digest binding an account to its voting weight.
pub fn leaf_hash(account: &AccountId, weight: Weight) -> Hash256 {
    tagged_hash(&[LEAF_TAG], &[&account.as_bytes()[..], &weight.to_be_bytes()[..]])
}

/// Interior node digest; commutative in its arguments.
pub fn node_hash(a: &Hash256, b: &Hash256) -> Hash256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    tagged_hash(&[NODE_TAG], &[lo.as_bytes(), hi.as_bytes()])
}

/// Recompute the root from `leaf` and its sibling path and compare to `root`.
///
/// Proof length is not checked: an empty proof verifies exactly when the
/// tree has a single leaf and `root == leaf`.
pub fn verify_proof(root: &SnapshotRoot, leaf: &Hash256, proof: &[Hash256]) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |current, sibling| node_hash(&current, sibling));
    computed == *root
}

/// Off-chain snapshot tree built from a voting-power roster.
///
/// Leaves are sorted by digest so the root does not depend on roster order.
/// An unpaired node at the end of a level is promoted unchanged.
#[derive(Clone, Debug)]
pub struct SnapshotTree {
    /// `levels[0]` holds the sorted leaves, the last level holds the root.
    levels: Vec<Vec<Hash256>>,
    /// account → (leaf index, weight)
    index: HashMap<AccountId, (usize, Weight)>,
}

impl SnapshotTree {
    pub fn from_roster(roster: &[(AccountId, Weight)]) -> Result<Self, MerkleError> {
        if roster.is_empty() {
            return Err(MerkleError::EmptyRoster);
        }

        let mut leaves: Vec<(Hash256, AccountId, Weight)> = Vec::with_capacity(roster.len());
        let mut seen = HashSet::with_capacity(roster.len());
        for (account, weight) in roster {
            if !seen.insert(*account) {
                return Err(MerkleError::DuplicateAccount(*account));
            }
            leaves.push((leaf_hash(account, *weight), *account, *weight));
        }
        leaves.sort_by(|a, b| a.0.cmp(&b.0));

        let index = leaves
            .iter()
            .enumerate()
            .map(|(i, (_, account, weight))| (*account, (i, *weight)))
            .collect();

        let mut current: Vec<Hash256> = leaves.into_iter().map(|(h, _, _)| h).collect();
        let mut levels = Vec::new();
        while current.len() > 1 {
            let next = current
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => node_hash(a, b),
                    _ => pair[0],
                })
                .collect();
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Ok(Self { levels, index })
    }

    pub fn root(&self) -> SnapshotRoot {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or(Hash256::ZERO)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Weight recorded for `account`, if it is in the roster.
    pub fn weight_of(&self, account: &AccountId) -> Option<Weight> {
        self.index.get(account).map(|(_, weight)| *weight)
    }

    /// Sibling path from the account's leaf up to the root.
    pub fn proof(&self, account: &AccountId) -> Option<Vec<Hash256>> {
        let (mut position, _) = *self.index.get(account)?;
        let mut proof = Vec::with_capacity(self.levels.len());
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = position ^ 1;
            if let Some(hash) = level.get(sibling) {
                proof.push(*hash);
            }
            position /= 2;
        }
        Some(proof)
    }

    /// Accounts and weights in leaf order.
    pub fn roster(&self) -> Vec<(AccountId, Weight)> {
        let mut entries: Vec<_> = self
            .index
            .iter()
            .map(|(account, (i, weight))| (*i, *account, *weight))
            .collect();
        entries.sort_by_key(|(i, _, _)| *i);
        entries.into_iter().map(|(_, a, w)| (a, w)).collect()
    }
}
