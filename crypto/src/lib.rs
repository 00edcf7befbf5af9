//! Cryptographic primitives for the Ballot governance controller.
//!
//! - **Blake2b-256** for every digest (proposal ids, salts, snapshot leaves and nodes)
//! - **Membership proofs**: sorted-pair Merkle proofs binding `(account, weight)`
//!   leaves to a committed snapshot root
//! - An off-chain [`SnapshotTree`] builder for tooling and tests; the governor
//!   itself only ever verifies

pub mod hash;
pub mod merkle;

pub use hash::{blake2b_256, blake2b_256_multi, tagged_hash};
pub use merkle::{leaf_hash, node_hash, verify_proof, MerkleError, SnapshotTree};
