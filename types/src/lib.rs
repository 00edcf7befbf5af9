//! Fundamental types for the Ballot governance controller.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! account identifiers, 32-byte hashes, voting weights, timestamps, and the
//! process-wide governance parameters.

pub mod account;
pub mod error;
pub mod hash;
pub mod params;
pub mod serde_u128;
pub mod time;
pub mod weight;

pub use account::AccountId;
pub use error::TypesError;
pub use hash::{Hash256, OperationId, ProposalId, Salt, SnapshotRoot};
pub use params::GovernanceParams;
pub use time::Timestamp;
pub use weight::Weight;
