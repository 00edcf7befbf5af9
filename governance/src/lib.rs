//! Weighted-voting governance controller.
//!
//! Proposals are content-addressed batches of calls. The executor authority
//! binds a Merkle snapshot of voting weights to each proposal; holders then
//! vote with a membership proof for their `(account, weight)` leaf. Outcomes
//! are derived from the stored tallies on every query, and succeeded
//! proposals are handed to an external delay-enforcing executor.

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod executor;
pub mod identity;
pub mod outcome;
pub mod params;
pub mod proposal;

pub use config::GovernorConfig;
pub use engine::Governor;
pub use error::{ErrorKind, GovernanceError};
pub use event::GovernanceEvent;
pub use executor::{EligibilityLedger, Executor, ExecutorError};
pub use identity::{compute_id, description_hash, operation_id, queue_salt};
pub use outcome::{derive_state, ProposalState};
pub use params::{
    GovernableParam, MAX_ACTIONS_CEILING, MAX_VOTING_PERIOD_SECS, MIN_VOTING_PERIOD_SECS,
};
pub use proposal::{ActionBatch, ProposalRecord, ProposalView, Tally, VoteSupport};
