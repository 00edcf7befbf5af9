//! External collaborators: the delay-enforcing executor and the share ledger.
//!
//! The governor owns one of each. Neither is implemented here; production
//! deployments plug in their own timelock and ledger, tests use the
//! nullables crate.

use crate::proposal::ActionBatch;
use ballot_types::{AccountId, Hash256, OperationId, Salt};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("operation {0} is already scheduled")]
    AlreadyScheduled(OperationId),

    #[error("operation {0} is not scheduled")]
    UnknownOperation(OperationId),

    #[error("operation {0} is not ready yet")]
    NotReady(OperationId),

    #[error("operation {0} has already been executed")]
    AlreadyDone(OperationId),

    #[error("call to {target} failed: {reason}")]
    CallFailed { target: AccountId, reason: String },

    #[error("{0}")]
    Other(String),
}

/// The timelock that schedules approved batches and later performs them.
///
/// It owns delay enforcement; the governor only submits the batch with a
/// zero predecessor and a per-proposal salt, then asks for execution with
/// the same parameters.
pub trait Executor {
    /// Delay the executor applies to newly scheduled batches, in seconds.
    fn min_delay(&self) -> u64;

    /// Schedule `batch` to become executable after `delay` seconds.
    fn schedule(
        &mut self,
        batch: &ActionBatch,
        predecessor: &Hash256,
        salt: &Salt,
        delay: u64,
    ) -> Result<(), ExecutorError>;

    /// Perform a previously scheduled batch, forwarding `value`.
    fn execute(
        &mut self,
        batch: &ActionBatch,
        predecessor: &Hash256,
        salt: &Salt,
        value: u128,
    ) -> Result<(), ExecutorError>;
}

/// The share ledger consulted for proposal submission.
pub trait EligibilityLedger {
    /// Eligibility balance of `account`, compared against the proposal threshold.
    fn eligibility(&self, account: &AccountId) -> u128;
}
