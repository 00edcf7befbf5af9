use crate::executor::ExecutorError;
use crate::outcome::ProposalState;
use crate::params::GovernableParam;
use ballot_store::StoreError;
use ballot_types::{AccountId, ProposalId};
use thiserror::Error;

/// Broad failure category, for callers deciding whether to retry with
/// corrected input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller is not the executor authority.
    Authorization,
    /// Malformed input.
    Validation,
    /// The proposal is not in a state that allows the operation.
    StateConflict,
    /// A membership proof did not reconstruct the bound root.
    CryptoVerification,
    /// Proposer's ledger balance is below the proposal threshold.
    Eligibility,
    /// The external executor rejected the call.
    External,
    /// Storage or encoding failure.
    Internal,
}

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("caller {0} is not the executor authority")]
    Unauthorized(AccountId),

    #[error("action arrays differ: {targets} targets, {values} values, {payloads} payloads")]
    ActionLengthMismatch {
        targets: usize,
        values: usize,
        payloads: usize,
    },

    #[error("proposal has no actions")]
    EmptyProposal,

    #[error("too many actions: {count} > {max}")]
    TooManyActions { count: usize, max: u32 },

    #[error("unrecognised vote support code {0}")]
    InvalidVoteSupport(u8),

    #[error("{param} value {value} is outside {min}..={max}")]
    ParameterOutOfRange {
        param: GovernableParam,
        value: u128,
        min: u128,
        max: u128,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("proposal {0} already exists")]
    ProposalExists(ProposalId),

    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("voting on proposal {0} has closed")]
    VotingClosed(ProposalId),

    #[error("snapshot root for proposal {0} is already bound")]
    SnapshotAlreadyBound(ProposalId),

    #[error("no snapshot root bound for proposal {0}")]
    SnapshotNotBound(ProposalId),

    #[error("account {voter} has already voted on proposal {id}")]
    AlreadyVoted { id: ProposalId, voter: AccountId },

    #[error("proposal {id} is {state}, not succeeded")]
    ProposalNotSucceeded { id: ProposalId, state: ProposalState },

    #[error("proposal {0} is already queued")]
    AlreadyQueued(ProposalId),

    #[error("proposal {0} is not queued")]
    NotQueued(ProposalId),

    #[error("proposal {0} has already been executed")]
    AlreadyExecuted(ProposalId),

    #[error("membership proof for {voter} does not match the snapshot root of proposal {id}")]
    InvalidProof { id: ProposalId, voter: AccountId },

    #[error("proposer eligibility {have} is below the proposal threshold {need}")]
    BelowProposalThreshold { have: u128, need: u128 },

    #[error("executor error: {0}")]
    Executor(#[from] ExecutorError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("executor rejected proposal {id} ({cause}); restoring its record failed: {rollback}")]
    RollbackFailed {
        id: ProposalId,
        cause: ExecutorError,
        rollback: StoreError,
    },

    #[error("record encoding error: {0}")]
    Codec(String),

    #[error("arithmetic overflow")]
    Overflow,
}

impl GovernanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized(_) => ErrorKind::Authorization,
            Self::ActionLengthMismatch { .. }
            | Self::EmptyProposal
            | Self::TooManyActions { .. }
            | Self::InvalidVoteSupport(_)
            | Self::ParameterOutOfRange { .. }
            | Self::Config(_) => ErrorKind::Validation,
            Self::ProposalExists(_)
            | Self::ProposalNotFound(_)
            | Self::VotingClosed(_)
            | Self::SnapshotAlreadyBound(_)
            | Self::SnapshotNotBound(_)
            | Self::AlreadyVoted { .. }
            | Self::ProposalNotSucceeded { .. }
            | Self::AlreadyQueued(_)
            | Self::NotQueued(_)
            | Self::AlreadyExecuted(_) => ErrorKind::StateConflict,
            Self::InvalidProof { .. } => ErrorKind::CryptoVerification,
            Self::BelowProposalThreshold { .. } => ErrorKind::Eligibility,
            Self::Executor(_) => ErrorKind::External,
            Self::Store(_) | Self::RollbackFailed { .. } | Self::Codec(_) | Self::Overflow => {
                ErrorKind::Internal
            }
        }
    }
}
