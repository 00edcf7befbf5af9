//! Governance parameters: the thresholds every proposal is measured against.
//!
//! Mutated only through the bounded administration setters, which only the
//! executor authority may call.

use crate::weight::Weight;
use serde::{Deserialize, Serialize};

/// Process-wide governance parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceParams {
    /// Length of the voting window in seconds, captured by each proposal at creation.
    #[serde(default = "default_voting_period_secs")]
    pub voting_period_secs: u64,

    /// Minimum total weight (for + against + abstain) for a proposal to pass.
    /// Zero disables the check.
    #[serde(default)]
    pub quorum: Weight,

    /// Eligibility balance a proposer must hold on the share ledger.
    #[serde(default, with = "crate::serde_u128")]
    pub proposal_threshold: u128,

    /// Maximum number of actions in a single proposal.
    #[serde(default = "default_max_actions")]
    pub max_actions: u32,
}

fn default_voting_period_secs() -> u64 {
    3 * 24 * 3600 // 3 days
}

fn default_max_actions() -> u32 {
    10
}

impl Default for GovernanceParams {
    fn default() -> Self {
        Self {
            voting_period_secs: default_voting_period_secs(),
            quorum: Weight::ZERO,
            proposal_threshold: 0,
            max_actions: default_max_actions(),
        }
    }
}
