//! Governable parameters and their administration bounds.
//!
//! Only the executor authority may change parameters. Changes apply to
//! proposals created afterwards; an existing proposal keeps the voting
//! window it captured at creation.

use crate::error::GovernanceError;
use ballot_types::GovernanceParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest allowed voting window (1 hour).
pub const MIN_VOTING_PERIOD_SECS: u64 = 3_600;

/// Longest allowed voting window (30 days).
pub const MAX_VOTING_PERIOD_SECS: u64 = 30 * 24 * 3_600;

/// Hard ceiling on actions per proposal.
pub const MAX_ACTIONS_CEILING: u32 = 50;

/// Parameters that the administration setters can change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernableParam {
    VotingPeriod,
    Quorum,
    ProposalThreshold,
    MaxActions,
}

impl GovernableParam {
    /// Human-readable name of this parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Self::VotingPeriod => "voting_period_secs",
            Self::Quorum => "quorum",
            Self::ProposalThreshold => "proposal_threshold",
            Self::MaxActions => "max_actions",
        }
    }

    /// Current value of this parameter in `params`.
    pub fn read(&self, params: &GovernanceParams) -> u128 {
        match self {
            Self::VotingPeriod => params.voting_period_secs as u128,
            Self::Quorum => params.quorum.raw(),
            Self::ProposalThreshold => params.proposal_threshold,
            Self::MaxActions => params.max_actions as u128,
        }
    }
}

impl fmt::Display for GovernableParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn validate_voting_period(secs: u64) -> Result<(), GovernanceError> {
    if !(MIN_VOTING_PERIOD_SECS..=MAX_VOTING_PERIOD_SECS).contains(&secs) {
        return Err(GovernanceError::ParameterOutOfRange {
            param: GovernableParam::VotingPeriod,
            value: secs as u128,
            min: MIN_VOTING_PERIOD_SECS as u128,
            max: MAX_VOTING_PERIOD_SECS as u128,
        });
    }
    Ok(())
}

pub fn validate_max_actions(max_actions: u32) -> Result<(), GovernanceError> {
    if !(1..=MAX_ACTIONS_CEILING).contains(&max_actions) {
        return Err(GovernanceError::ParameterOutOfRange {
            param: GovernableParam::MaxActions,
            value: max_actions as u128,
            min: 1,
            max: MAX_ACTIONS_CEILING as u128,
        });
    }
    Ok(())
}

/// Apply the administration bounds to a full parameter set.
///
/// Quorum and proposal threshold are unbounded.
pub fn validate_params(params: &GovernanceParams) -> Result<(), GovernanceError> {
    validate_voting_period(params.voting_period_secs)?;
    validate_max_actions(params.max_actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_types::Weight;

    #[test]
    fn voting_period_bounds_are_inclusive() {
        assert!(validate_voting_period(MIN_VOTING_PERIOD_SECS).is_ok());
        assert!(validate_voting_period(MAX_VOTING_PERIOD_SECS).is_ok());
        assert!(validate_voting_period(MIN_VOTING_PERIOD_SECS - 1).is_err());
        assert!(validate_voting_period(MAX_VOTING_PERIOD_SECS + 1).is_err());
    }

    #[test]
    fn max_actions_rejects_zero_and_above_ceiling() {
        assert!(validate_max_actions(0).is_err());
        assert!(validate_max_actions(1).is_ok());
        assert!(validate_max_actions(MAX_ACTIONS_CEILING).is_ok());
        assert!(matches!(
            validate_max_actions(MAX_ACTIONS_CEILING + 1),
            Err(GovernanceError::ParameterOutOfRange {
                param: GovernableParam::MaxActions,
                ..
            })
        ));
    }

    #[test]
    fn defaults_are_within_bounds() {
        assert!(validate_params(&GovernanceParams::default()).is_ok());
    }

    #[test]
    fn read_reports_each_field() {
        let params = GovernanceParams {
            voting_period_secs: 7_200,
            quorum: Weight::new(500),
            proposal_threshold: 9,
            max_actions: 4,
        };
        assert_eq!(GovernableParam::VotingPeriod.read(&params), 7_200);
        assert_eq!(GovernableParam::Quorum.read(&params), 500);
        assert_eq!(GovernableParam::ProposalThreshold.read(&params), 9);
        assert_eq!(GovernableParam::MaxActions.read(&params), 4);
    }
}
