//! TOML input files read by the CLI.

use anyhow::Context;
use ballot_governance::ActionBatch;
use ballot_types::{AccountId, Weight};
use serde::Deserialize;
use std::path::Path;

/// A proposal as written by hand:
///
/// ```toml
/// description = "Fund the audit"
///
/// [[actions]]
/// target = "70707070..."
/// value = 0
/// payload = "deadbeef"
/// ```
#[derive(Debug, Deserialize)]
pub struct ProposalFile {
    pub description: String,
    pub actions: Vec<ActionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ActionEntry {
    pub target: AccountId,
    #[serde(default, with = "ballot_types::serde_u128")]
    pub value: u128,
    /// Hex-encoded call data.
    #[serde(default)]
    pub payload: String,
}

impl ProposalFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading proposal file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing proposal file {}", path.display()))
    }

    pub fn batch(&self) -> anyhow::Result<ActionBatch> {
        let mut batch = ActionBatch::new();
        for (i, action) in self.actions.iter().enumerate() {
            let payload = hex::decode(action.payload.trim_start_matches("0x"))
                .with_context(|| format!("action {i}: payload is not hex"))?;
            batch.push(action.target, action.value, payload);
        }
        Ok(batch)
    }
}

/// A weight roster:
///
/// ```toml
/// [[members]]
/// account = "a1a1a1a1..."
/// weight = 100
/// ```
#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub members: Vec<RosterEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RosterEntry {
    pub account: AccountId,
    pub weight: Weight,
}

impl RosterFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading roster file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing roster file {}", path.display()))
    }

    pub fn entries(&self) -> Vec<(AccountId, Weight)> {
        self.members.iter().map(|m| (m.account, m.weight)).collect()
    }
}
