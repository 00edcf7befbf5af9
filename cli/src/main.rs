//! `ballot`: off-chain tooling for the weighted-voting governor.
//!
//! Computes the same digests the governor computes, so proposers and
//! snapshot publishers can prepare inputs without running a governor.

mod input;

use anyhow::{bail, Context};
use ballot_crypto::{leaf_hash, verify_proof, SnapshotTree};
use ballot_governance::{
    compute_id, description_hash, operation_id, queue_salt, GovernorConfig, MAX_ACTIONS_CEILING,
};
use ballot_types::{AccountId, Hash256, Weight};
use ballot_utils::{format_duration, init_logging, LogFormat};
use clap::Parser;
use input::{ProposalFile, RosterFile};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ballot", about = "Weighted-voting governance tooling")]
struct Cli {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Falls back to the config file's `log_level`, then "warn".
    #[arg(long, env = "BALLOT_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    /// Falls back to the config file's `log_format`, then "human".
    #[arg(long, env = "BALLOT_LOG_FORMAT", global = true)]
    log_format: Option<LogFormat>,

    /// Path to a governor TOML configuration file.
    #[arg(long, env = "BALLOT_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Compute a proposal's id and, given a governor identity, its queue salt.
    Id {
        /// Proposal TOML file with `description` and `[[actions]]`.
        #[arg(long)]
        proposal: PathBuf,

        /// Governor identity (hex). Falls back to the config file's identity.
        #[arg(long, env = "BALLOT_IDENTITY")]
        identity: Option<AccountId>,
    },

    /// Hash one snapshot leaf.
    Leaf {
        #[arg(long)]
        account: AccountId,

        #[arg(long)]
        weight: u128,
    },

    /// Build a snapshot tree from a roster and print its root and proofs.
    Snapshot {
        /// Roster TOML file with `[[members]]` entries.
        #[arg(long)]
        roster: PathBuf,
    },

    /// Check a membership proof against a snapshot root.
    VerifyProof {
        #[arg(long)]
        root: Hash256,

        #[arg(long)]
        account: AccountId,

        #[arg(long)]
        weight: u128,

        /// Sibling hashes, comma-separated hex, leaf to root.
        #[arg(long, value_delimiter = ',')]
        proof: Vec<Hash256>,
    },

    /// Parse and validate a governor configuration file.
    CheckConfig,
}

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the log format and level: command line or environment first, then
/// the config file, then the defaults.
fn logging_settings(
    format: Option<LogFormat>,
    level: Option<String>,
    config: Option<&GovernorConfig>,
) -> (LogFormat, String) {
    let format = format.or(config.map(|c| c.log_format)).unwrap_or_default();
    let level = level
        .or_else(|| config.map(|c| c.log_level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    (format, level)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .config
        .as_ref()
        .map(GovernorConfig::from_toml_file)
        .transpose()?;
    let (log_format, log_level) = logging_settings(cli.log_format, cli.log_level, config.as_ref());
    init_logging(log_format, &log_level);

    match cli.command {
        Command::Id { proposal, identity } => {
            let file = ProposalFile::load(&proposal)?;
            let batch = file.batch()?;
            batch.validate(MAX_ACTIONS_CEILING)?;
            let desc_hash = description_hash(&file.description);
            let id = compute_id(&batch, &desc_hash);
            tracing::debug!(proposal = %id, actions = batch.targets.len(), "computed id");

            let identity = identity.or(config.as_ref().map(|c| c.identity));

            let mut out = json!({
                "id": id,
                "description_hash": desc_hash,
            });
            if let Some(identity) = identity {
                let salt = queue_salt(&id, &desc_hash, &identity);
                out["salt"] = json!(salt);
                out["operation_id"] = json!(operation_id(&batch, &Hash256::ZERO, &salt));
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Leaf { account, weight } => {
            println!("{}", leaf_hash(&account, Weight::new(weight)));
        }
        Command::Snapshot { roster } => {
            let roster = RosterFile::load(&roster)?;
            let tree = SnapshotTree::from_roster(&roster.entries())?;
            tracing::info!(members = tree.len(), root = %tree.root(), "snapshot built");

            let mut proofs = serde_json::Map::new();
            for (account, weight) in tree.roster() {
                let proof = tree
                    .proof(&account)
                    .with_context(|| format!("no proof for {account}"))?;
                proofs.insert(
                    account.to_string(),
                    json!({ "weight": weight, "proof": proof }),
                );
            }
            let out = json!({ "root": tree.root(), "members": proofs });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::VerifyProof {
            root,
            account,
            weight,
            proof,
        } => {
            let leaf = leaf_hash(&account, Weight::new(weight));
            if !verify_proof(&root, &leaf, &proof) {
                bail!("proof for {account} with weight {weight} does not reach root {root}");
            }
            println!("valid");
        }
        Command::CheckConfig => {
            let (Some(path), Some(config)) = (cli.config, config) else {
                bail!("--config (or BALLOT_CONFIG) is required for check-config");
            };
            config.validate()?;
            tracing::info!(config = %path.display(), "configuration valid");
            println!("authority {}", config.authority);
            println!("identity {}", config.identity);
            println!(
                "voting period {}",
                format_duration(config.params.voting_period_secs)
            );
            println!("quorum {}", config.params.quorum);
            println!("proposal threshold {}", config.params.proposal_threshold);
            println!("max actions {}", config.params.max_actions);
            println!("log {} at {}", config.log_format, config.log_level);
        }
    }

    Ok(())
}
