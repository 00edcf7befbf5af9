//! The governor: proposal lifecycle over a store, an executor and a ledger.
//!
//! Every mutating operation runs all of its checks before touching storage.
//! Operations that stay inside the governor finish with one store write.
//! `queue` and `execute` also call the executor: they write the new record
//! first, call out, and write the previous bytes back if the executor fails.

use crate::config::GovernorConfig;
use crate::error::GovernanceError;
use crate::event::GovernanceEvent;
use crate::executor::{EligibilityLedger, Executor, ExecutorError};
use crate::identity::{compute_id, description_hash, operation_id, queue_salt};
use crate::outcome::{derive_state, ProposalState};
use crate::params::{
    validate_max_actions, validate_params, validate_voting_period, GovernableParam,
};
use crate::proposal::{ActionBatch, ProposalRecord, ProposalView, Tally, VoteSupport};
use ballot_crypto::{leaf_hash, verify_proof};
use ballot_store::{GovernanceStore, StoreError};
use ballot_types::{
    AccountId, GovernanceParams, Hash256, ProposalId, Salt, SnapshotRoot, Timestamp, Weight,
};
use ballot_utils::format_duration;

/// Weighted-voting governance controller.
pub struct Governor<S, E, L> {
    authority: AccountId,
    identity: AccountId,
    params: GovernanceParams,
    store: S,
    executor: E,
    ledger: L,
    pending_events: Vec<GovernanceEvent>,
}

impl<S, E, L> Governor<S, E, L>
where
    S: GovernanceStore,
    E: Executor,
    L: EligibilityLedger,
{
    /// Build a governor from `config`, rejecting out-of-range initial parameters.
    pub fn new(
        config: &GovernorConfig,
        store: S,
        executor: E,
        ledger: L,
    ) -> Result<Self, GovernanceError> {
        validate_params(&config.params)?;
        tracing::info!(
            authority = %config.authority,
            identity = %config.identity,
            voting_period = %format_duration(config.params.voting_period_secs),
            quorum = %config.params.quorum,
            "governor initialised"
        );
        Ok(Self {
            authority: config.authority,
            identity: config.identity,
            params: config.params.clone(),
            store,
            executor,
            ledger,
            pending_events: Vec::new(),
        })
    }

    // ── Proposals ───────────────────────────────────────────────────────

    /// Submit a new proposal. Voting opens immediately and closes one
    /// voting period later; no snapshot is bound yet.
    pub fn propose(
        &mut self,
        caller: AccountId,
        actions: ActionBatch,
        description: &str,
        now: Timestamp,
    ) -> Result<ProposalId, GovernanceError> {
        actions.validate(self.params.max_actions)?;

        let have = self.ledger.eligibility(&caller);
        if have < self.params.proposal_threshold {
            tracing::debug!(proposer = %caller, have = %have, "proposer below threshold");
            return Err(GovernanceError::BelowProposalThreshold {
                have,
                need: self.params.proposal_threshold,
            });
        }

        let desc_hash = description_hash(description);
        let id = compute_id(&actions, &desc_hash);
        if self.store.get_proposal(&id)?.is_some() {
            return Err(GovernanceError::ProposalExists(id));
        }

        let voting_closes_at = now
            .checked_add_secs(self.params.voting_period_secs)
            .ok_or(GovernanceError::Overflow)?;

        let record = ProposalRecord {
            id,
            proposer: caller,
            actions,
            description_hash: desc_hash,
            created_at: now,
            voting_closes_at,
            tally: Tally::default(),
            snapshot_root: None,
            snapshot_bound: false,
            queued: false,
            executed: false,
            salt: None,
        };
        self.store.put_proposal(&id, &record.encode()?)?;

        tracing::info!(
            proposal = %id,
            proposer = %caller,
            actions = record.actions.targets.len(),
            closes_in = %format_duration(self.params.voting_period_secs),
            "proposal created"
        );
        self.pending_events.push(GovernanceEvent::ProposalCreated {
            id,
            proposer: caller,
            actions: record.actions,
            description: description.to_string(),
            description_hash: desc_hash,
            created_at: now,
            voting_closes_at,
        });
        Ok(id)
    }

    /// Bind the weight snapshot a proposal is voted against. Authority only,
    /// once, while voting is open.
    pub fn set_snapshot_root(
        &mut self,
        caller: AccountId,
        id: ProposalId,
        root: SnapshotRoot,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        self.require_authority(&caller)?;
        let mut record = self.load(&id)?;
        if !record.is_open(now) {
            return Err(GovernanceError::VotingClosed(id));
        }
        if record.snapshot_bound {
            return Err(GovernanceError::SnapshotAlreadyBound(id));
        }

        record.snapshot_root = Some(root);
        record.snapshot_bound = true;
        self.store.put_proposal(&id, &record.encode()?)?;

        tracing::info!(proposal = %id, root = %root, "snapshot bound");
        self.pending_events
            .push(GovernanceEvent::SnapshotBound { id, root });
        Ok(())
    }

    /// Cast a weighted vote. `proof` must place `leaf_hash(caller, weight)`
    /// under the proposal's snapshot root.
    pub fn cast_vote(
        &mut self,
        caller: AccountId,
        id: ProposalId,
        support: u8,
        weight: Weight,
        proof: &[Hash256],
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        let mut record = self.load(&id)?;
        if !record.is_open(now) {
            return Err(GovernanceError::VotingClosed(id));
        }
        let root = match (record.snapshot_bound, record.snapshot_root) {
            (true, Some(root)) => root,
            _ => return Err(GovernanceError::SnapshotNotBound(id)),
        };
        let support = VoteSupport::try_from(support)?;
        if self.store.has_voted(&id, &caller)? {
            return Err(GovernanceError::AlreadyVoted { id, voter: caller });
        }
        if !verify_proof(&root, &leaf_hash(&caller, weight), proof) {
            tracing::warn!(proposal = %id, voter = %caller, "membership proof rejected");
            return Err(GovernanceError::InvalidProof { id, voter: caller });
        }

        record.tally = record
            .tally
            .credited(support, weight)
            .ok_or(GovernanceError::Overflow)?;
        match self.store.put_vote(&id, &caller, &record.encode()?) {
            Ok(()) => {}
            Err(StoreError::Duplicate(_)) => {
                return Err(GovernanceError::AlreadyVoted { id, voter: caller })
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            proposal = %id,
            voter = %caller,
            support = %support,
            weight = %weight,
            "vote cast"
        );
        self.pending_events.push(GovernanceEvent::VoteCast {
            id,
            voter: caller,
            support,
            weight,
        });
        Ok(())
    }

    /// Lifecycle state of `id` at `now`, derived from the stored facts.
    pub fn state(
        &self,
        id: &ProposalId,
        now: Timestamp,
    ) -> Result<ProposalState, GovernanceError> {
        let record = self.fetch(id)?;
        Ok(derive_state(record.as_ref(), now, self.params.quorum))
    }

    // ── Executor handoff ────────────────────────────────────────────────

    /// Hand a succeeded proposal to the executor. Returns the salt the
    /// batch was scheduled under.
    ///
    /// The queued flag and salt are written before the executor is asked to
    /// schedule. If it refuses, the previous record is restored.
    pub fn queue(&mut self, id: ProposalId, now: Timestamp) -> Result<Salt, GovernanceError> {
        let mut record = self.load(&id)?;
        match record.state_at(now, self.params.quorum) {
            ProposalState::Succeeded => {}
            ProposalState::Queued => return Err(GovernanceError::AlreadyQueued(id)),
            ProposalState::Executed => return Err(GovernanceError::AlreadyExecuted(id)),
            state => return Err(GovernanceError::ProposalNotSucceeded { id, state }),
        }

        let previous = record.encode()?;
        let salt = queue_salt(&id, &record.description_hash, &self.identity);
        let delay = self.executor.min_delay();
        record.queued = true;
        record.salt = Some(salt);
        self.store.put_proposal(&id, &record.encode()?)?;

        if let Err(e) = self
            .executor
            .schedule(&record.actions, &Hash256::ZERO, &salt, delay)
        {
            tracing::warn!(proposal = %id, error = %e, "executor refused to schedule batch");
            return Err(self.restore(id, &previous, e));
        }

        let operation = operation_id(&record.actions, &Hash256::ZERO, &salt);
        tracing::info!(
            proposal = %id,
            operation = %operation,
            delay = %format_duration(delay),
            "proposal queued"
        );
        self.pending_events.push(GovernanceEvent::ProposalQueued {
            id,
            salt,
            operation_id: operation,
            delay_secs: delay,
        });
        Ok(salt)
    }

    /// Ask the executor to perform a queued proposal, forwarding `value`.
    ///
    /// The executed flag is written before the executor runs. If the executor
    /// fails, the previous record is restored and the proposal stays queued.
    pub fn execute(&mut self, id: ProposalId, value: u128) -> Result<(), GovernanceError> {
        let mut record = self.load(&id)?;
        if record.executed {
            return Err(GovernanceError::AlreadyExecuted(id));
        }
        let salt = match (record.queued, record.salt) {
            (true, Some(salt)) => salt,
            _ => return Err(GovernanceError::NotQueued(id)),
        };

        let previous = record.encode()?;
        record.executed = true;
        self.store.put_proposal(&id, &record.encode()?)?;

        if let Err(e) = self
            .executor
            .execute(&record.actions, &Hash256::ZERO, &salt, value)
        {
            tracing::warn!(proposal = %id, error = %e, "executor rejected batch");
            return Err(self.restore(id, &previous, e));
        }

        tracing::info!(proposal = %id, value = %value, "proposal executed");
        self.pending_events
            .push(GovernanceEvent::ProposalExecuted { id, value });
        Ok(())
    }

    // ── Parameter administration ────────────────────────────────────────

    pub fn set_voting_period(
        &mut self,
        caller: AccountId,
        secs: u64,
    ) -> Result<(), GovernanceError> {
        self.require_authority(&caller)?;
        validate_voting_period(secs)?;
        self.change_param(GovernableParam::VotingPeriod, |p| p.voting_period_secs = secs);
        Ok(())
    }

    /// Zero disables the quorum check.
    pub fn set_quorum(&mut self, caller: AccountId, quorum: Weight) -> Result<(), GovernanceError> {
        self.require_authority(&caller)?;
        self.change_param(GovernableParam::Quorum, |p| p.quorum = quorum);
        Ok(())
    }

    pub fn set_proposal_threshold(
        &mut self,
        caller: AccountId,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        self.require_authority(&caller)?;
        self.change_param(GovernableParam::ProposalThreshold, |p| {
            p.proposal_threshold = amount
        });
        Ok(())
    }

    pub fn set_max_actions(
        &mut self,
        caller: AccountId,
        max_actions: u32,
    ) -> Result<(), GovernanceError> {
        self.require_authority(&caller)?;
        validate_max_actions(max_actions)?;
        self.change_param(GovernableParam::MaxActions, |p| p.max_actions = max_actions);
        Ok(())
    }

    // ── Read accessors ──────────────────────────────────────────────────

    /// Summary of a proposal. Unknown ids yield the all-zero view.
    pub fn proposal(&self, id: &ProposalId) -> Result<ProposalView, GovernanceError> {
        Ok(self
            .fetch(id)?
            .map(|record| ProposalView::from(&record))
            .unwrap_or_default())
    }

    pub fn has_voted(&self, id: &ProposalId, account: &AccountId) -> Result<bool, GovernanceError> {
        Ok(self.store.has_voted(id, account)?)
    }

    pub fn proposal_actions(
        &self,
        id: &ProposalId,
    ) -> Result<Option<ActionBatch>, GovernanceError> {
        Ok(self.fetch(id)?.map(|record| record.actions))
    }

    pub fn params(&self) -> &GovernanceParams {
        &self.params
    }

    pub fn authority(&self) -> &AccountId {
        &self.authority
    }

    pub fn identity(&self) -> &AccountId {
        &self.identity
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Take all events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GovernanceEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn require_authority(&self, caller: &AccountId) -> Result<(), GovernanceError> {
        if *caller != self.authority {
            tracing::warn!(caller = %caller, "unauthorized administrative call");
            return Err(GovernanceError::Unauthorized(*caller));
        }
        Ok(())
    }

    /// Write back the pre-call record after the executor refused a batch.
    /// A failed write is reported alongside the executor's error.
    fn restore(&self, id: ProposalId, previous: &[u8], cause: ExecutorError) -> GovernanceError {
        match self.store.put_proposal(&id, previous) {
            Ok(()) => cause.into(),
            Err(rollback) => {
                tracing::error!(
                    proposal = %id,
                    error = %rollback,
                    "failed to restore record after executor error"
                );
                GovernanceError::RollbackFailed {
                    id,
                    cause,
                    rollback,
                }
            }
        }
    }

    fn change_param(
        &mut self,
        param: GovernableParam,
        apply: impl FnOnce(&mut GovernanceParams),
    ) {
        let old = param.read(&self.params);
        apply(&mut self.params);
        let new = param.read(&self.params);
        tracing::info!(param = %param, old = %old, new = %new, "parameter changed");
        self.pending_events
            .push(GovernanceEvent::ParameterChanged { param, old, new });
    }

    fn fetch(&self, id: &ProposalId) -> Result<Option<ProposalRecord>, GovernanceError> {
        self.store
            .get_proposal(id)?
            .map(|bytes| ProposalRecord::decode(&bytes))
            .transpose()
    }

    fn load(&self, id: &ProposalId) -> Result<ProposalRecord, GovernanceError> {
        self.fetch(id)?
            .ok_or(GovernanceError::ProposalNotFound(*id))
    }
}
