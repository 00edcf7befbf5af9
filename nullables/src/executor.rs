//! Nullable executor: an in-memory timelock that records what it was asked to do.

use ballot_governance::{operation_id, ActionBatch, Executor, ExecutorError};
use ballot_types::{Hash256, OperationId, Salt};
use std::collections::BTreeMap;

/// One batch the executor has accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledBatch {
    pub batch: ActionBatch,
    pub predecessor: Hash256,
    pub salt: Salt,
    pub delay: u64,
    /// Executor-local time at which the batch becomes executable.
    pub ready_at: u64,
    /// Value forwarded on execution, once executed.
    pub executed_with: Option<u128>,
}

/// Deterministic [`Executor`] for tests.
///
/// Keeps its own notion of time (`advance`) for delay enforcement, rejects
/// duplicate schedules and repeated executions, and can be told to fail the
/// next schedule or execution.
#[derive(Debug, Default)]
pub struct NullExecutor {
    min_delay: u64,
    now: u64,
    operations: BTreeMap<OperationId, ScheduledBatch>,
    fail_next_schedule: Option<String>,
    fail_next_execute: Option<String>,
    execute_attempts: u32,
}

impl NullExecutor {
    pub fn new(min_delay: u64) -> Self {
        Self {
            min_delay,
            ..Self::default()
        }
    }

    /// Move executor-local time forward.
    pub fn advance(&mut self, secs: u64) {
        self.now = self.now.saturating_add(secs);
    }

    /// Make the next `schedule` call fail with [`ExecutorError::Other`].
    pub fn fail_next_schedule(&mut self, reason: impl Into<String>) {
        self.fail_next_schedule = Some(reason.into());
    }

    /// Make the next `execute` call fail with [`ExecutorError::CallFailed`].
    pub fn fail_next_execute(&mut self, reason: impl Into<String>) {
        self.fail_next_execute = Some(reason.into());
    }

    pub fn scheduled(&self, id: &OperationId) -> Option<&ScheduledBatch> {
        self.operations.get(id)
    }

    pub fn scheduled_count(&self) -> usize {
        self.operations.len()
    }

    pub fn executed_count(&self) -> usize {
        self.operations
            .values()
            .filter(|op| op.executed_with.is_some())
            .count()
    }

    /// Number of `execute` calls received, successful or not.
    pub fn execute_attempts(&self) -> u32 {
        self.execute_attempts
    }
}

impl Executor for NullExecutor {
    fn min_delay(&self) -> u64 {
        self.min_delay
    }

    fn schedule(
        &mut self,
        batch: &ActionBatch,
        predecessor: &Hash256,
        salt: &Salt,
        delay: u64,
    ) -> Result<(), ExecutorError> {
        if let Some(reason) = self.fail_next_schedule.take() {
            return Err(ExecutorError::Other(reason));
        }
        let id = operation_id(batch, predecessor, salt);
        if self.operations.contains_key(&id) {
            return Err(ExecutorError::AlreadyScheduled(id));
        }
        if delay < self.min_delay {
            return Err(ExecutorError::Other(format!(
                "delay {delay} below minimum {}",
                self.min_delay
            )));
        }
        self.operations.insert(
            id,
            ScheduledBatch {
                batch: batch.clone(),
                predecessor: *predecessor,
                salt: *salt,
                delay,
                ready_at: self.now.saturating_add(delay),
                executed_with: None,
            },
        );
        Ok(())
    }

    fn execute(
        &mut self,
        batch: &ActionBatch,
        predecessor: &Hash256,
        salt: &Salt,
        value: u128,
    ) -> Result<(), ExecutorError> {
        self.execute_attempts += 1;
        let id = operation_id(batch, predecessor, salt);
        let now = self.now;
        let op = self
            .operations
            .get_mut(&id)
            .ok_or(ExecutorError::UnknownOperation(id))?;
        if op.executed_with.is_some() {
            return Err(ExecutorError::AlreadyDone(id));
        }
        if now < op.ready_at {
            return Err(ExecutorError::NotReady(id));
        }
        if let Some(reason) = self.fail_next_execute.take() {
            let target = batch.targets.first().copied().unwrap_or_default();
            return Err(ExecutorError::CallFailed { target, reason });
        }
        op.executed_with = Some(value);
        Ok(())
    }
}
