//! Nullable infrastructure for deterministic testing.
//!
//! The governor's collaborators (time, the executor, the share ledger) are
//! abstracted behind traits or plain parameters. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record every call for later assertions
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod executor;
pub mod ledger;

pub use clock::NullClock;
pub use executor::{NullExecutor, ScheduledBatch};
pub use ledger::NullLedger;
