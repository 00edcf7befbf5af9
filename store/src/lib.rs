//! Storage for governance records.
//!
//! Backends implement [`GovernanceStore`]; the governor depends only on the
//! trait and encodes its own records. [`MemoryGovernanceStore`] is the
//! in-process backend used by the CLI and the test suites.

pub mod error;
pub mod governance;
pub mod memory;

pub use error::StoreError;
pub use governance::GovernanceStore;
pub use memory::MemoryGovernanceStore;
