//! Nullable share ledger.

use ballot_governance::EligibilityLedger;
use ballot_types::AccountId;
use std::collections::HashMap;

/// In-memory eligibility balances. Unknown accounts hold zero.
#[derive(Debug, Default, Clone)]
pub struct NullLedger {
    balances: HashMap<AccountId, u128>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, account: AccountId, balance: u128) -> Self {
        self.set_balance(account, balance);
        self
    }

    pub fn set_balance(&mut self, account: AccountId, balance: u128) {
        self.balances.insert(account, balance);
    }
}

impl EligibilityLedger for NullLedger {
    fn eligibility(&self, account: &AccountId) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_account_has_zero() {
        let ledger = NullLedger::new().with_balance(AccountId::new([1; 32]), 42);
        assert_eq!(ledger.eligibility(&AccountId::new([1; 32])), 42);
        assert_eq!(ledger.eligibility(&AccountId::new([2; 32])), 0);
    }
}
