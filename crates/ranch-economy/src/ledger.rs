//! The RC balance ledger.
//!
//! [`EconomyLedger`] holds every owner's Rooster Coin (RC) balance. The
//! ledger enforces two invariants:
//!
//! 1. Balances are never negative -- writes clamp, withdrawals refuse.
//! 2. Accounts are implicit -- querying an unknown owner yields zero,
//!    and accounts are never deleted.
//!
//! All quantities use [`Decimal`] -- no floating point in the money path.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use ranch_types::OwnerId;

/// Per-owner RC balances with clamped writes and guarded withdrawals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EconomyLedger {
    /// Current balance per owner. Absence means zero.
    balances: BTreeMap<OwnerId, Decimal>,
}

impl EconomyLedger {
    /// Create an empty ledger.
    pub const fn new() -> Self {
        Self {
            balances: BTreeMap::new(),
        }
    }

    /// Rebuild a ledger from persisted balances.
    ///
    /// Negative balances (hand-edited documents can contain anything)
    /// are clamped to zero on the way in, so the non-negativity
    /// invariant holds from the first query.
    pub fn restore(balances: BTreeMap<OwnerId, Decimal>) -> Self {
        let balances = balances
            .into_iter()
            .map(|(owner, balance)| (owner, balance.max(Decimal::ZERO)))
            .collect();
        Self { balances }
    }

    /// Return the owner's balance. Unknown owners have zero RC.
    pub fn balance(&self, owner: OwnerId) -> Decimal {
        self.balances.get(&owner).copied().unwrap_or(Decimal::ZERO)
    }

    /// Overwrite the owner's balance, clamping negative input to zero.
    pub fn set_balance(&mut self, owner: OwnerId, amount: Decimal) {
        self.balances.insert(owner, amount.max(Decimal::ZERO));
    }

    /// Add to the owner's balance. Amounts of zero or less are ignored.
    pub fn deposit(&mut self, owner: OwnerId, amount: Decimal) {
        if amount <= Decimal::ZERO {
            return;
        }
        let updated = self
            .balance(owner)
            .checked_add(amount)
            .unwrap_or(Decimal::MAX);
        self.balances.insert(owner, updated);
        debug!(%owner, %amount, balance = %updated, "deposit");
    }

    /// Remove from the owner's balance.
    ///
    /// Returns `false` without mutating if `amount` is zero or less, or
    /// exceeds the current balance.
    pub fn withdraw(&mut self, owner: OwnerId, amount: Decimal) -> bool {
        let balance = self.balance(owner);
        if amount <= Decimal::ZERO || amount > balance {
            return false;
        }
        let updated = balance.checked_sub(amount).unwrap_or(Decimal::ZERO);
        self.balances.insert(owner, updated);
        debug!(%owner, %amount, balance = %updated, "withdrawal");
        true
    }

    /// Return the number of accounts with a recorded balance.
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }

    /// Return all recorded balances, for the persistence adapter.
    pub const fn balances(&self) -> &BTreeMap<OwnerId, Decimal> {
        &self.balances
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn unknown_owner_has_zero_balance() {
        let ledger = EconomyLedger::new();
        assert_eq!(ledger.balance(OwnerId::new()), Decimal::ZERO);
    }

    #[test]
    fn deposit_then_withdraw() {
        let mut ledger = EconomyLedger::new();
        let owner = OwnerId::new();

        ledger.deposit(owner, dec!(10.0));
        assert_eq!(ledger.balance(owner), dec!(10.0));

        assert!(ledger.withdraw(owner, dec!(4.5)));
        assert_eq!(ledger.balance(owner), dec!(5.5));
    }

    #[test]
    fn withdraw_refuses_overdraft() {
        let mut ledger = EconomyLedger::new();
        let owner = OwnerId::new();
        ledger.deposit(owner, dec!(3.0));

        assert!(!ledger.withdraw(owner, dec!(3.01)));
        assert_eq!(ledger.balance(owner), dec!(3.0));
    }

    #[test]
    fn withdraw_refuses_nonpositive_amounts() {
        let mut ledger = EconomyLedger::new();
        let owner = OwnerId::new();
        ledger.deposit(owner, dec!(5.0));

        assert!(!ledger.withdraw(owner, Decimal::ZERO));
        assert!(!ledger.withdraw(owner, dec!(-1.0)));
        assert_eq!(ledger.balance(owner), dec!(5.0));
    }

    #[test]
    fn deposit_ignores_nonpositive_amounts() {
        let mut ledger = EconomyLedger::new();
        let owner = OwnerId::new();

        ledger.deposit(owner, Decimal::ZERO);
        ledger.deposit(owner, dec!(-10.0));
        assert_eq!(ledger.balance(owner), Decimal::ZERO);
        assert_eq!(ledger.account_count(), 0);
    }

    #[test]
    fn set_balance_clamps_negative_input() {
        let mut ledger = EconomyLedger::new();
        let owner = OwnerId::new();

        ledger.set_balance(owner, dec!(-25.0));
        assert_eq!(ledger.balance(owner), Decimal::ZERO);

        ledger.set_balance(owner, dec!(25.0));
        assert_eq!(ledger.balance(owner), dec!(25.0));
    }

    #[test]
    fn restore_clamps_negative_balances() {
        let owner = OwnerId::new();
        let mut raw = BTreeMap::new();
        raw.insert(owner, dec!(-7.0));
        let ledger = EconomyLedger::restore(raw);
        assert_eq!(ledger.balance(owner), Decimal::ZERO);
    }

    #[test]
    fn balance_never_negative_after_mixed_sequence() {
        let mut ledger = EconomyLedger::new();
        let owner = OwnerId::new();

        ledger.deposit(owner, dec!(2.0));
        let _ = ledger.withdraw(owner, dec!(5.0));
        ledger.deposit(owner, dec!(-3.0));
        let _ = ledger.withdraw(owner, dec!(2.0));
        let _ = ledger.withdraw(owner, dec!(0.5));

        assert!(ledger.balance(owner) >= Decimal::ZERO);
    }
}
