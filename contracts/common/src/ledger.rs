//! Staking Ledger Module
//!
//! Per-account staked balances and their running total. The ledger only
//! does accounting; moving the stake asset in and out of custody is the
//! farm's job, which applies these updates around the asset calls.
//!
//! ## Invariants
//!
//! - `total_staked == Σ staked_balance`
//! - staking status is `staked_balance > 0`, never stored separately
//! - an account's entry is kept after its balance returns to zero

use crate::errors::AmountErrorReason;
use crate::types::{Address, Amount, Participant};
use crate::{BTreeMap, FarmError, FarmResult};

// ============================================================================
// Types
// ============================================================================

/// Outcome of a credit or debit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerUpdate {
    /// Account whose balance changed
    pub account: Address,
    /// Amount credited or debited
    pub amount: Amount,
    /// Account balance before the update
    pub previous_balance: Amount,
    /// Account balance after the update
    pub new_balance: Amount,
    /// Pool-wide total after the update
    pub pool_total: Amount,
}

/// Staked balances of every participant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StakingLedger {
    balances: BTreeMap<Address, Amount>,
    total_staked: Amount,
}

// ============================================================================
// Core Ledger Functions
// ============================================================================

/// Reject zero amounts for stake/unstake
pub fn validate_amount(amount: Amount) -> FarmResult<()> {
    if amount == 0 {
        return Err(FarmError::InvalidAmount {
            amount,
            reason: AmountErrorReason::Zero,
        });
    }
    Ok(())
}

impl StakingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Staked balance of `account`, zero if it never staked
    pub fn staking_balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Whether `account` currently has a positive stake
    pub fn is_staking(&self, account: &Address) -> bool {
        self.staking_balance_of(account) > 0
    }

    /// Position of `account`, if it ever staked
    pub fn participant(&self, account: &Address) -> Option<Participant> {
        self.balances
            .get(account)
            .map(|balance| Participant::new(*account, *balance))
    }

    /// Sum of all staked balances
    pub fn total_staked(&self) -> Amount {
        self.total_staked
    }

    /// Number of accounts with a positive stake
    pub fn active_count(&self) -> usize {
        self.balances.values().filter(|b| **b > 0).count()
    }

    /// Compute the result of crediting without applying it
    pub fn preview_credit(&self, account: &Address, amount: Amount) -> FarmResult<LedgerUpdate> {
        validate_amount(amount)?;

        let previous_balance = self.staking_balance_of(account);
        let new_balance = previous_balance
            .checked_add(amount)
            .ok_or(FarmError::Overflow)?;
        let pool_total = self
            .total_staked
            .checked_add(amount)
            .ok_or(FarmError::Overflow)?;

        Ok(LedgerUpdate {
            account: *account,
            amount,
            previous_balance,
            new_balance,
            pool_total,
        })
    }

    /// Compute the result of debiting without applying it
    pub fn preview_debit(&self, account: &Address, amount: Amount) -> FarmResult<LedgerUpdate> {
        validate_amount(amount)?;

        let available = self.staking_balance_of(account);
        if amount > available {
            return Err(FarmError::InsufficientStakedBalance {
                available,
                requested: amount,
            });
        }

        // total_staked >= available >= amount
        Ok(LedgerUpdate {
            account: *account,
            amount,
            previous_balance: available,
            new_balance: available - amount,
            pool_total: self.total_staked - amount,
        })
    }

    /// Increase `account`'s stake by `amount`
    pub fn credit(&mut self, account: &Address, amount: Amount) -> FarmResult<LedgerUpdate> {
        let update = self.preview_credit(account, amount)?;
        self.apply(&update);
        Ok(update)
    }

    /// Decrease `account`'s stake by `amount`
    pub fn debit(&mut self, account: &Address, amount: Amount) -> FarmResult<LedgerUpdate> {
        let update = self.preview_debit(account, amount)?;
        self.apply(&update);
        Ok(update)
    }

    /// Restore the balance and total recorded before `update`
    ///
    /// Must be called before any later update touches the same account.
    pub fn revert(&mut self, update: &LedgerUpdate) {
        self.balances.insert(update.account, update.previous_balance);
        self.total_staked = self
            .total_staked
            .wrapping_sub(update.new_balance)
            .wrapping_add(update.previous_balance);
    }

    /// Fail unless `custody` covers every recorded stake
    pub fn check_conservation(&self, custody: Amount) -> FarmResult<()> {
        if custody < self.total_staked {
            return Err(FarmError::ConservationViolated {
                custody,
                recorded: self.total_staked,
            });
        }
        Ok(())
    }

    /// Iterate every recorded position in account order
    pub fn positions(&self) -> impl Iterator<Item = Participant> + '_ {
        self.balances
            .iter()
            .map(|(account, balance)| Participant::new(*account, *balance))
    }

    /// Rebuild from raw positions, recomputing the total
    pub(crate) fn from_positions(positions: &[Participant]) -> FarmResult<Self> {
        let mut ledger = Self::new();
        for p in positions {
            if ledger.balances.insert(p.account, p.staked_balance).is_some() {
                return Err(FarmError::CorruptSnapshot {
                    reason: "duplicate ledger position",
                });
            }
            ledger.total_staked = ledger
                .total_staked
                .checked_add(p.staked_balance)
                .ok_or(FarmError::Overflow)?;
        }
        Ok(ledger)
    }

    fn apply(&mut self, update: &LedgerUpdate) {
        self.balances.insert(update.account, update.new_balance);
        self.total_staked = update.pool_total;
    }
}

// ============================================================================
// Tests
// ============================================================================
