//! Reward Issuer Module
//!
//! Builds the payout schedule for an issuance and executes it against the
//! reward asset.
//!
//! ## Policy
//!
//! Every participant that is currently staking receives reward units equal
//! to its staked balance (scaled by the farm reward ratio, 1:1 by default).
//! Nothing accrues over time and no claim cursor is kept: issuing twice over
//! an unchanged ledger pays twice. Staked balances are never consumed.
//!
//! ## Failure semantics
//!
//! Distribution is all-or-nothing. The schedule total is checked against the
//! source balance before any transfer, and if a transfer still fails, the
//! transfers already made are sent back in reverse order.

use crate::asset::FungibleAsset;
use crate::constants::farm::{REWARD_DENOMINATOR, REWARD_NUMERATOR};
use crate::errors::AssetError;
use crate::ledger::StakingLedger;
use crate::registry::ParticipantRegistry;
use crate::types::{Address, Amount};
use crate::{FarmError, FarmResult, Vec};

// ============================================================================
// Types
// ============================================================================

/// One transfer in a distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    /// Recipient participant
    pub account: Address,
    /// Reward units sent
    pub amount: Amount,
}

/// Payout schedule of a single issuance, in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardDistribution {
    /// Transfers to make
    pub payouts: Vec<Payout>,
    /// Sum of all payouts
    pub total: Amount,
}

impl RewardDistribution {
    /// Number of recipients
    pub fn recipients(&self) -> usize {
        self.payouts.len()
    }

    /// True when nobody is staking
    pub fn is_empty(&self) -> bool {
        self.payouts.is_empty()
    }

    /// Amount scheduled for `account`, zero if absent
    pub fn amount_for(&self, account: &Address) -> Amount {
        self.payouts
            .iter()
            .find(|p| p.account == *account)
            .map(|p| p.amount)
            .unwrap_or(0)
    }
}

/// Why a distribution did not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionFailure {
    /// Payout that could not be made
    pub failed: Payout,
    /// Asset-level cause
    pub cause: AssetError,
    /// Number of earlier payouts sent back to the source
    pub reverted: usize,
    /// Number of earlier payouts that could not be sent back
    pub unreverted: usize,
}

impl From<DistributionFailure> for FarmError {
    fn from(failure: DistributionFailure) -> Self {
        FarmError::AssetTransferFailed {
            to: failure.failed.account,
            amount: failure.failed.amount,
            cause: failure.cause,
        }
    }
}

// ============================================================================
// Core Reward Functions
// ============================================================================

/// Reward owed for a staked balance under the farm reward ratio
pub fn reward_for_stake(staked: Amount) -> FarmResult<Amount> {
    staked
        .checked_mul(REWARD_NUMERATOR)
        .ok_or(FarmError::Overflow)?
        .checked_div(REWARD_DENOMINATOR)
        .ok_or(FarmError::Overflow)
}

/// Build the schedule for every active participant in registry order
pub fn compute_rewards(
    registry: &ParticipantRegistry,
    ledger: &StakingLedger,
) -> FarmResult<RewardDistribution> {
    let mut distribution = RewardDistribution::default();

    for account in registry.all_participants() {
        if !ledger.is_staking(account) {
            continue;
        }

        let amount = reward_for_stake(ledger.staking_balance_of(account))?;
        if amount == 0 {
            continue;
        }

        distribution.total = distribution
            .total
            .checked_add(amount)
            .ok_or(FarmError::Overflow)?;
        distribution.payouts.push(Payout {
            account: *account,
            amount,
        });
    }

    Ok(distribution)
}

/// Send every payout from `source`, undoing earlier payouts on failure
pub fn distribute<A: FungibleAsset + ?Sized>(
    asset: &mut A,
    source: &Address,
    distribution: &RewardDistribution,
) -> Result<(), DistributionFailure> {
    let available = asset.balance_of(source);
    if available < distribution.total {
        // Attribute the shortfall to the first payout that cannot be covered
        let mut running: Amount = 0;
        let failed = distribution
            .payouts
            .iter()
            .find(|p| {
                running = running.saturating_add(p.amount);
                running > available
            })
            .copied()
            .unwrap_or(Payout { account: *source, amount: distribution.total });
        return Err(DistributionFailure {
            failed,
            cause: AssetError::InsufficientBalance {
                available,
                requested: distribution.total,
            },
            reverted: 0,
            unreverted: 0,
        });
    }

    for (index, payout) in distribution.payouts.iter().enumerate() {
        if let Err(cause) = asset.transfer(source, &payout.account, payout.amount) {
            tracing::warn!(
                index,
                amount = payout.amount,
                code = cause.code(),
                "reward transfer failed, reverting batch"
            );
            let (reverted, unreverted) = compensate(asset, source, &distribution.payouts[..index]);
            return Err(DistributionFailure {
                failed: *payout,
                cause,
                reverted,
                unreverted,
            });
        }
    }

    Ok(())
}

/// Pull completed payouts back to `source`, newest first
fn compensate<A: FungibleAsset + ?Sized>(
    asset: &mut A,
    source: &Address,
    completed: &[Payout],
) -> (usize, usize) {
    let mut reverted = 0;
    let mut unreverted = 0;

    for payout in completed.iter().rev() {
        match asset.transfer(&payout.account, source, payout.amount) {
            Ok(()) => reverted += 1,
            Err(cause) => {
                tracing::error!(
                    amount = payout.amount,
                    code = cause.code(),
                    "could not revert reward payout"
                );
                unreverted += 1;
            }
        }
    }

    (reverted, unreverted)
}

// ============================================================================
// Tests
// ============================================================================
