//! Token Farm
//!
//! The staking pool. Participants deposit the stake asset, the pool records
//! their staked balances, and the owner periodically issues the reward asset
//! to every participant that is currently staking.
//!
//! ## Custody
//!
//! The pool holds deposits and the reward reserve at its own address,
//! derived from the owner and both asset ids. Stakes are pulled in with
//! `transfer_from`, so participants must first approve that address on the
//! stake asset.
//!
//! ## Atomicity
//!
//! Every operation either completes or leaves the ledger, the registry and
//! both asset balances as they were:
//! - stake pulls the asset before recording anything
//! - unstake debits first and restores the debit if the transfer fails
//! - reward issuance checks the reserve up front and sends back completed
//!   payouts if a later one fails

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use farm_common::{
    access_control::{Ownership, Permission},
    asset::FungibleAsset,
    errors::{AssetError, FarmError, FarmResult},
    events::{EventLog, FarmEvent},
    ledger::{LedgerUpdate, StakingLedger},
    registry::ParticipantRegistry,
    rewards::{compute_rewards, distribute, RewardDistribution},
    snapshot::LedgerSnapshot,
    types::{Address, Amount, FarmConfig, Participant},
};

#[cfg(test)]
mod scenario_tests;

// ============ Actions ============

/// Operations a caller can submit to the farm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum FarmAction {
    Stake { amount: Amount },
    Unstake { amount: Amount },
    IssueRewards,
}

/// Result of an executed [`FarmAction`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Staked(LedgerUpdate),
    Unstaked(LedgerUpdate),
    RewardsIssued(RewardDistribution),
}

// ============ Token Farm ============

/// A staking pool over a stake asset `S` and a reward asset `R`
#[derive(Debug)]
pub struct TokenFarm<S: FungibleAsset, R: FungibleAsset> {
    config: FarmConfig,
    ownership: Ownership,
    address: Address,
    stake_asset: S,
    reward_asset: R,
    ledger: StakingLedger,
    registry: ParticipantRegistry,
    events: EventLog,
    /// Sequence number of the last completed operation
    sequence: u64,
}

impl<S: FungibleAsset, R: FungibleAsset> TokenFarm<S, R> {
    /// Create an empty farm over the given asset handles
    ///
    /// The handles must carry the asset ids named in `config`.
    pub fn new(config: FarmConfig, stake_asset: S, reward_asset: R) -> FarmResult<Self> {
        config.validate()?;
        let ownership = Ownership::new(config.owner)?;

        if stake_asset.asset_id() != config.stake_asset {
            return Err(FarmError::AssetMismatch {
                expected: config.stake_asset,
                actual: stake_asset.asset_id(),
            });
        }
        if reward_asset.asset_id() != config.reward_asset {
            return Err(FarmError::AssetMismatch {
                expected: config.reward_asset,
                actual: reward_asset.asset_id(),
            });
        }

        let address = config.farm_address();
        tracing::info!(
            farm = %config.name,
            stake = stake_asset.symbol(),
            reward = reward_asset.symbol(),
            "farm created"
        );

        Ok(Self {
            config,
            ownership,
            address,
            stake_asset,
            reward_asset,
            ledger: StakingLedger::new(),
            registry: ParticipantRegistry::new(),
            events: EventLog::new(),
            sequence: 0,
        })
    }

    /// Rebuild a farm from a snapshot
    ///
    /// Fails if the snapshot is inconsistent or the pool's stake custody no
    /// longer covers the recorded stakes.
    pub fn restore(
        config: FarmConfig,
        stake_asset: S,
        reward_asset: R,
        snapshot: &LedgerSnapshot,
    ) -> FarmResult<Self> {
        let mut farm = Self::new(config, stake_asset, reward_asset)?;
        let (registry, ledger) = snapshot.restore()?;
        ledger.check_conservation(farm.custody_balance())?;

        farm.registry = registry;
        farm.ledger = ledger;
        tracing::info!(participants = farm.registry.len(), "farm restored from snapshot");
        Ok(farm)
    }

    // ============ Operations ============

    /// Dispatch an action submitted by `caller`
    pub fn execute(&mut self, caller: &Address, action: &FarmAction) -> FarmResult<ActionOutcome> {
        match action {
            FarmAction::Stake { amount } => self.stake(caller, *amount).map(ActionOutcome::Staked),
            FarmAction::Unstake { amount } => {
                self.unstake(caller, *amount).map(ActionOutcome::Unstaked)
            }
            FarmAction::IssueRewards => self.issue_rewards(caller).map(ActionOutcome::RewardsIssued),
        }
    }

    /// Deposit `amount` of the stake asset from `account` into the pool
    pub fn stake(&mut self, account: &Address, amount: Amount) -> FarmResult<LedgerUpdate> {
        // 1. Amount and arithmetic checked before the asset is touched
        self.ledger.preview_credit(account, amount)?;

        if *account == self.address {
            return Err(FarmError::InsufficientAllowanceOrBalance {
                account: *account,
                amount,
                cause: AssetError::InvalidAddress {
                    reason: "pool cannot stake into itself",
                },
            });
        }

        // 2. Pull the deposit; nothing is recorded if this fails
        if let Err(cause) =
            self.stake_asset
                .transfer_from(&self.address, account, &self.address, amount)
        {
            tracing::debug!(amount, code = cause.code(), "stake transfer rejected");
            return Err(FarmError::InsufficientAllowanceOrBalance {
                account: *account,
                amount,
                cause,
            });
        }

        // 3. Record
        let update = self.ledger.credit(account, amount)?;
        let sequence = self.sequence + 1;
        if self.registry.register_if_absent(*account) {
            self.events.emit(FarmEvent::ParticipantRegistered {
                account: *account,
                position: (self.registry.len() - 1) as u64,
                sequence,
            });
        }
        self.events.emit(FarmEvent::Staked {
            account: *account,
            amount,
            new_balance: update.new_balance,
            pool_total: update.pool_total,
            sequence,
        });
        self.sequence = sequence;

        tracing::debug!(amount, balance = update.new_balance, total = update.pool_total, "staked");
        Ok(update)
    }

    /// Return `amount` of `account`'s stake from the pool
    pub fn unstake(&mut self, account: &Address, amount: Amount) -> FarmResult<LedgerUpdate> {
        let update = self.ledger.debit(account, amount)?;

        if let Err(cause) = self.stake_asset.transfer(&self.address, account, amount) {
            self.ledger.revert(&update);
            tracing::warn!(amount, code = cause.code(), "unstake transfer failed, debit restored");
            return Err(FarmError::AssetTransferFailed {
                to: *account,
                amount,
                cause,
            });
        }

        let sequence = self.sequence + 1;
        self.events.emit(FarmEvent::Unstaked {
            account: *account,
            amount,
            new_balance: update.new_balance,
            pool_total: update.pool_total,
            sequence,
        });
        self.sequence = sequence;

        tracing::debug!(amount, balance = update.new_balance, total = update.pool_total, "unstaked");
        Ok(update)
    }

    /// Pay every staking participant its reward; owner only
    ///
    /// Each participant with a positive stake receives reward units equal to
    /// its staked balance. Balances are not consumed, so a repeated call pays
    /// again.
    pub fn issue_rewards(&mut self, caller: &Address) -> FarmResult<RewardDistribution> {
        self.ownership.require(caller, Permission::IssueRewards)?;

        let distribution = compute_rewards(&self.registry, &self.ledger)?;
        let sequence = self.sequence + 1;

        if let Err(failure) = distribute(&mut self.reward_asset, &self.address, &distribution) {
            if failure.reverted > 0 || failure.unreverted > 0 {
                self.events.emit(FarmEvent::RewardsReverted {
                    reverted_payouts: failure.reverted as u64,
                    sequence,
                });
                self.sequence = sequence;
            }
            if failure.unreverted > 0 {
                tracing::error!(
                    unreverted = failure.unreverted,
                    "reward issuance left payouts outstanding"
                );
            }
            return Err(failure.into());
        }

        for payout in &distribution.payouts {
            self.events.emit(FarmEvent::RewardPaid {
                account: payout.account,
                amount: payout.amount,
                sequence,
            });
        }
        self.events.emit(FarmEvent::RewardsIssued {
            recipients: distribution.recipients() as u64,
            total: distribution.total,
            sequence,
        });
        self.sequence = sequence;

        tracing::info!(
            recipients = distribution.recipients(),
            total = distribution.total,
            "rewards issued"
        );
        Ok(distribution)
    }

    /// The schedule `issue_rewards` would pay right now
    pub fn preview_rewards(&self) -> FarmResult<RewardDistribution> {
        compute_rewards(&self.registry, &self.ledger)
    }

    // ============ Queries ============

    /// Staked balance of `account`, zero if it never staked
    pub fn staking_balance_of(&self, account: &Address) -> Amount {
        self.ledger.staking_balance_of(account)
    }

    /// Whether `account` currently has a positive stake
    pub fn is_staking_status(&self, account: &Address) -> bool {
        self.ledger.is_staking(account)
    }

    /// Every account that has ever staked, in first-stake order
    pub fn all_participants(&self) -> impl Iterator<Item = &Address> + '_ {
        self.registry.all_participants()
    }

    pub fn participant(&self, account: &Address) -> Option<Participant> {
        self.ledger.participant(account)
    }

    pub fn active_participant_count(&self) -> usize {
        self.ledger.active_count()
    }

    pub fn total_staked(&self) -> Amount {
        self.ledger.total_staked()
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn owner(&self) -> Address {
        self.ownership.owner()
    }

    /// Custody address holding deposits and the reward reserve
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn config(&self) -> &FarmConfig {
        &self.config
    }

    /// Stake asset held by the pool
    pub fn custody_balance(&self) -> Amount {
        self.stake_asset.balance_of(&self.address)
    }

    /// Reward asset available for issuance
    pub fn reward_reserve(&self) -> Amount {
        self.reward_asset.balance_of(&self.address)
    }

    /// Sequence number of the last completed operation
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn events(&self) -> &[FarmEvent] {
        self.events.events()
    }

    pub fn event_log(&self) -> &EventLog {
        &self.events
    }

    /// Fail unless the pool's stake custody covers every recorded stake
    pub fn check_conservation(&self) -> FarmResult<()> {
        self.ledger.check_conservation(self.custody_balance())
    }

    /// Capture the registry and ledger for persistence
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::capture(&self.registry, &self.ledger)
    }

    // ============ Asset Handles ============

    pub fn stake_asset(&self) -> &S {
        &self.stake_asset
    }

    /// Mutable stake asset, for approvals and funding outside the farm
    ///
    /// Calls made through this handle bypass the ledger. Moving stake asset
    /// out of the pool address breaks custody, which `check_conservation`
    /// reports and which makes later unstakes fail and roll back.
    pub fn stake_asset_mut(&mut self) -> &mut S {
        &mut self.stake_asset
    }

    pub fn reward_asset(&self) -> &R {
        &self.reward_asset
    }

    /// Mutable reward asset, used to fund the reserve
    ///
    /// Bypasses the farm: anything moved out of the pool address here simply
    /// shrinks the reserve checked by the next issuance.
    pub fn reward_asset_mut(&mut self) -> &mut R {
        &mut self.reward_asset
    }

    /// Release both asset handles
    pub fn into_assets(self) -> (S, R) {
        (self.stake_asset, self.reward_asset)
    }
}
