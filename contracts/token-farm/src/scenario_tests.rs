//! Scenario Tests
//!
//! End-to-end farm flows over the reference tokens, mirroring a deployment
//! where the owner funds the pool with the full reward supply and hands an
//! investor 100 mDAI.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use farm_common::{
        constants::farm,
        errors::{AssetError, AssetResult, FarmError},
        events::{EventType, FarmEvent},
        types::{Address, Amount, AssetId, FarmConfig},
        FungibleAsset,
    };
    use farm_token::{tokens, FarmToken, TokenMetadata};
    use proptest::prelude::*;

    use crate::{ActionOutcome, FarmAction, TokenFarm};

    fn owner() -> Address {
        [1u8; 32]
    }

    fn investor() -> Address {
        [2u8; 32]
    }

    fn alice() -> Address {
        [3u8; 32]
    }

    fn bob() -> Address {
        [4u8; 32]
    }

    /// Token that refuses to credit or debit selected accounts
    #[derive(Debug)]
    struct FlakyAsset {
        inner: FarmToken,
        blocked: BTreeSet<Address>,
        frozen: BTreeSet<Address>,
    }

    impl FlakyAsset {
        fn new(inner: FarmToken) -> Self {
            Self { inner, blocked: BTreeSet::new(), frozen: BTreeSet::new() }
        }

        fn check_endpoints(&self, from: &Address, to: &Address) -> AssetResult<()> {
            if self.blocked.contains(to) {
                return Err(AssetError::InvalidAddress { reason: "recipient rejected" });
            }
            if self.frozen.contains(from) {
                return Err(AssetError::InvalidAddress { reason: "sender frozen" });
            }
            Ok(())
        }
    }

    impl FungibleAsset for FlakyAsset {
        fn asset_id(&self) -> AssetId {
            self.inner.asset_id()
        }

        fn name(&self) -> &str {
            self.inner.name()
        }

        fn symbol(&self) -> &str {
            self.inner.symbol()
        }

        fn decimals(&self) -> u8 {
            self.inner.decimals()
        }

        fn total_supply(&self) -> Amount {
            self.inner.total_supply()
        }

        fn balance_of(&self, account: &Address) -> Amount {
            self.inner.balance_of(account)
        }

        fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> AssetResult<()> {
            self.check_endpoints(from, to)?;
            self.inner.transfer(from, to, amount)
        }

        fn transfer_from(
            &mut self,
            spender: &Address,
            owner: &Address,
            to: &Address,
            amount: Amount,
        ) -> AssetResult<()> {
            self.check_endpoints(owner, to)?;
            self.inner.transfer_from(spender, owner, to, amount)
        }
    }

    /// Deploy with the full reward supply in the pool and 100 mDAI for the investor
    fn deploy() -> TokenFarm<FarmToken, FarmToken> {
        let dai = FarmToken::mock_dai(owner()).unwrap();
        let dapp = FarmToken::dapp(owner()).unwrap();
        let config = FarmConfig::new(dai.asset_id(), dapp.asset_id(), owner());
        let mut farm = TokenFarm::new(config, dai, dapp).unwrap();

        let pool = farm.address();
        farm.reward_asset_mut()
            .transfer(&owner(), &pool, tokens(1_000_000))
            .unwrap();
        farm.stake_asset_mut()
            .transfer(&owner(), &investor(), tokens(100))
            .unwrap();
        farm
    }

    fn deploy_flaky() -> TokenFarm<FlakyAsset, FlakyAsset> {
        let dai = FlakyAsset::new(FarmToken::mock_dai(owner()).unwrap());
        let dapp = FlakyAsset::new(FarmToken::dapp(owner()).unwrap());
        let config = FarmConfig::new(dai.asset_id(), dapp.asset_id(), owner());
        let mut farm = TokenFarm::new(config, dai, dapp).unwrap();

        let pool = farm.address();
        farm.reward_asset_mut()
            .transfer(&owner(), &pool, tokens(1_000_000))
            .unwrap();
        for account in [investor(), alice(), bob()] {
            farm.stake_asset_mut()
                .transfer(&owner(), &account, tokens(100))
                .unwrap();
        }
        farm
    }

    fn approve(farm: &mut TokenFarm<FarmToken, FarmToken>, account: Address, amount: Amount) {
        let pool = farm.address();
        farm.stake_asset_mut().approve(&account, &pool, amount).unwrap();
    }

    fn fund_and_stake(farm: &mut TokenFarm<FarmToken, FarmToken>, account: Address, amount: Amount) {
        if account != investor() {
            farm.stake_asset_mut().transfer(&owner(), &account, amount).unwrap();
        }
        approve(farm, account, amount);
        farm.stake(&account, amount).unwrap();
    }

    fn flaky_stake(farm: &mut TokenFarm<FlakyAsset, FlakyAsset>, account: Address, amount: Amount) {
        let pool = farm.address();
        farm.stake_asset_mut().inner.approve(&account, &pool, amount).unwrap();
        farm.stake(&account, amount).unwrap();
    }

    // ============ Deployment ============

    #[test]
    fn test_deployment_metadata() {
        let farm = deploy();

        assert_eq!(farm.name(), "Dapp Token Farm");
        assert_eq!(farm.name(), farm::NAME);
        assert_eq!(farm.stake_asset().name(), "Mock DAI Token");
        assert_eq!(farm.reward_asset().name(), "DApp Token");
        assert_eq!(farm.owner(), owner());
        assert_eq!(farm.reward_reserve(), tokens(1_000_000));
        assert_eq!(farm.stake_asset().balance_of(&investor()), tokens(100));
        assert_eq!(farm.total_staked(), 0);
        assert_eq!(farm.all_participants().count(), 0);
    }

    #[test]
    fn test_constructor_rejects_mismatched_assets() {
        let dai = FarmToken::mock_dai(owner()).unwrap();
        let dapp = FarmToken::dapp(owner()).unwrap();

        let swapped = FarmConfig::new(dapp.asset_id(), dai.asset_id(), owner());
        assert!(matches!(
            TokenFarm::new(swapped, dai.clone(), dapp.clone()),
            Err(FarmError::AssetMismatch { .. })
        ));

        let same = FarmConfig::new(dai.asset_id(), dai.asset_id(), owner());
        assert!(matches!(
            TokenFarm::new(same, dai.clone(), dapp.clone()),
            Err(FarmError::InvalidConfig { .. })
        ));

        let zero_owner = FarmConfig::new(dai.asset_id(), dapp.asset_id(), [0u8; 32]);
        assert!(matches!(
            TokenFarm::new(zero_owner, dai, dapp),
            Err(FarmError::InvalidConfig { .. })
        ));
    }

    // ============ Staking Lifecycle ============

    #[test]
    fn test_stake_issue_unstake_lifecycle() {
        let mut farm = deploy();
        approve(&mut farm, investor(), tokens(100));

        // Fresh stake of 100
        farm.stake(&investor(), tokens(100)).unwrap();
        assert_eq!(farm.staking_balance_of(&investor()), tokens(100));
        assert!(farm.is_staking_status(&investor()));
        assert_eq!(farm.stake_asset().balance_of(&investor()), 0);
        assert_eq!(farm.custody_balance(), tokens(100));

        // Owner issues 1:1 rewards; stake untouched
        let distribution = farm.issue_rewards(&owner()).unwrap();
        assert_eq!(distribution.total, tokens(100));
        assert_eq!(farm.reward_asset().balance_of(&investor()), tokens(100));
        assert_eq!(farm.staking_balance_of(&investor()), tokens(100));
        assert_eq!(farm.reward_reserve(), tokens(999_900));

        // Partial unstake
        farm.unstake(&investor(), tokens(60)).unwrap();
        assert_eq!(farm.staking_balance_of(&investor()), tokens(40));
        assert_eq!(farm.stake_asset().balance_of(&investor()), tokens(60));
        assert!(farm.is_staking_status(&investor()));

        // Full unstake keeps registry membership
        farm.unstake(&investor(), tokens(40)).unwrap();
        assert_eq!(farm.staking_balance_of(&investor()), 0);
        assert!(!farm.is_staking_status(&investor()));
        assert_eq!(farm.all_participants().copied().collect::<Vec<_>>(), vec![investor()]);
        assert_eq!(farm.stake_asset().balance_of(&investor()), tokens(100));
        assert_eq!(farm.custody_balance(), 0);
        farm.check_conservation().unwrap();
    }

    #[test]
    fn test_non_owner_cannot_issue() {
        let mut farm = deploy();
        fund_and_stake(&mut farm, investor(), tokens(100));
        let events_before = farm.events().len();
        let sequence_before = farm.sequence();

        let result = farm.issue_rewards(&investor());

        assert_eq!(
            result,
            Err(FarmError::Unauthorized { expected: owner(), actual: investor() })
        );
        assert_eq!(farm.reward_asset().balance_of(&investor()), 0);
        assert_eq!(farm.reward_reserve(), tokens(1_000_000));
        assert_eq!(farm.events().len(), events_before);
        assert_eq!(farm.sequence(), sequence_before);
    }

    #[test]
    fn test_unknown_account_queries() {
        let farm = deploy();
        assert_eq!(farm.staking_balance_of(&alice()), 0);
        assert!(!farm.is_staking_status(&alice()));
        assert!(farm.participant(&alice()).is_none());
    }

    #[test]
    fn test_stake_without_approval_changes_nothing() {
        let mut farm = deploy();

        let result = farm.stake(&investor(), tokens(100));

        assert!(matches!(
            result,
            Err(FarmError::InsufficientAllowanceOrBalance {
                cause: AssetError::InsufficientAllowance { .. },
                ..
            })
        ));
        assert_eq!(farm.stake_asset().balance_of(&investor()), tokens(100));
        assert_eq!(farm.total_staked(), 0);
        assert_eq!(farm.all_participants().count(), 0);
        assert!(farm.events().is_empty());
        assert_eq!(farm.sequence(), 0);
    }

    #[test]
    fn test_stake_beyond_balance_changes_nothing() {
        let mut farm = deploy();
        approve(&mut farm, investor(), tokens(200));

        let result = farm.stake(&investor(), tokens(200));

        assert!(matches!(
            result,
            Err(FarmError::InsufficientAllowanceOrBalance {
                cause: AssetError::InsufficientBalance { .. },
                ..
            })
        ));
        assert_eq!(farm.total_staked(), 0);
        assert_eq!(farm.stake_asset().allowance(&investor(), &farm.address()), tokens(200));
    }

    #[test]
    fn test_zero_amounts_rejected() {
        let mut farm = deploy();
        fund_and_stake(&mut farm, investor(), tokens(10));

        assert!(matches!(farm.stake(&investor(), 0), Err(FarmError::InvalidAmount { .. })));
        assert!(matches!(farm.unstake(&investor(), 0), Err(FarmError::InvalidAmount { .. })));
        assert_eq!(farm.staking_balance_of(&investor()), tokens(10));
    }

    #[test]
    fn test_over_unstake_rejected() {
        let mut farm = deploy();
        fund_and_stake(&mut farm, investor(), tokens(50));

        let result = farm.unstake(&investor(), tokens(51));

        assert_eq!(
            result,
            Err(FarmError::InsufficientStakedBalance {
                available: tokens(50),
                requested: tokens(51),
            })
        );
        assert_eq!(farm.staking_balance_of(&investor()), tokens(50));
        assert_eq!(farm.custody_balance(), tokens(50));
    }

    #[test]
    fn test_repeated_stake_registers_once() {
        let mut farm = deploy();
        fund_and_stake(&mut farm, investor(), tokens(30));
        fund_and_stake(&mut farm, investor(), tokens(20));

        assert_eq!(farm.all_participants().count(), 1);
        assert_eq!(farm.staking_balance_of(&investor()), tokens(50));
        assert_eq!(farm.event_log().filter_by_type(EventType::ParticipantRegistered).len(), 1);
        assert_eq!(farm.event_log().filter_by_type(EventType::Staked).len(), 2);
    }

    // ============ Rewards ============

    #[test]
    fn test_rewards_follow_registry_order_and_skip_inactive() {
        let mut farm = deploy();
        fund_and_stake(&mut farm, bob(), tokens(20));
        fund_and_stake(&mut farm, investor(), tokens(10));
        fund_and_stake(&mut farm, alice(), tokens(5));
        farm.unstake(&alice(), tokens(5)).unwrap();

        let preview = farm.preview_rewards().unwrap();
        let distribution = farm.issue_rewards(&owner()).unwrap();

        assert_eq!(preview, distribution);
        let order: Vec<_> = distribution.payouts.iter().map(|p| p.account).collect();
        assert_eq!(order, vec![bob(), investor()]);
        assert_eq!(distribution.total, tokens(30));
        assert_eq!(farm.reward_asset().balance_of(&alice()), 0);
        assert_eq!(farm.active_participant_count(), 2);
    }

    #[test]
    fn test_issuance_is_repeatable() {
        let mut farm = deploy();
        fund_and_stake(&mut farm, investor(), tokens(100));

        farm.issue_rewards(&owner()).unwrap();
        farm.issue_rewards(&owner()).unwrap();

        assert_eq!(farm.reward_asset().balance_of(&investor()), tokens(200));
        assert_eq!(farm.staking_balance_of(&investor()), tokens(100));
    }

    #[test]
    fn test_issue_with_no_participants() {
        let mut farm = deploy();

        let distribution = farm.issue_rewards(&owner()).unwrap();

        assert!(distribution.is_empty());
        assert_eq!(farm.reward_reserve(), tokens(1_000_000));
        assert!(matches!(
            farm.events().last(),
            Some(FarmEvent::RewardsIssued { recipients: 0, total: 0, .. })
        ));
    }

    #[test]
    fn test_short_reserve_moves_nothing() {
        let dai = FarmToken::mock_dai(owner()).unwrap();
        let dapp = FarmToken::dapp(owner()).unwrap();
        let config = FarmConfig::new(dai.asset_id(), dapp.asset_id(), owner());
        let mut farm = TokenFarm::new(config, dai, dapp).unwrap();
        let pool = farm.address();
        farm.reward_asset_mut().transfer(&owner(), &pool, tokens(50)).unwrap();
        fund_and_stake(&mut farm, alice(), tokens(40));
        fund_and_stake(&mut farm, bob(), tokens(40));
        let events_before = farm.events().len();

        let result = farm.issue_rewards(&owner());

        assert!(matches!(
            result,
            Err(FarmError::AssetTransferFailed {
                cause: AssetError::InsufficientBalance { .. },
                ..
            })
        ));
        assert_eq!(farm.reward_reserve(), tokens(50));
        assert_eq!(farm.reward_asset().balance_of(&alice()), 0);
        assert_eq!(farm.events().len(), events_before);
    }

    #[test]
    fn test_mid_batch_failure_reverts_issuance() {
        let mut farm = deploy_flaky();
        flaky_stake(&mut farm, alice(), tokens(10));
        flaky_stake(&mut farm, bob(), tokens(20));
        farm.reward_asset_mut().blocked.insert(bob());

        let result = farm.issue_rewards(&owner());

        assert!(matches!(
            result,
            Err(FarmError::AssetTransferFailed { to, .. }) if to == bob()
        ));
        assert_eq!(farm.reward_asset().balance_of(&alice()), 0);
        assert_eq!(farm.reward_reserve(), tokens(1_000_000));
        assert!(matches!(
            farm.events().last(),
            Some(FarmEvent::RewardsReverted { reverted_payouts: 1, .. })
        ));
        assert!(farm.event_log().filter_by_type(EventType::RewardPaid).is_empty());
    }

    #[test]
    fn test_unrevertible_payout_is_reported() {
        let mut farm = deploy_flaky();
        flaky_stake(&mut farm, alice(), tokens(10));
        flaky_stake(&mut farm, bob(), tokens(20));
        flaky_stake(&mut farm, investor(), tokens(30));
        farm.reward_asset_mut().blocked.insert(investor());
        farm.reward_asset_mut().frozen.insert(alice());

        let result = farm.issue_rewards(&owner());

        assert!(matches!(
            result,
            Err(FarmError::AssetTransferFailed { to, .. }) if to == investor()
        ));
        // bob's payout came back, alice's could not
        assert_eq!(farm.reward_asset().balance_of(&bob()), 0);
        assert_eq!(farm.reward_asset().balance_of(&alice()), tokens(10));
        assert_eq!(farm.reward_reserve(), tokens(999_990));
        assert!(matches!(
            farm.events().last(),
            Some(FarmEvent::RewardsReverted { reverted_payouts: 1, .. })
        ));
        assert_eq!(farm.staking_balance_of(&alice()), tokens(10));
    }

    // ============ Unstake Rollback ============

    #[test]
    fn test_failed_unstake_restores_stake() {
        let mut farm = deploy_flaky();
        flaky_stake(&mut farm, investor(), tokens(100));
        farm.stake_asset_mut().blocked.insert(investor());
        let sequence_before = farm.sequence();

        let result = farm.unstake(&investor(), tokens(60));

        assert!(matches!(
            result,
            Err(FarmError::AssetTransferFailed { amount, .. }) if amount == tokens(60)
        ));
        assert_eq!(farm.staking_balance_of(&investor()), tokens(100));
        assert_eq!(farm.total_staked(), tokens(100));
        assert_eq!(farm.custody_balance(), tokens(100));
        assert_eq!(farm.sequence(), sequence_before);
        farm.check_conservation().unwrap();

        // Ledger stays usable once the asset recovers
        farm.stake_asset_mut().blocked.clear();
        farm.unstake(&investor(), tokens(60)).unwrap();
        assert_eq!(farm.staking_balance_of(&investor()), tokens(40));
    }

    #[test]
    fn test_custody_drained_outside_farm_is_detected() {
        let mut farm = deploy();
        fund_and_stake(&mut farm, investor(), tokens(100));
        let pool = farm.address();

        farm.stake_asset_mut().transfer(&pool, &alice(), tokens(40)).unwrap();

        assert_eq!(
            farm.check_conservation(),
            Err(FarmError::ConservationViolated {
                custody: tokens(60),
                recorded: tokens(100),
            })
        );
        assert!(matches!(
            farm.unstake(&investor(), tokens(100)),
            Err(FarmError::AssetTransferFailed { .. })
        ));
        assert_eq!(farm.staking_balance_of(&investor()), tokens(100));
        farm.unstake(&investor(), tokens(60)).unwrap();
        assert_eq!(farm.staking_balance_of(&investor()), tokens(40));
    }

    // ============ Dispatch, Events and Persistence ============

    #[test]
    fn test_execute_dispatches_actions() {
        let mut farm = deploy();
        approve(&mut farm, investor(), tokens(100));

        let staked = farm
            .execute(&investor(), &FarmAction::Stake { amount: tokens(100) })
            .unwrap();
        assert!(matches!(staked, ActionOutcome::Staked(u) if u.new_balance == tokens(100)));

        let issued = farm.execute(&owner(), &FarmAction::IssueRewards).unwrap();
        assert!(matches!(issued, ActionOutcome::RewardsIssued(d) if d.total == tokens(100)));

        assert!(farm.execute(&investor(), &FarmAction::IssueRewards).is_err());

        let unstaked = farm
            .execute(&investor(), &FarmAction::Unstake { amount: tokens(60) })
            .unwrap();
        assert!(matches!(unstaked, ActionOutcome::Unstaked(u) if u.new_balance == tokens(40)));
    }

    #[test]
    fn test_events_carry_operation_sequence() {
        let mut farm = deploy();
        fund_and_stake(&mut farm, investor(), tokens(100));
        farm.issue_rewards(&owner()).unwrap();
        farm.unstake(&investor(), tokens(100)).unwrap();

        let sequences: Vec<_> = farm.events().iter().map(|e| e.sequence()).collect();
        assert_eq!(sequences, vec![1, 1, 2, 2, 3]);
        assert!(matches!(
            farm.events()[0],
            FarmEvent::ParticipantRegistered { position: 0, .. }
        ));
        assert!(matches!(
            farm.events()[4],
            FarmEvent::Unstaked { new_balance: 0, pool_total: 0, .. }
        ));
        assert_eq!(farm.sequence(), 3);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut farm = deploy();
        fund_and_stake(&mut farm, alice(), tokens(30));
        fund_and_stake(&mut farm, investor(), tokens(70));
        let snapshot = farm.snapshot();
        let config = farm.config().clone();

        let (dai, dapp) = farm.into_assets();
        let restored = TokenFarm::restore(config.clone(), dai, dapp, &snapshot).unwrap();

        assert_eq!(restored.staking_balance_of(&investor()), tokens(70));
        assert_eq!(
            restored.all_participants().copied().collect::<Vec<_>>(),
            vec![alice(), investor()]
        );
        assert_eq!(restored.total_staked(), tokens(100));

        // Fresh tokens hold no custody for the snapshot's stakes
        let result = TokenFarm::restore(
            config,
            FarmToken::mock_dai(owner()).unwrap(),
            FarmToken::dapp(owner()).unwrap(),
            &snapshot,
        );
        assert!(matches!(result, Err(FarmError::ConservationViolated { .. })));
    }

    #[test]
    fn test_farm_borrows_asset_handles() {
        let mut dai = FarmToken::mock_dai(owner()).unwrap();
        let mut dapp = FarmToken::dapp(owner()).unwrap();
        let config = FarmConfig::new(dai.asset_id(), dapp.asset_id(), owner());
        let pool = config.farm_address();
        dai.transfer(&owner(), &alice(), tokens(5)).unwrap();
        dai.approve(&alice(), &pool, tokens(5)).unwrap();
        dapp.transfer(&owner(), &pool, tokens(5)).unwrap();

        {
            let mut farm = TokenFarm::new(config, &mut dai, &mut dapp).unwrap();
            farm.stake(&alice(), tokens(5)).unwrap();
            farm.issue_rewards(&owner()).unwrap();
        }

        assert_eq!(dai.balance_of(&pool), tokens(5));
        assert_eq!(dapp.balance_of(&alice()), tokens(5));
    }

    // ============ Property Tests ============

    #[derive(Debug, Clone)]
    enum Op {
        Stake(u8, u64),
        Unstake(u8, u64),
        Issue(bool),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..3, 0u64..200).prop_map(|(a, n)| Op::Stake(a, n)),
            (0u8..3, 0u64..200).prop_map(|(a, n)| Op::Unstake(a, n)),
            any::<bool>().prop_map(Op::Issue),
        ]
    }

    const RESERVE: Amount = 5_000;

    fn small_farm() -> TokenFarm<FarmToken, FarmToken> {
        let dai = FarmToken::new(TokenMetadata::new("Stake", "STK", 0), 10_000, owner()).unwrap();
        let dapp = FarmToken::new(TokenMetadata::new("Reward", "RWD", 0), RESERVE, owner()).unwrap();
        let config = FarmConfig::new(dai.asset_id(), dapp.asset_id(), owner());
        let mut farm = TokenFarm::new(config, dai, dapp).unwrap();
        let pool = farm.address();
        farm.reward_asset_mut().transfer(&owner(), &pool, RESERVE).unwrap();
        for seed in 0u8..3 {
            let account = [seed + 10; 32];
            farm.stake_asset_mut().transfer(&owner(), &account, 1_000).unwrap();
            farm.stake_asset_mut().approve(&account, &pool, Amount::MAX).unwrap();
        }
        farm
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            .. ProptestConfig::default()
        })]

        /// Custody tracks recorded stake and no reward unit is created or
        /// lost, whatever mix of operations succeeds or fails.
        #[test]
        fn pbt_farm_conserves_both_assets(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut farm = small_farm();
            let accounts: Vec<Address> = (0u8..3).map(|s| [s + 10; 32]).collect();

            for op in ops {
                let _ = match op {
                    Op::Stake(a, n) => farm.stake(&[a + 10; 32], n as Amount).map(|_| ()),
                    Op::Unstake(a, n) => farm.unstake(&[a + 10; 32], n as Amount).map(|_| ()),
                    Op::Issue(by_owner) => {
                        let caller = if by_owner { owner() } else { accounts[0] };
                        farm.issue_rewards(&caller).map(|_| ())
                    }
                };

                prop_assert_eq!(farm.custody_balance(), farm.total_staked());
                let staked: Amount = accounts.iter().map(|a| farm.staking_balance_of(a)).sum();
                prop_assert_eq!(staked, farm.total_staked());

                let paid: Amount = accounts.iter().map(|a| farm.reward_asset().balance_of(a)).sum();
                prop_assert_eq!(paid + farm.reward_reserve(), RESERVE);

                for account in &accounts {
                    let held = farm.stake_asset().balance_of(account);
                    prop_assert_eq!(held + farm.staking_balance_of(account), 1_000);
                    prop_assert_eq!(
                        farm.is_staking_status(account),
                        farm.staking_balance_of(account) > 0
                    );
                }
            }
        }
    }
}
