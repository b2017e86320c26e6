//! Asset Interface
//!
//! The farm never moves value itself. Every debit and credit goes through a
//! [`FungibleAsset`], which must apply each transfer atomically: it either
//! fully succeeds or fails with no balance change.
//!
//! Two independent instances back a farm: the stake asset and the reward
//! asset.

use crate::errors::AssetResult;
use crate::types::{Address, Amount, AssetId};

/// Minimal fungible-asset surface consumed by the farm
pub trait FungibleAsset {
    /// Stable identifier checked against the farm config
    fn asset_id(&self) -> AssetId;

    /// Display name (metadata only)
    fn name(&self) -> &str;

    /// Ticker symbol (metadata only)
    fn symbol(&self) -> &str;

    /// Decimal places of one whole token
    fn decimals(&self) -> u8;

    /// Fixed total supply
    fn total_supply(&self) -> Amount;

    /// Balance held by `account`
    fn balance_of(&self, account: &Address) -> Amount;

    /// Move `amount` from `from` to `to`
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> AssetResult<()>;

    /// Move `amount` from `owner` to `to` under an allowance granted to `spender`
    fn transfer_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        to: &Address,
        amount: Amount,
    ) -> AssetResult<()>;
}

impl<T: FungibleAsset + ?Sized> FungibleAsset for &mut T {
    fn asset_id(&self) -> AssetId {
        (**self).asset_id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn symbol(&self) -> &str {
        (**self).symbol()
    }

    fn decimals(&self) -> u8 {
        (**self).decimals()
    }

    fn total_supply(&self) -> Amount {
        (**self).total_supply()
    }

    fn balance_of(&self, account: &Address) -> Amount {
        (**self).balance_of(account)
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> AssetResult<()> {
        (**self).transfer(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        to: &Address,
        amount: Amount,
    ) -> AssetResult<()> {
        (**self).transfer_from(spender, owner, to, amount)
    }
}
