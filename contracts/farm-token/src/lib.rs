//! Farm Token
//!
//! In-memory fixed-supply fungible token implementing [`FungibleAsset`].
//! Two instances back a deployed farm: the "Mock DAI Token" deposited by
//! participants and the "DApp Token" paid out as rewards.
//!
//! The whole supply is minted to the issuer at creation; there is no later
//! mint or burn. Every transfer is atomic: it is validated in full before
//! any balance changes.

use std::collections::BTreeMap;
use std::vec::Vec;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use farm_common::{
    asset::FungibleAsset,
    constants::{reward_token, stake_token, ZERO_ADDRESS},
    errors::{AssetError, AssetResult},
    types::{derive_asset_id, Address, Amount, AssetId},
};

// ============ Token Metadata ============

/// Static description of a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new(name: &str, symbol: &str, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

// ============ Token Events ============

/// Balance and allowance changes recorded by the token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum TokenEvent {
    Transfer {
        from: Address,
        to: Address,
        amount: Amount,
    },
    Approval {
        owner: Address,
        spender: Address,
        amount: Amount,
    },
}

// ============ Token State ============

/// Complete token state: metadata, balances and allowances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct FarmToken {
    id: AssetId,
    metadata: TokenMetadata,
    total_supply: Amount,
    balances: BTreeMap<Address, Amount>,
    /// Keyed by (owner, spender)
    allowances: BTreeMap<(Address, Address), Amount>,
    events: Vec<TokenEvent>,
}

impl FarmToken {
    /// Create a token and mint the whole supply to `issuer`
    pub fn new(metadata: TokenMetadata, total_supply: Amount, issuer: Address) -> AssetResult<Self> {
        if issuer == ZERO_ADDRESS {
            return Err(AssetError::InvalidAddress {
                reason: "issuer cannot be the zero address",
            });
        }

        let id = derive_asset_id(&metadata.symbol, &issuer);
        let mut balances = BTreeMap::new();
        if total_supply > 0 {
            balances.insert(issuer, total_supply);
        }

        tracing::debug!(symbol = %metadata.symbol, total_supply, "token created");

        Ok(Self {
            id,
            metadata,
            total_supply,
            balances,
            allowances: BTreeMap::new(),
            events: vec![TokenEvent::Transfer {
                from: ZERO_ADDRESS,
                to: issuer,
                amount: total_supply,
            }],
        })
    }

    /// The stake token: "Mock DAI Token" (mDAI), 1,000,000 supply
    pub fn mock_dai(issuer: Address) -> AssetResult<Self> {
        Self::new(
            TokenMetadata::new(stake_token::NAME, stake_token::SYMBOL, stake_token::DECIMALS),
            stake_token::TOTAL_SUPPLY,
            issuer,
        )
    }

    /// The reward token: "DApp Token" (DAPP), 1,000,000 supply
    pub fn dapp(issuer: Address) -> AssetResult<Self> {
        Self::new(
            TokenMetadata::new(reward_token::NAME, reward_token::SYMBOL, reward_token::DECIMALS),
            reward_token::TOTAL_SUPPLY,
            issuer,
        )
    }

    /// Set the amount `spender` may move out of `owner`'s balance
    ///
    /// Overwrites any previous allowance.
    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount) -> AssetResult<()> {
        if *spender == ZERO_ADDRESS {
            return Err(AssetError::InvalidAddress {
                reason: "spender cannot be the zero address",
            });
        }

        self.allowances.insert((*owner, *spender), amount);
        self.events.push(TokenEvent::Approval {
            owner: *owner,
            spender: *spender,
            amount,
        });
        Ok(())
    }

    /// Remaining amount `spender` may move out of `owner`'s balance
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    /// Every transfer and approval in order, starting with the initial mint
    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Check and apply a balance move
    fn move_balance(&mut self, from: &Address, to: &Address, amount: Amount) -> AssetResult<()> {
        // 1. Amount must be positive
        if amount == 0 {
            return Err(AssetError::ZeroAmount);
        }

        // 2. No transfers to the zero address (supply is fixed)
        if *to == ZERO_ADDRESS {
            return Err(AssetError::InvalidAddress {
                reason: "recipient cannot be the zero address",
            });
        }

        // 3. Sender must have enough balance
        let available = self.balance_of(from);
        if available < amount {
            return Err(AssetError::InsufficientBalance {
                available,
                requested: amount,
            });
        }

        // 4. Self-transfer moves nothing but is still recorded
        if from != to {
            let recipient = self
                .balance_of(to)
                .checked_add(amount)
                .ok_or(AssetError::Overflow)?;
            self.balances.insert(*from, available - amount);
            self.balances.insert(*to, recipient);
        }

        self.events.push(TokenEvent::Transfer {
            from: *from,
            to: *to,
            amount,
        });
        Ok(())
    }
}

impl FungibleAsset for FarmToken {
    fn asset_id(&self) -> AssetId {
        self.id
    }

    fn name(&self) -> &str {
        &self.metadata.name
    }

    fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> AssetResult<()> {
        self.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        to: &Address,
        amount: Amount,
    ) -> AssetResult<()> {
        let allowance = self.allowance(owner, spender);
        if allowance < amount {
            return Err(AssetError::InsufficientAllowance {
                available: allowance,
                requested: amount,
            });
        }

        self.move_balance(owner, to, amount)?;
        self.allowances.insert((*owner, *spender), allowance - amount);
        Ok(())
    }
}

// ============ Helper Functions ============

/// Split an amount into whole tokens and the fractional remainder
pub fn format_amount(amount: Amount, decimals: u8) -> (Amount, Amount) {
    let one = 10u128.pow(u32::from(decimals));
    (amount / one, amount % one)
}

/// Whole tokens to base units for an 18-decimal token
pub fn tokens(whole: Amount) -> Amount {
    whole.saturating_mul(stake_token::ONE)
}

// ============ Tests ============
