//! Core Types for Token Farm
//!
//! Identifiers, the construction-time configuration, and the participant
//! view shared by every farm component.

use crate::{String, Vec};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{domain, farm, ZERO_ADDRESS};
use crate::errors::{FarmError, FarmResult};

/// Type alias for account addresses (32-byte hash)
pub type Address = [u8; 32];

/// Type alias for asset identifiers
pub type AssetId = [u8; 32];

/// Amount in the smallest asset unit
pub type Amount = u128;

// ============ Participant ============

/// Read-only view of one participant's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Participant {
    /// Participant account
    pub account: Address,
    /// Amount currently deposited in the pool
    pub staked_balance: Amount,
}

impl Participant {
    pub fn new(account: Address, staked_balance: Amount) -> Self {
        Self { account, staked_balance }
    }

    /// Active staking is derived from the balance, never stored
    pub fn is_staking(&self) -> bool {
        self.staked_balance > 0
    }
}

// ============ Farm Config ============

/// Construction-time configuration, immutable once the farm exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct FarmConfig {
    /// Display name of the pool
    pub name: String,
    /// Asset participants deposit
    pub stake_asset: AssetId,
    /// Asset distributed on issuance
    pub reward_asset: AssetId,
    /// Only this account may issue rewards
    pub owner: Address,
}

impl FarmConfig {
    /// Config with the default farm name
    pub fn new(stake_asset: AssetId, reward_asset: AssetId, owner: Address) -> Self {
        Self {
            name: farm::NAME.into(),
            stake_asset,
            reward_asset,
            owner,
        }
    }

    /// Override the display name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    /// Reject configurations the farm cannot operate under
    pub fn validate(&self) -> FarmResult<()> {
        if self.owner == ZERO_ADDRESS {
            return Err(FarmError::InvalidConfig {
                reason: "owner cannot be the zero address",
            });
        }
        if self.stake_asset == self.reward_asset {
            return Err(FarmError::InvalidConfig {
                reason: "stake and reward assets must differ",
            });
        }
        if self.name.is_empty() || self.name.len() > farm::MAX_NAME_LEN {
            return Err(FarmError::InvalidConfig {
                reason: "farm name must be 1..=64 bytes",
            });
        }
        Ok(())
    }

    /// Custody address of a farm built from this config
    pub fn farm_address(&self) -> Address {
        derive_farm_address(&self.owner, &self.stake_asset, &self.reward_asset)
    }

    /// Serialize config to bytes for storage/transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize config from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

// ============ Derived Identifiers ============

/// Generate the deterministic custody address of a farm
pub fn derive_farm_address(owner: &Address, stake_asset: &AssetId, reward_asset: &AssetId) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(domain::FARM_ADDRESS);
    hasher.update(owner);
    hasher.update(stake_asset);
    hasher.update(reward_asset);
    let result = hasher.finalize();
    let mut address = [0u8; 32];
    address.copy_from_slice(&result);
    address
}

/// Generate a deterministic asset identifier from its metadata and issuer
pub fn derive_asset_id(symbol: &str, issuer: &Address) -> AssetId {
    let mut hasher = Sha256::new();
    hasher.update(domain::ASSET_ID);
    hasher.update(symbol.as_bytes());
    hasher.update(issuer);
    let result = hasher.finalize();
    let mut id = [0u8; 32];
    id.copy_from_slice(&result);
    id
}
