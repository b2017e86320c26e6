//! Protocol Constants
//!
//! Token metadata and farm defaults. Amounts are expressed in the smallest
//! asset unit; both reference assets use 18 decimals.

/// Stake asset metadata (the deposited token)
pub mod stake_token {
    /// Token name
    pub const NAME: &str = "Mock DAI Token";
    /// Token symbol
    pub const SYMBOL: &str = "mDAI";
    /// Decimal places
    pub const DECIMALS: u8 = 18;
    /// One whole token in base units
    pub const ONE: u128 = 1_000_000_000_000_000_000;
    /// Fixed total supply (1 million tokens)
    pub const TOTAL_SUPPLY: u128 = 1_000_000 * ONE;
}

/// Reward asset metadata (the issued token)
pub mod reward_token {
    /// Token name
    pub const NAME: &str = "DApp Token";
    /// Token symbol
    pub const SYMBOL: &str = "DAPP";
    /// Decimal places
    pub const DECIMALS: u8 = 18;
    /// One whole token in base units
    pub const ONE: u128 = 1_000_000_000_000_000_000;
    /// Fixed total supply (1 million tokens)
    pub const TOTAL_SUPPLY: u128 = 1_000_000 * ONE;
}

/// Farm defaults
pub mod farm {
    /// Display name of the staking pool
    pub const NAME: &str = "Dapp Token Farm";

    /// Maximum length of a farm name in bytes
    pub const MAX_NAME_LEN: usize = 64;

    /// Reward units paid per staked unit on each issuance (1:1)
    pub const REWARD_NUMERATOR: u128 = 1;
    /// Denominator of the reward ratio
    pub const REWARD_DENOMINATOR: u128 = 1;
}

/// Domain separation tags for derived identifiers
pub mod domain {
    /// Prefix hashed into every farm custody address
    pub const FARM_ADDRESS: &[u8] = b"token-farm/address/v1";
    /// Prefix hashed into every asset identifier
    pub const ASSET_ID: &[u8] = b"token-farm/asset/v1";
}

/// The all-zero address, never a valid participant or owner
pub const ZERO_ADDRESS: [u8; 32] = [0u8; 32];
