//! Error Types for Token Farm
//!
//! Typed errors for the staking ledger and for the asset interface it calls.
//! Every failure is caller-visible; none leaves the ledger unusable.

use core::fmt;

use crate::types::{Address, Amount, AssetId};

/// Result type alias for farm operations
pub type FarmResult<T> = Result<T, FarmError>;

/// Result type alias for asset interface calls
pub type AssetResult<T> = Result<T, AssetError>;

/// Failures reported by a [`FungibleAsset`](crate::asset::FungibleAsset)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetError {
    /// Source account does not hold enough of the asset
    InsufficientBalance { available: Amount, requested: Amount },

    /// Spender has not been approved for enough of the owner's balance
    InsufficientAllowance { available: Amount, requested: Amount },

    /// Zero-amount transfers are rejected
    ZeroAmount,

    /// Address is not a valid transfer endpoint
    InvalidAddress { reason: &'static str },

    /// Arithmetic overflow on a balance or allowance
    Overflow,
}

impl AssetError {
    /// Returns a human-readable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientBalance { .. } => "A001_INSUFFICIENT_BALANCE",
            Self::InsufficientAllowance { .. } => "A002_INSUFFICIENT_ALLOWANCE",
            Self::ZeroAmount => "A003_ZERO_AMOUNT",
            Self::InvalidAddress { .. } => "A004_INVALID_ADDRESS",
            Self::Overflow => "A005_OVERFLOW",
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientBalance { available, requested } => {
                write!(f, "insufficient balance: available {available}, requested {requested}")
            }
            Self::InsufficientAllowance { available, requested } => {
                write!(f, "insufficient allowance: available {available}, requested {requested}")
            }
            Self::ZeroAmount => f.write_str("zero amount"),
            Self::InvalidAddress { reason } => write!(f, "invalid address: {reason}"),
            Self::Overflow => f.write_str("arithmetic overflow"),
        }
    }
}

/// Main error enum for all farm operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FarmError {
    // ============ Amount Errors ============
    /// Amount passed to stake/unstake is not usable
    InvalidAmount { amount: Amount, reason: AmountErrorReason },

    /// Pulling the stake asset into the pool failed
    InsufficientAllowanceOrBalance {
        account: Address,
        amount: Amount,
        cause: AssetError,
    },

    /// Unstake amount exceeds the recorded staked balance
    InsufficientStakedBalance { available: Amount, requested: Amount },

    // ============ Transfer Errors ============
    /// Moving an asset out of the pool failed
    AssetTransferFailed {
        to: Address,
        amount: Amount,
        cause: AssetError,
    },

    // ============ Authorization Errors ============
    /// Caller is not the farm owner
    Unauthorized { expected: Address, actual: Address },

    // ============ Configuration Errors ============
    /// Construction-time configuration rejected
    InvalidConfig { reason: &'static str },

    /// Asset handle does not match the configured asset id
    AssetMismatch { expected: AssetId, actual: AssetId },

    // ============ Invariant Errors ============
    /// Pool custody is below the recorded total stake
    ConservationViolated { custody: Amount, recorded: Amount },

    /// Snapshot does not describe a consistent ledger
    CorruptSnapshot { reason: &'static str },

    // ============ Math Errors ============
    /// Arithmetic overflow occurred
    Overflow,
}

/// Reasons for amount-related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountErrorReason {
    /// Amount is zero when non-zero required
    Zero,
}

impl FarmError {
    /// Returns a human-readable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "E010_INVALID_AMOUNT",
            Self::InsufficientAllowanceOrBalance { .. } => "E011_ALLOWANCE_OR_BALANCE",
            Self::InsufficientStakedBalance { .. } => "E012_INSUFFICIENT_STAKE",
            Self::AssetTransferFailed { .. } => "E020_TRANSFER_FAILED",
            Self::Unauthorized { .. } => "E030_UNAUTHORIZED",
            Self::InvalidConfig { .. } => "E040_INVALID_CONFIG",
            Self::AssetMismatch { .. } => "E041_ASSET_MISMATCH",
            Self::ConservationViolated { .. } => "E050_CONSERVATION",
            Self::CorruptSnapshot { .. } => "E051_CORRUPT_SNAPSHOT",
            Self::Overflow => "E080_OVERFLOW",
        }
    }

    /// Returns true if this error is recoverable (user can fix it)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InsufficientAllowanceOrBalance { .. } => true, // Approve or fund
            Self::InsufficientStakedBalance { .. } => true,      // Unstake less
            Self::InvalidAmount { .. } => true,                  // Pass a positive amount
            Self::AssetTransferFailed { .. } => true,            // Top up the pool
            _ => false,
        }
    }
}

impl fmt::Display for FarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount { amount, reason } => {
                write!(f, "{}: amount {amount} rejected ({reason:?})", self.code())
            }
            Self::InsufficientAllowanceOrBalance { amount, cause, .. } => {
                write!(f, "{}: cannot pull {amount} into pool: {cause}", self.code())
            }
            Self::InsufficientStakedBalance { available, requested } => write!(
                f,
                "{}: staked {available}, requested {requested}",
                self.code()
            ),
            Self::AssetTransferFailed { amount, cause, .. } => {
                write!(f, "{}: cannot send {amount} from pool: {cause}", self.code())
            }
            Self::Unauthorized { .. } => write!(f, "{}: caller is not the owner", self.code()),
            Self::InvalidConfig { reason } => write!(f, "{}: {reason}", self.code()),
            Self::AssetMismatch { .. } => {
                write!(f, "{}: asset handle does not match config", self.code())
            }
            Self::ConservationViolated { custody, recorded } => write!(
                f,
                "{}: custody {custody} below recorded stake {recorded}",
                self.code()
            ),
            Self::CorruptSnapshot { reason } => write!(f, "{}: {reason}", self.code()),
            Self::Overflow => write!(f, "{}: arithmetic overflow", self.code()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AssetError {}

#[cfg(feature = "std")]
impl std::error::Error for FarmError {}
