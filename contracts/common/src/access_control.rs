//! Access Control Module
//!
//! A farm has exactly one privileged account, fixed at construction. It is
//! the only identity allowed to trigger reward issuance.

use crate::constants::ZERO_ADDRESS;
use crate::types::Address;
use crate::{FarmError, FarmResult};

/// Privileged operations gated by ownership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Distribute the reward asset to active participants
    IssueRewards,
}

/// Immutable owner record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    owner: Address,
}

impl Ownership {
    /// Record the owner; the zero address is rejected
    pub fn new(owner: Address) -> FarmResult<Self> {
        if owner == ZERO_ADDRESS {
            return Err(FarmError::InvalidConfig {
                reason: "owner cannot be the zero address",
            });
        }
        Ok(Self { owner })
    }

    /// The owner account
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Check if `caller` may perform `permission`
    pub fn has_permission(&self, caller: &Address, permission: Permission) -> bool {
        match permission {
            Permission::IssueRewards => *caller == self.owner,
        }
    }

    /// Fail with `Unauthorized` unless `caller` may perform `permission`
    pub fn require(&self, caller: &Address, permission: Permission) -> FarmResult<()> {
        if !self.has_permission(caller, permission) {
            tracing::warn!(?permission, "rejected call from non-owner");
            return Err(FarmError::Unauthorized {
                expected: self.owner,
                actual: *caller,
            });
        }
        Ok(())
    }
}
