//! Ledger Snapshots
//!
//! Portable image of the registry and ledger, for persisting a farm between
//! runs. Restoring validates that the two halves describe the same set of
//! participants.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::ledger::StakingLedger;
use crate::registry::ParticipantRegistry;
use crate::types::{Address, Amount, Participant};
use crate::{FarmError, FarmResult, Vec};

/// Serialized farm accounting state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct LedgerSnapshot {
    /// Registry in insertion order
    pub participants: Vec<Address>,
    /// Every recorded position
    pub positions: Vec<Participant>,
    /// Recorded total, checked on restore
    pub total_staked: Amount,
}

impl LedgerSnapshot {
    /// Capture the current registry and ledger
    pub fn capture(registry: &ParticipantRegistry, ledger: &StakingLedger) -> Self {
        Self {
            participants: registry.all_participants().copied().collect(),
            positions: ledger.positions().collect(),
            total_staked: ledger.total_staked(),
        }
    }

    /// Rebuild the registry and ledger, rejecting inconsistent images
    pub fn restore(&self) -> FarmResult<(ParticipantRegistry, StakingLedger)> {
        let registry = ParticipantRegistry::from_ordered(&self.participants).ok_or(
            FarmError::CorruptSnapshot {
                reason: "duplicate registry entry",
            },
        )?;
        let ledger = StakingLedger::from_positions(&self.positions)?;

        if ledger.total_staked() != self.total_staked {
            return Err(FarmError::CorruptSnapshot {
                reason: "total does not match positions",
            });
        }
        if registry.len() != self.positions.len()
            || self.positions.iter().any(|p| !registry.contains(&p.account))
        {
            return Err(FarmError::CorruptSnapshot {
                reason: "registry and positions disagree",
            });
        }

        Ok((registry, ledger))
    }

    /// Serialize snapshot to bytes for storage
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}
