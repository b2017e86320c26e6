//! Farm Events
//!
//! Events are emitted as the farm mutates state and can be indexed
//! off-chain for analytics and notifications. Each carries the sequence
//! number of the operation that produced it.

use crate::Vec;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use crate::types::{Address, Amount};

/// Event types for indexing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    // Staking Events (0x01 - 0x1F)
    Staked = 0x01,
    Unstaked = 0x02,
    ParticipantRegistered = 0x03,

    // Reward Events (0x20 - 0x3F)
    RewardPaid = 0x20,
    RewardsIssued = 0x21,
    RewardsReverted = 0x22,
}

/// Main event enum containing all farm events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum FarmEvent {
    // ============ Staking Events ============

    /// Emitted when stake asset is pulled into the pool
    Staked {
        account: Address,
        amount: Amount,
        new_balance: Amount,
        pool_total: Amount,
        sequence: u64,
    },

    /// Emitted when stake asset is returned to a participant
    Unstaked {
        account: Address,
        amount: Amount,
        new_balance: Amount,
        pool_total: Amount,
        sequence: u64,
    },

    /// Emitted the first time an account stakes
    ParticipantRegistered {
        account: Address,
        position: u64,
        sequence: u64,
    },

    // ============ Reward Events ============

    /// Emitted for every participant paid during an issuance
    RewardPaid {
        account: Address,
        amount: Amount,
        sequence: u64,
    },

    /// Emitted once per successful issuance
    RewardsIssued {
        recipients: u64,
        total: Amount,
        sequence: u64,
    },

    /// Emitted when a failed issuance was compensated
    RewardsReverted {
        reverted_payouts: u64,
        sequence: u64,
    },
}

impl FarmEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Staked { .. } => EventType::Staked,
            Self::Unstaked { .. } => EventType::Unstaked,
            Self::ParticipantRegistered { .. } => EventType::ParticipantRegistered,
            Self::RewardPaid { .. } => EventType::RewardPaid,
            Self::RewardsIssued { .. } => EventType::RewardsIssued,
            Self::RewardsReverted { .. } => EventType::RewardsReverted,
        }
    }

    /// Get the sequence number of the producing operation
    pub fn sequence(&self) -> u64 {
        match self {
            Self::Staked { sequence, .. } => *sequence,
            Self::Unstaked { sequence, .. } => *sequence,
            Self::ParticipantRegistered { sequence, .. } => *sequence,
            Self::RewardPaid { sequence, .. } => *sequence,
            Self::RewardsIssued { sequence, .. } => *sequence,
            Self::RewardsReverted { sequence, .. } => *sequence,
        }
    }

    /// Serialize event to bytes for storage/transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Event log for collecting events across operations
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<FarmEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (add to log)
    pub fn emit(&mut self, event: FarmEvent) {
        self.events.push(event);
    }

    /// Get all events
    pub fn events(&self) -> &[FarmEvent] {
        &self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&FarmEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been emitted
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type() {
        let event = FarmEvent::Staked {
            account: [2u8; 32],
            amount: 100,
            new_balance: 100,
            pool_total: 100,
            sequence: 7,
        };

        assert_eq!(event.event_type(), EventType::Staked);
        assert_eq!(event.sequence(), 7);
    }

    #[test]
    fn test_event_serialization() {
        let event = FarmEvent::RewardPaid {
            account: [3u8; 32],
            amount: 1_000_000_000_000_000_000_000_000,
            sequence: 4,
        };

        let restored = FarmEvent::from_bytes(&event.to_bytes()).unwrap();
        assert_eq!(event, restored);
    }

    #[test]
    fn test_event_log() {
        let mut log = EventLog::new();

        log.emit(FarmEvent::ParticipantRegistered {
            account: [2u8; 32],
            position: 0,
            sequence: 1,
        });
        log.emit(FarmEvent::Staked {
            account: [2u8; 32],
            amount: 50,
            new_balance: 50,
            pool_total: 50,
            sequence: 1,
        });
        log.emit(FarmEvent::RewardsIssued {
            recipients: 1,
            total: 50,
            sequence: 2,
        });

        assert_eq!(log.len(), 3);
        assert!(log.has_events());
        assert_eq!(log.filter_by_type(EventType::Staked).len(), 1);

        assert_eq!(log.filter_by_type(EventType::RewardsIssued).len(), 1);
        assert!(log.filter_by_type(EventType::RewardsReverted).is_empty());
    }
}
