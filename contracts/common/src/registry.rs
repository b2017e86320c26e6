//! Participant Registry
//!
//! Ordered, append-only, duplicate-free set of every account that has ever
//! staked. Insertion order defines reward iteration order, independent of
//! how balances are stored.

use core::slice;

use crate::types::Address;
use crate::{BTreeSet, Vec};

/// Registry of accounts that have staked at least once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantRegistry {
    order: Vec<Address>,
    members: BTreeSet<Address>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `account` unless already present. Returns true when inserted.
    pub fn register_if_absent(&mut self, account: Address) -> bool {
        if !self.members.insert(account) {
            return false;
        }
        self.order.push(account);
        true
    }

    /// Every registered account in insertion order
    ///
    /// The iterator is lazy and finite; calling this again restarts from the
    /// first participant.
    pub fn all_participants(&self) -> slice::Iter<'_, Address> {
        self.order.iter()
    }

    pub fn contains(&self, account: &Address) -> bool {
        self.members.contains(account)
    }

    /// Zero-based insertion position of `account`
    pub fn position(&self, account: &Address) -> Option<usize> {
        if !self.contains(account) {
            return None;
        }
        self.order.iter().position(|a| a == account)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Rebuild from an ordered list, rejecting duplicates
    pub(crate) fn from_ordered(accounts: &[Address]) -> Option<Self> {
        let mut registry = Self::new();
        for account in accounts {
            if !registry.register_if_absent(*account) {
                return None;
            }
        }
        Some(registry)
    }
}
