//! Token Farm Common Library
//!
//! Shared types, constants, and accounting primitives for the Token Farm
//! staking ledger.
//!
//! ## Model
//!
//! Participants deposit a *stake asset* into a pool. The pool records each
//! participant's staked balance, and an owner periodically issues a *reward
//! asset* to every participant that is currently staking, proportional to
//! their stake.
//!
//! - **Asset Interface**: [`FungibleAsset`] is the only contact with token
//!   mechanics; the engine never moves value itself
//! - **Participant Registry**: insertion-ordered, append-only set of accounts
//!   that have ever staked
//! - **Staking Ledger**: per-account staked balance, with staking status
//!   derived from the balance
//! - **Reward Issuer**: owner-gated payout schedule over the registry
//! - **Events**: structured, borsh-encodable record of every state change
//!
//! This crate is `no_std` compatible when built without the `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export collections for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::{collections::BTreeMap, collections::BTreeSet, string::String, vec::Vec};
#[cfg(feature = "std")]
pub use std::{collections::BTreeMap, collections::BTreeSet, string::String, vec::Vec};

pub mod constants;
pub mod errors;
pub mod types;
pub mod events;
pub mod asset;
pub mod access_control;
pub mod registry;
pub mod ledger;
pub mod rewards;
pub mod snapshot;


// Re-exports for convenience
pub use errors::*;
pub use types::*;
pub use events::*;
pub use asset::*;
pub use access_control::*;
pub use registry::*;
pub use ledger::*;
pub use rewards::*;
pub use snapshot::*;
