//! NFT Bridge Contract - Cross-Chain NFT Bridging over a Messaging Gateway
//!
//! Locks CW721 units on this chain and relays a `finalizeInboundTransfer`
//! call to the counterpart bridge on the destination chain.
//!
//! # Outbound Flow (Lock)
//! 1. Owner approves the bridge for a unit on the asset ledger
//! 2. Owner calls `OutboundTransfer`, attaching the relay fee
//! 3. The bridge pulls the unit into custody and hands a `Send` to the gateway
//!
//! # Inbound Flow (Release)
//! 1. An `ORACLE_ROLE` holder reports a destination-chain transaction
//! 2. The bridge records the transaction reference, then releases the unit
//! 3. Replaying the same reference fails with `AlreadyFinalized`

pub mod address_codec;
pub mod contract;
pub mod custody;
pub mod error;
mod execute;
pub mod fee_manager;
pub mod msg;
pub mod payload;
mod query;
pub mod replay;
pub mod roles;
pub mod state;
pub mod validate;

pub use crate::address_codec::EvmAddress;
pub use crate::error::ContractError;
pub use crate::fee_manager::FeeQuote;
pub use crate::payload::{encode_finalize_payload, keccak256};
