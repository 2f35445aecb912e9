//! Reference messaging gateway.
//!
//! Accepts fee-bearing relay submissions, stores them by nonce and emits the
//! `Sent` and `Log` events relayers watch for. Delivery to the destination
//! chain happens off-chain and is not modelled here.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
