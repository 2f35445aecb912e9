//! Common - Shared Types for the NFT Bridge Contracts
//!
//! This package provides the wire types shared between the bridge contract
//! and the cross-chain messaging gateway it relays through, plus the
//! well-known role identifiers.

pub mod gateway;
pub mod roles;

pub use gateway::{
    flags, GatewayExecuteMsg, GatewayQueryMsg, GlobalFeeResponse, RelayMessage,
    SubmissionResponse,
};
pub use roles::{DEFAULT_ADMIN_ROLE, ORACLE_ROLE};
