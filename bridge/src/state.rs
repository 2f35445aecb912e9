//! State definitions for the NFT bridge contract
//!
//! All bridge state lives in the typed storage slots below. Handlers mutate it
//! only inside a single execute call, which the chain commits atomically
//! together with the messages the handler returns.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Bridge dependencies, fixed at instantiation. No handler rewrites this.
#[cw_serde]
pub struct Config {
    /// CW721 contract whose units the bridge custodies
    pub asset_ledger: Addr,
    /// Messaging gateway outbound transfers are relayed through
    pub gateway: Addr,
    /// Mirrored asset on the destination chain (lower-case hex)
    pub destination_token: String,
    /// Counterpart bridge on the destination chain (lower-case hex)
    pub destination_bridge: String,
}

/// Relay fee policy
#[cw_serde]
pub struct FeeConfig {
    /// Flat fee paid to the destination executor per outbound transfer
    pub execution_fee: Uint128,
    /// Native denom fees are attached in
    pub fee_denom: String,
}

/// Audit record of an outbound transfer
#[cw_serde]
pub struct OutboundRecord {
    pub nonce: u64,
    pub depositor: Addr,
    /// Recipient on the destination chain (lower-case hex)
    pub recipient: String,
    pub amount: Uint128,
    pub execution_fee: Uint128,
    pub submitted_at: Timestamp,
}

/// A unit currently locked by the bridge
#[cw_serde]
pub struct CustodyRecord {
    pub depositor: Addr,
    /// Nonce of the outbound transfer that locked it
    pub nonce: u64,
    pub locked_at: Timestamp,
}

/// An applied inbound finalization. Never removed.
#[cw_serde]
pub struct FinalizationRecord {
    pub recipient: Addr,
    pub amount: Uint128,
    pub oracle: Addr,
    pub finalized_at: Timestamp,
}

/// Bridge statistics
#[cw_serde]
pub struct Stats {
    pub total_outbound: u64,
    pub total_finalized: u64,
    /// Native funds forwarded to the gateway
    pub total_fees_forwarded: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:nft-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default flat relay fee: 0.03 of a 6-decimal native unit
pub const DEFAULT_EXECUTION_FEE: u128 = 30_000;

/// Default native fee denom
pub const DEFAULT_FEE_DENOM: &str = "uluna";

/// Reply id of the ledger pull into custody
pub const REPLY_PULL: u64 = 1;

/// Reply id of the gateway `Send`
pub const REPLY_RELAY: u64 = 2;

/// Reply id of the ledger release to the recipient
pub const REPLY_RELEASE: u64 = 3;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const FEE_CONFIG: Item<FeeConfig> = Item::new("fee_config");

pub const STATS: Item<Stats> = Item::new("stats");

/// Next outbound nonce
pub const OUTBOUND_NONCE: Item<u64> = Item::new("outbound_nonce");

/// Key: nonce
pub const OUTBOUND_TRANSFERS: Map<u64, OutboundRecord> = Map::new("outbound_transfers");

/// Key: unit id (decimal string, as the ledger names it)
pub const CUSTODY: Map<&str, CustodyRecord> = Map::new("custody");

/// Key: (role, member)
pub const ROLE_MEMBERS: Map<(&str, &Addr), bool> = Map::new("role_members");

/// Key: role, Value: member count
pub const ROLE_COUNTS: Map<&str, u32> = Map::new("role_counts");

/// Unit moved by the ledger sub-message of the current execution, read back
/// when that sub-message fails
pub const PENDING_UNIT: Item<String> = Item::new("pending_unit");

/// Key: raw source transaction reference bytes
pub const FINALIZED: Map<&[u8], FinalizationRecord> = Map::new("finalized");
