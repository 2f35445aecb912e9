//! Message types for the NFT bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The sender becomes the first `DEFAULT_ADMIN_ROLE` holder.
#[cw_serde]
pub struct InstantiateMsg {
    /// CW721 contract holding the bridged units
    pub asset_ledger: String,
    /// Messaging gateway contract
    pub gateway: String,
    /// Mirrored asset on the destination chain (0x-hex)
    pub destination_token: String,
    /// Counterpart bridge on the destination chain (0x-hex)
    pub destination_bridge: String,
    /// Native denom relay fees are paid in (default "uluna")
    pub fee_denom: Option<String>,
    /// Flat execution fee (default 30000, i.e. 0.03 of a 6-decimal unit)
    pub execution_fee: Option<Uint128>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Lock a unit and relay a finalize call to the destination bridge.
    ///
    /// Authorization: the unit's owner, after approving the bridge on the ledger.
    /// Attach the fee quoted by `QueryMsg::RelayFee` in the fee denom.
    OutboundTransfer {
        /// Recipient on the destination chain (0x-hex)
        recipient: String,
        /// Unit identifier on the asset ledger
        amount: Uint128,
    },

    /// Release a custodied unit in response to a destination-chain transaction.
    ///
    /// Authorization: `ORACLE_ROLE`
    FinalizeInboundTransfer {
        /// Recipient on this chain
        recipient: String,
        /// Destination-chain transaction reference (0x-hex, non-empty)
        source_tx: String,
        /// Unit identifier on the asset ledger
        amount: Uint128,
    },

    // ========================================================================
    // Role Management
    // ========================================================================
    /// Authorization: `DEFAULT_ADMIN_ROLE`
    GrantRole { role: String, address: String },

    /// Authorization: `DEFAULT_ADMIN_ROLE`
    RevokeRole { role: String, address: String },

    /// Drop one of the caller's own roles
    RenounceRole { role: String },

    // ========================================================================
    // Fee Policy
    // ========================================================================
    /// Authorization: `DEFAULT_ADMIN_ROLE`
    SetExecutionFee { execution_fee: Uint128 },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Fees an outbound transfer must attach right now
    #[returns(RelayFeeResponse)]
    RelayFee {},

    #[returns(StatsResponse)]
    Stats {},

    // ========================================================================
    // Roles
    // ========================================================================
    #[returns(RoleResponse)]
    OracleRole {},

    #[returns(RoleResponse)]
    DefaultAdminRole {},

    #[returns(HasRoleResponse)]
    HasRole { role: String, address: String },

    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    // ========================================================================
    // Transfers
    // ========================================================================
    #[returns(Option<OutboundTransferResponse>)]
    OutboundTransfer { nonce: u64 },

    #[returns(IsFinalizedResponse)]
    IsFinalized { source_tx: String },

    #[returns(Option<FinalizationResponse>)]
    Finalization { source_tx: String },

    // ========================================================================
    // Custody
    // ========================================================================
    /// Bridge bookkeeping for a locked unit
    #[returns(Option<CustodyResponse>)]
    Custody { amount: Uint128 },

    /// Units the bridge holds on the asset ledger
    #[returns(CustodyBalanceResponse)]
    CustodyBalance {},

    /// Ledger owner of a unit
    #[returns(OwnerOfResponse)]
    OwnerOf { amount: Uint128 },

    /// Payload an outbound transfer would carry
    #[returns(PayloadResponse)]
    EncodeFinalizePayload {
        recipient: String,
        source_tx: String,
        amount: Uint128,
    },
}

// ============================================================================
// Response Types
// ============================================================================

/// Returned as response `data` from `OutboundTransfer`
#[cw_serde]
pub struct TransferReceipt {
    pub nonce: u64,
    pub execution_fee: Uint128,
    pub flags: u32,
    pub fallback_address: String,
    pub payload: Binary,
}

#[cw_serde]
pub struct ConfigResponse {
    pub asset_ledger: Addr,
    pub gateway: Addr,
    pub destination_token: String,
    pub destination_bridge: String,
}

#[cw_serde]
pub struct RelayFeeResponse {
    pub execution_fee: Uint128,
    pub gateway_base_fee: Uint128,
    pub total: Uint128,
    pub denom: String,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_outbound: u64,
    pub total_finalized: u64,
    pub total_fees_forwarded: Uint128,
}

#[cw_serde]
pub struct RoleResponse {
    pub role: String,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: String,
    pub members: Vec<Addr>,
}

#[cw_serde]
pub struct OutboundTransferResponse {
    pub nonce: u64,
    pub depositor: Addr,
    pub recipient: String,
    pub amount: Uint128,
    pub execution_fee: Uint128,
    pub submitted_at: Timestamp,
}

#[cw_serde]
pub struct IsFinalizedResponse {
    pub finalized: bool,
}

#[cw_serde]
pub struct FinalizationResponse {
    pub source_tx: String,
    pub recipient: Addr,
    pub amount: Uint128,
    pub oracle: Addr,
    pub finalized_at: Timestamp,
}

#[cw_serde]
pub struct CustodyResponse {
    pub amount: Uint128,
    pub depositor: Addr,
    pub nonce: u64,
    pub locked_at: Timestamp,
}

#[cw_serde]
pub struct CustodyBalanceResponse {
    pub balance: u64,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub amount: Uint128,
    pub owner: String,
}

#[cw_serde]
pub struct PayloadResponse {
    pub payload: Binary,
}
