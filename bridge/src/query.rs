//! Query handlers for the NFT bridge contract.

use cosmwasm_std::{Deps, Env, StdError, StdResult, Uint128};

use common::{DEFAULT_ADMIN_ROLE, ORACLE_ROLE};

use crate::address_codec::EvmAddress;
use crate::custody;
use crate::execute::parse_source_tx;
use crate::fee_manager;
use crate::msg::{
    ConfigResponse, CustodyBalanceResponse, CustodyResponse, FinalizationResponse,
    HasRoleResponse, IsFinalizedResponse, OutboundTransferResponse, OwnerOfResponse,
    PayloadResponse, RelayFeeResponse, RoleMembersResponse, RoleResponse, StatsResponse,
};
use crate::payload::{encode_finalize_payload, parse_hex, to_hex};
use crate::replay;
use crate::roles;
use crate::state::{CONFIG, CUSTODY, FEE_CONFIG, OUTBOUND_TRANSFERS, STATS};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        asset_ledger: config.asset_ledger,
        gateway: config.gateway,
        destination_token: config.destination_token,
        destination_bridge: config.destination_bridge,
    })
}

pub fn query_relay_fee(deps: Deps) -> StdResult<RelayFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fee_config = FEE_CONFIG.load(deps.storage)?;
    let quote = fee_manager::quote(&deps.querier, &config.gateway, &fee_config)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(RelayFeeResponse {
        execution_fee: quote.execution_fee,
        gateway_base_fee: quote.gateway_base_fee,
        total: quote.total,
        denom: quote.denom,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_outbound: stats.total_outbound,
        total_finalized: stats.total_finalized,
        total_fees_forwarded: stats.total_fees_forwarded,
    })
}

// ============================================================================
// Role Queries
// ============================================================================

pub fn query_oracle_role() -> RoleResponse {
    RoleResponse {
        role: ORACLE_ROLE.to_string(),
    }
}

pub fn query_default_admin_role() -> RoleResponse {
    RoleResponse {
        role: DEFAULT_ADMIN_ROLE.to_string(),
    }
}

pub fn query_has_role(deps: Deps, role: String, address: String) -> StdResult<HasRoleResponse> {
    let account = deps.api.addr_validate(&address)?;
    Ok(HasRoleResponse {
        has_role: roles::has_role(deps.storage, &role, &account)?,
    })
}

pub fn query_role_members(
    deps: Deps,
    role: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let start_after = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let members = roles::members(deps.storage, &role, start_after, limit)?;
    Ok(RoleMembersResponse { role, members })
}

// ============================================================================
// Transfer Queries
// ============================================================================

pub fn query_outbound_transfer(
    deps: Deps,
    nonce: u64,
) -> StdResult<Option<OutboundTransferResponse>> {
    let record = OUTBOUND_TRANSFERS.may_load(deps.storage, nonce)?;
    Ok(record.map(|r| OutboundTransferResponse {
        nonce: r.nonce,
        depositor: r.depositor,
        recipient: r.recipient,
        amount: r.amount,
        execution_fee: r.execution_fee,
        submitted_at: r.submitted_at,
    }))
}

fn source_tx_bytes(source_tx: &str) -> StdResult<Vec<u8>> {
    parse_source_tx(source_tx).map_err(|e| StdError::generic_err(e.to_string()))
}

pub fn query_is_finalized(deps: Deps, source_tx: String) -> StdResult<IsFinalizedResponse> {
    let bytes = source_tx_bytes(&source_tx)?;
    Ok(IsFinalizedResponse {
        finalized: replay::is_finalized(deps.storage, &bytes),
    })
}

pub fn query_finalization(
    deps: Deps,
    source_tx: String,
) -> StdResult<Option<FinalizationResponse>> {
    let bytes = source_tx_bytes(&source_tx)?;
    let record = replay::load(deps.storage, &bytes)?;
    Ok(record.map(|r| FinalizationResponse {
        source_tx: to_hex(&bytes),
        recipient: r.recipient,
        amount: r.amount,
        oracle: r.oracle,
        finalized_at: r.finalized_at,
    }))
}

// ============================================================================
// Custody Queries
// ============================================================================

pub fn query_custody(deps: Deps, amount: Uint128) -> StdResult<Option<CustodyResponse>> {
    let record = CUSTODY.may_load(deps.storage, &amount.to_string())?;
    Ok(record.map(|r| CustodyResponse {
        amount,
        depositor: r.depositor,
        nonce: r.nonce,
        locked_at: r.locked_at,
    }))
}

pub fn query_custody_balance(deps: Deps, env: Env) -> StdResult<CustodyBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = custody::balance_of(&deps.querier, &config.asset_ledger, &env.contract.address)?;
    Ok(CustodyBalanceResponse { balance })
}

pub fn query_owner_of(deps: Deps, amount: Uint128) -> StdResult<OwnerOfResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = custody::owner_of(&deps.querier, &config.asset_ledger, &amount.to_string())?;
    Ok(OwnerOfResponse { amount, owner })
}

pub fn query_encode_finalize_payload(
    recipient: String,
    source_tx: String,
    amount: Uint128,
) -> StdResult<PayloadResponse> {
    let recipient = EvmAddress::parse(&recipient)?;
    let source_tx = parse_hex(&source_tx)?;
    Ok(PayloadResponse {
        payload: encode_finalize_payload(&recipient, &source_tx, amount),
    })
}
