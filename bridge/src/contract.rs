//! NFT Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult, SubMsgResult, Uint128,
};
use cw2::set_contract_version;

use common::DEFAULT_ADMIN_ROLE;

use crate::error::ContractError;
use crate::execute::{
    execute_finalize_inbound_transfer, execute_grant_role, execute_outbound_transfer,
    execute_renounce_role, execute_revoke_role, execute_set_execution_fee,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_custody, query_custody_balance, query_default_admin_role,
    query_encode_finalize_payload, query_finalization, query_has_role, query_is_finalized,
    query_oracle_role, query_outbound_transfer, query_owner_of, query_relay_fee,
    query_role_members, query_stats,
};
use crate::roles;
use crate::state::{
    FeeConfig, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FEE_CONFIG, OUTBOUND_NONCE,
    PENDING_UNIT, REPLY_PULL, REPLY_RELAY, REPLY_RELEASE, STATS,
};
use crate::validate::validate_config;

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = validate_config(deps.api, &msg)?;
    CONFIG.save(deps.storage, &config)?;

    let fee_config = FeeConfig::new(msg.execution_fee, msg.fee_denom);
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    STATS.save(
        deps.storage,
        &Stats {
            total_outbound: 0,
            total_finalized: 0,
            total_fees_forwarded: Uint128::zero(),
        },
    )?;
    OUTBOUND_NONCE.save(deps.storage, &0u64)?;

    // Deployer administers the role registry
    roles::grant(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", info.sender)
        .add_attribute("asset_ledger", config.asset_ledger)
        .add_attribute("gateway", config.gateway)
        .add_attribute("destination_token", config.destination_token)
        .add_attribute("destination_bridge", config.destination_bridge)
        .add_attribute("execution_fee", fee_config.execution_fee)
        .add_attribute("fee_denom", fee_config.fee_denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::OutboundTransfer { recipient, amount } => {
            execute_outbound_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::FinalizeInboundTransfer {
            recipient,
            source_tx,
            amount,
        } => execute_finalize_inbound_transfer(deps, env, info, recipient, source_tx, amount),

        // Roles
        ExecuteMsg::GrantRole { role, address } => execute_grant_role(deps, info, role, address),
        ExecuteMsg::RevokeRole { role, address } => {
            execute_revoke_role(deps, info, role, address)
        }
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, info, role),

        // Fee policy
        ExecuteMsg::SetExecutionFee { execution_fee } => {
            execute_set_execution_fee(deps, info, execution_fee)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::RelayFee {} => to_json_binary(&query_relay_fee(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),

        QueryMsg::OracleRole {} => to_json_binary(&query_oracle_role()),
        QueryMsg::DefaultAdminRole {} => to_json_binary(&query_default_admin_role()),
        QueryMsg::HasRole { role, address } => {
            to_json_binary(&query_has_role(deps, role, address)?)
        }
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),

        QueryMsg::OutboundTransfer { nonce } => {
            to_json_binary(&query_outbound_transfer(deps, nonce)?)
        }
        QueryMsg::IsFinalized { source_tx } => {
            to_json_binary(&query_is_finalized(deps, source_tx)?)
        }
        QueryMsg::Finalization { source_tx } => {
            to_json_binary(&query_finalization(deps, source_tx)?)
        }

        QueryMsg::Custody { amount } => to_json_binary(&query_custody(deps, amount)?),
        QueryMsg::CustodyBalance {} => to_json_binary(&query_custody_balance(deps, env)?),
        QueryMsg::OwnerOf { amount } => to_json_binary(&query_owner_of(deps, amount)?),
        QueryMsg::EncodeFinalizePayload {
            recipient,
            source_tx,
            amount,
        } => to_json_binary(&query_encode_finalize_payload(recipient, source_tx, amount)?),
    }
}

// ============================================================================
// Reply
// ============================================================================

/// Sub-messages are dispatched with `reply_on_error`, so every reply here is a
/// failure. Returning `Err` rolls back the whole transaction.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let reason = match msg.result {
        SubMsgResult::Err(reason) => reason,
        SubMsgResult::Ok(_) => return Ok(Response::new()),
    };

    match msg.id {
        REPLY_PULL | REPLY_RELEASE => {
            let unit = PENDING_UNIT.may_load(deps.storage)?.unwrap_or_default();
            Err(ContractError::custody(unit, reason))
        }
        REPLY_RELAY => Err(ContractError::relay(reason)),
        id => Err(StdError::generic_err(format!("unknown reply id {}", id)).into()),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
