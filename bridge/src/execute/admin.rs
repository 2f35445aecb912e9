//! Admin operations handlers.
//!
//! - Role management (grant/revoke/renounce)
//! - Relay fee policy

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use common::DEFAULT_ADMIN_ROLE;

use crate::error::ContractError;
use crate::roles::{self, ensure_known, ensure_role};
use crate::state::FEE_CONFIG;

// ============================================================================
// Role Management
// ============================================================================

/// Grant `role` to `address`. Granting a held role succeeds without change.
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
    address: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;
    ensure_known(&role)?;

    let account = deps.api.addr_validate(&address)?;
    let changed = roles::grant(deps.storage, &role, &account)?;

    let mut res = Response::new()
        .add_attribute("action", "grant_role")
        .add_attribute("role", &role)
        .add_attribute("account", account.as_str())
        .add_attribute("changed", changed.to_string());
    if changed {
        res = res.add_event(
            Event::new("role_granted")
                .add_attribute("role", role)
                .add_attribute("account", account)
                .add_attribute("sender", info.sender),
        );
    }
    Ok(res)
}

/// Revoke `role` from `address`.
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
    address: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;
    ensure_known(&role)?;

    let account = deps.api.addr_validate(&address)?;
    let changed = roles::revoke(deps.storage, &role, &account)?;

    Ok(revoked_response("revoke_role", role, account.as_str(), info.sender.as_str(), changed))
}

/// Drop one of the caller's own roles.
pub fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
) -> Result<Response, ContractError> {
    ensure_known(&role)?;
    let changed = roles::revoke(deps.storage, &role, &info.sender)?;

    Ok(revoked_response(
        "renounce_role",
        role,
        info.sender.as_str(),
        info.sender.as_str(),
        changed,
    ))
}

fn revoked_response(
    action: &str,
    role: String,
    account: &str,
    sender: &str,
    changed: bool,
) -> Response {
    let res = Response::new()
        .add_attribute("action", action)
        .add_attribute("role", &role)
        .add_attribute("account", account)
        .add_attribute("changed", changed.to_string());
    if !changed {
        return res;
    }
    res.add_event(
        Event::new("role_revoked")
            .add_attribute("role", role)
            .add_attribute("account", account)
            .add_attribute("sender", sender),
    )
}

// ============================================================================
// Fee Policy
// ============================================================================

/// Set the flat execution fee charged per outbound transfer.
pub fn execute_set_execution_fee(
    deps: DepsMut,
    info: MessageInfo,
    execution_fee: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;

    let mut fee_config = FEE_CONFIG.load(deps.storage)?;
    fee_config.execution_fee = execution_fee;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    Ok(Response::new()
        .add_attribute("action", "set_execution_fee")
        .add_attribute("execution_fee", execution_fee))
}
