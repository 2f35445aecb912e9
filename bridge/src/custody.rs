//! Asset custody ledger
//!
//! The custodied asset is a CW721 contract the bridge does not own. This
//! module reads its observable state (owner, approvals, holdings) and builds
//! the transfer messages the bridge dispatches. Pre-flight checks turn a
//! transfer the ledger would reject into `CustodyTransferFailed` up front;
//! rejections they cannot foresee come back through the contract's `reply`.

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Storage, SubMsg, WasmMsg,
};
use cw721::{
    Cw721ExecuteMsg, Cw721QueryMsg, OperatorResponse, OwnerOfResponse, TokensResponse,
};

use crate::error::ContractError;
use crate::state::PENDING_UNIT;

/// Page size used when counting holdings
const TOKENS_PAGE: u32 = 100;

pub fn owner_of(querier: &QuerierWrapper, ledger: &Addr, token_id: &str) -> StdResult<String> {
    let res: OwnerOfResponse = querier.query_wasm_smart(
        ledger,
        &Cw721QueryMsg::OwnerOf {
            token_id: token_id.to_string(),
            include_expired: None,
        },
    )?;
    Ok(res.owner)
}

/// Number of units `owner` holds on the ledger.
///
/// Walks the ledger's full `Tokens` listing, so cost grows with holdings.
/// Meant for audits; handlers use the `CUSTODY` records instead.
pub fn balance_of(querier: &QuerierWrapper, ledger: &Addr, owner: &Addr) -> StdResult<u64> {
    let mut count = 0u64;
    let mut start_after: Option<String> = None;
    loop {
        let page: TokensResponse = querier.query_wasm_smart(
            ledger,
            &Cw721QueryMsg::Tokens {
                owner: owner.to_string(),
                start_after: start_after.clone(),
                limit: Some(TOKENS_PAGE),
            },
        )?;
        count += page.tokens.len() as u64;
        if page.tokens.len() < TOKENS_PAGE as usize {
            return Ok(count);
        }
        start_after = page.tokens.last().cloned();
    }
}

/// Whether `spender` may move `token_id` on behalf of `owner`, either through
/// a per-unit approval or an operator grant.
fn can_move(
    querier: &QuerierWrapper,
    ledger: &Addr,
    owner: &OwnerOfResponse,
    owner_addr: &Addr,
    spender: &Addr,
) -> bool {
    if owner
        .approvals
        .iter()
        .any(|a| a.spender == spender.as_str())
    {
        return true;
    }

    // The ledger answers a missing grant with a not-found error
    querier
        .query_wasm_smart::<OperatorResponse>(
            ledger,
            &Cw721QueryMsg::Operator {
                owner: owner_addr.to_string(),
                operator: spender.to_string(),
                include_expired: None,
            },
        )
        .is_ok()
}

/// Check that `bridge` can pull `token_id` out of `depositor`'s wallet.
pub fn ensure_pullable(
    querier: &QuerierWrapper,
    ledger: &Addr,
    depositor: &Addr,
    bridge: &Addr,
    token_id: &str,
) -> Result<(), ContractError> {
    let owner: OwnerOfResponse = querier
        .query_wasm_smart(
            ledger,
            &Cw721QueryMsg::OwnerOf {
                token_id: token_id.to_string(),
                include_expired: None,
            },
        )
        .map_err(|e| ContractError::custody(token_id, e.to_string()))?;

    if owner.owner != depositor.as_str() {
        return Err(ContractError::custody(
            token_id,
            format!("{} is not the owner", depositor),
        ));
    }

    if !can_move(querier, ledger, &owner, depositor, bridge) {
        return Err(ContractError::custody(
            token_id,
            "bridge is not approved to transfer",
        ));
    }
    Ok(())
}

/// Check that `bridge` currently holds `token_id`.
pub fn ensure_held(
    querier: &QuerierWrapper,
    ledger: &Addr,
    bridge: &Addr,
    token_id: &str,
) -> Result<(), ContractError> {
    let owner = owner_of(querier, ledger, token_id)
        .map_err(|e| ContractError::custody(token_id, e.to_string()))?;
    if owner != bridge.as_str() {
        return Err(ContractError::custody(
            token_id,
            "unit is not held by the bridge",
        ));
    }
    Ok(())
}

/// Ledger transfer executed by the bridge, either as approved spender
/// (pull into custody) or as owner (release).
pub fn transfer_msg(ledger: &Addr, recipient: &Addr, token_id: &str) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: ledger.to_string(),
        msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
            recipient: recipient.to_string(),
            token_id: token_id.to_string(),
        })?,
        funds: vec![],
    }))
}

/// [`transfer_msg`] dispatched so a ledger failure is reported under
/// `reply_id` and remembered as the pending unit.
pub fn transfer_submsg(
    storage: &mut dyn Storage,
    ledger: &Addr,
    recipient: &Addr,
    token_id: &str,
    reply_id: u64,
) -> StdResult<SubMsg> {
    PENDING_UNIT.save(storage, &token_id.to_string())?;
    Ok(SubMsg::reply_on_error(
        transfer_msg(ledger, recipient, token_id)?,
        reply_id,
    ))
}
