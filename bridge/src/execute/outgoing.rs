//! Outbound transfer handler.
//!
//! Locks a unit in bridge custody and asks the gateway to relay a
//! `finalizeInboundTransfer` call to the destination bridge. The ledger pull
//! and the gateway `Send` are dispatched as sub-messages of the same
//! transaction: if the gateway rejects the send, the pull is rolled back with
//! it and the caller sees `RelaySendFailed`.

use cosmwasm_std::{
    coins, to_json_binary, DepsMut, Env, Event, MessageInfo, Response, SubMsg, Uint128, WasmMsg,
};

use common::{flags, GatewayExecuteMsg, RelayMessage};

use crate::address_codec::EvmAddress;
use crate::custody;
use crate::error::ContractError;
use crate::fee_manager;
use crate::msg::TransferReceipt;
use crate::payload::{encode_finalize_payload, to_hex};
use crate::state::{
    CustodyRecord, OutboundRecord, CONFIG, CUSTODY, FEE_CONFIG, OUTBOUND_NONCE,
    OUTBOUND_TRANSFERS, REPLY_PULL, REPLY_RELAY, STATS,
};

/// Flags sent with every relay message: revert the destination call on
/// external failure and expose the original sender through the proxy.
pub fn relay_flags() -> u32 {
    flags::set(
        flags::set(0, flags::REVERT_IF_EXTERNAL_FAIL),
        flags::PROXY_WITH_SENDER,
    )
}

pub fn execute_outbound_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let fee_config = FEE_CONFIG.load(deps.storage)?;

    let recipient = EvmAddress::parse(&recipient).map_err(|e| ContractError::InvalidAddress {
        reason: e.to_string(),
    })?;
    if recipient.is_zero() {
        return Err(ContractError::InvalidAddress {
            reason: "recipient is the zero address".to_string(),
        });
    }

    let token_id = amount.to_string();
    let bridge = env.contract.address.clone();

    // Pre-flight both external calls so rejections surface with our error kinds
    custody::ensure_pullable(
        &deps.querier,
        &config.asset_ledger,
        &info.sender,
        &bridge,
        &token_id,
    )?;
    let quote = fee_manager::quote(&deps.querier, &config.gateway, &fee_config)?;
    let attached = fee_manager::check_attached(&info.funds, &quote)?;

    let message = RelayMessage {
        execution_fee: quote.execution_fee,
        flags: relay_flags(),
        fallback_address: config.destination_bridge.clone(),
        payload: encode_finalize_payload(&recipient, &[], amount),
    };

    let nonce = OUTBOUND_NONCE.load(deps.storage)?;
    OUTBOUND_NONCE.save(deps.storage, &(nonce + 1))?;

    OUTBOUND_TRANSFERS.save(
        deps.storage,
        nonce,
        &OutboundRecord {
            nonce,
            depositor: info.sender.clone(),
            recipient: recipient.to_hex(),
            amount,
            execution_fee: quote.execution_fee,
            submitted_at: env.block.time,
        },
    )?;
    CUSTODY.save(
        deps.storage,
        &token_id,
        &CustodyRecord {
            depositor: info.sender.clone(),
            nonce,
            locked_at: env.block.time,
        },
    )?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_outbound += 1;
    stats.total_fees_forwarded += attached;
    STATS.save(deps.storage, &stats)?;

    let pull = custody::transfer_submsg(
        deps.storage,
        &config.asset_ledger,
        &bridge,
        &token_id,
        REPLY_PULL,
    )?;
    let send = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: config.gateway.to_string(),
            msg: to_json_binary(&GatewayExecuteMsg::Send(message.clone()))?,
            funds: if attached.is_zero() {
                vec![]
            } else {
                coins(attached.u128(), quote.denom.clone())
            },
        },
        REPLY_RELAY,
    );

    let receipt = TransferReceipt {
        nonce,
        execution_fee: message.execution_fee,
        flags: message.flags,
        fallback_address: message.fallback_address.clone(),
        payload: message.payload.clone(),
    };

    let event = Event::new("outbound_transfer")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("depositor", info.sender.as_str())
        .add_attribute("recipient", recipient.to_hex())
        .add_attribute("amount", amount)
        .add_attribute("execution_fee", message.execution_fee)
        .add_attribute("flags", message.flags.to_string())
        .add_attribute("fallback_address", message.fallback_address)
        .add_attribute("payload", to_hex(message.payload.as_slice()));

    Ok(Response::new()
        .add_submessage(pull)
        .add_submessage(send)
        .add_event(event)
        .set_data(to_json_binary(&receipt)?)
        .add_attribute("action", "outbound_transfer")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("amount", amount)
        .add_attribute("fee_forwarded", attached))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_flags() {
        assert_eq!(relay_flags(), 0b0110);
        assert_eq!(relay_flags(), 6);
    }
}
