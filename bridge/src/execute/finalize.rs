//! Inbound finalization handler.
//!
//! An oracle reports a destination-chain transaction; the bridge releases the
//! referenced unit to the recipient exactly once per transaction reference.
//! The replay record is committed by this handler before the ledger transfer
//! message runs, so a re-entrant finalize sees it and is rejected.

use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint128};

use common::ORACLE_ROLE;

use crate::custody;
use crate::error::ContractError;
use crate::payload::{parse_hex, to_hex};
use crate::replay;
use crate::roles::ensure_role;
use crate::state::{FinalizationRecord, CONFIG, CUSTODY, REPLY_RELEASE, STATS};

/// Parse a non-empty hex transaction reference.
pub fn parse_source_tx(source_tx: &str) -> Result<Vec<u8>, ContractError> {
    let bytes = parse_hex(source_tx).map_err(|e| ContractError::InvalidSourceTx {
        reason: e.to_string(),
    })?;
    if bytes.is_empty() {
        return Err(ContractError::InvalidSourceTx {
            reason: "reference is empty".to_string(),
        });
    }
    Ok(bytes)
}

pub fn execute_finalize_inbound_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    source_tx: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, ORACLE_ROLE, &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let source_tx_bytes = parse_source_tx(&source_tx)?;
    let source_tx_hex = to_hex(&source_tx_bytes);
    let config = CONFIG.load(deps.storage)?;
    let token_id = amount.to_string();

    let record = FinalizationRecord {
        recipient: recipient.clone(),
        amount,
        oracle: info.sender.clone(),
        finalized_at: env.block.time,
    };
    if !replay::mark_and_check(deps.storage, &source_tx_bytes, &record)? {
        return Err(ContractError::AlreadyFinalized {
            source_tx: source_tx_hex,
        });
    }

    // Any error from here on discards the replay record with the rest of the tx
    custody::ensure_held(
        &deps.querier,
        &config.asset_ledger,
        &env.contract.address,
        &token_id,
    )?;
    CUSTODY.remove(deps.storage, &token_id);

    let mut stats = STATS.load(deps.storage)?;
    stats.total_finalized += 1;
    STATS.save(deps.storage, &stats)?;

    let release = custody::transfer_submsg(
        deps.storage,
        &config.asset_ledger,
        &recipient,
        &token_id,
        REPLY_RELEASE,
    )?;

    let event = Event::new("inbound_finalized")
        .add_attribute("source_tx", source_tx_hex.clone())
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("amount", amount)
        .add_attribute("oracle", info.sender.as_str());

    Ok(Response::new()
        .add_submessage(release)
        .add_event(event)
        .add_attribute("action", "finalize_inbound_transfer")
        .add_attribute("source_tx", source_tx_hex)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_tx() {
        let bytes = parse_source_tx(
            "0x117ddadadc7b8d342cf48513fef06a2cba15dfb9c488dc51aefc998abcefb52b",
        )
        .unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[0], 0x11);

        assert!(matches!(
            parse_source_tx(""),
            Err(ContractError::InvalidSourceTx { .. })
        ));
        assert!(matches!(
            parse_source_tx("0x"),
            Err(ContractError::InvalidSourceTx { .. })
        ));
        assert!(matches!(
            parse_source_tx("0xnothex"),
            Err(ContractError::InvalidSourceTx { .. })
        ));
    }
}
