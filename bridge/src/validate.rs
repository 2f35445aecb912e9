//! Construction validation
//!
//! None of the four bridge dependencies may be the zero address. Validation
//! runs before anything is written, so a rejected instantiation leaves no
//! state behind.

use cosmwasm_std::{Addr, Api};

use crate::address_codec::EvmAddress;
use crate::error::ContractError;
use crate::msg::InstantiateMsg;
use crate::state::Config;

pub const ZERO_TOKEN: &str = "ZERO_TOKEN";
pub const ZERO_GATEWAY: &str = "ZERO_GATEWAY";
pub const ZERO_BRIDGE: &str = "ZERO_BRIDGE";

fn zero(reason: &str) -> ContractError {
    ContractError::InvalidConfiguration {
        reason: reason.to_string(),
    }
}

/// A local contract address. Empty or all-zero canonical bytes count as zero.
fn local_addr(api: &dyn Api, input: &str, reason: &str) -> Result<Addr, ContractError> {
    if input.trim().is_empty() {
        return Err(zero(reason));
    }
    let addr = api.addr_validate(input)?;
    let canonical = api.addr_canonicalize(addr.as_str())?;
    if canonical.as_slice().iter().all(|b| *b == 0) {
        return Err(zero(reason));
    }
    Ok(addr)
}

/// A destination-chain address, normalized to lower-case hex.
fn remote_addr(input: &str, reason: &str) -> Result<String, ContractError> {
    if input.trim().is_empty() {
        return Err(zero(reason));
    }
    let addr = EvmAddress::parse(input).map_err(|e| ContractError::InvalidAddress {
        reason: e.to_string(),
    })?;
    if addr.is_zero() {
        return Err(zero(reason));
    }
    Ok(addr.to_hex())
}

/// Validate the four dependency addresses, in argument order.
pub fn validate_config(api: &dyn Api, msg: &InstantiateMsg) -> Result<Config, ContractError> {
    let asset_ledger = local_addr(api, &msg.asset_ledger, ZERO_TOKEN)?;
    let gateway = local_addr(api, &msg.gateway, ZERO_GATEWAY)?;
    let destination_token = remote_addr(&msg.destination_token, ZERO_TOKEN)?;
    let destination_bridge = remote_addr(&msg.destination_bridge, ZERO_BRIDGE)?;

    Ok(Config {
        asset_ledger,
        gateway,
        destination_token,
        destination_bridge,
    })
}
