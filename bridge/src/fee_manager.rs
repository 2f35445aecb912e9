//! Relay fee policy
//!
//! Every outbound transfer pays two native fees, both forwarded to the
//! gateway with the `Send`:
//!
//! | Fee               | Source                          |
//! |-------------------|---------------------------------|
//! | Execution fee     | Bridge policy (`FeeConfig`)     |
//! | Gateway base fee  | Gateway `GlobalFixedNativeFee`  |
//!
//! The execution fee is flat and independent of the unit being bridged.
//! Admins may change it with `SetExecutionFee`.

use cosmwasm_std::{Addr, Coin, QuerierWrapper, StdResult, Uint128};

use common::{GatewayQueryMsg, GlobalFeeResponse};

use crate::error::ContractError;
use crate::state::{FeeConfig, DEFAULT_EXECUTION_FEE, DEFAULT_FEE_DENOM};

/// Fees an outbound transfer must attach.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeQuote {
    pub execution_fee: Uint128,
    pub gateway_base_fee: Uint128,
    pub total: Uint128,
    pub denom: String,
}

impl FeeConfig {
    pub fn new(execution_fee: Option<Uint128>, fee_denom: Option<String>) -> Self {
        Self {
            execution_fee: execution_fee.unwrap_or(Uint128::new(DEFAULT_EXECUTION_FEE)),
            fee_denom: fee_denom.unwrap_or_else(|| DEFAULT_FEE_DENOM.to_string()),
        }
    }
}

fn query_gateway_fee(querier: &QuerierWrapper, gateway: &Addr) -> StdResult<GlobalFeeResponse> {
    querier.query_wasm_smart(gateway, &GatewayQueryMsg::GlobalFixedNativeFee {})
}

/// Combine the bridge's policy with the gateway's current base fee.
pub fn quote(
    querier: &QuerierWrapper,
    gateway: &Addr,
    fee_config: &FeeConfig,
) -> Result<FeeQuote, ContractError> {
    let gateway_fee = query_gateway_fee(querier, gateway)
        .map_err(|e| ContractError::relay(format!("gateway fee query failed: {}", e)))?;

    if gateway_fee.denom != fee_config.fee_denom {
        return Err(ContractError::relay(format!(
            "gateway charges {} but bridge fees are in {}",
            gateway_fee.denom, fee_config.fee_denom
        )));
    }

    let total = fee_config
        .execution_fee
        .checked_add(gateway_fee.fee)
        .map_err(|e| ContractError::relay(e.to_string()))?;

    Ok(FeeQuote {
        execution_fee: fee_config.execution_fee,
        gateway_base_fee: gateway_fee.fee,
        total,
        denom: fee_config.fee_denom.clone(),
    })
}

/// Validate attached funds against a quote and return the amount to forward.
///
/// Only the fee denom may be attached; any surplus above the quote is
/// forwarded as well.
pub fn check_attached(funds: &[Coin], quote: &FeeQuote) -> Result<Uint128, ContractError> {
    if let Some(foreign) = funds.iter().find(|c| c.denom != quote.denom) {
        return Err(ContractError::relay(format!(
            "unexpected denom {}, fees are paid in {}",
            foreign.denom, quote.denom
        )));
    }

    let attached = funds.iter().map(|c| c.amount).sum::<Uint128>();
    if attached < quote.total {
        return Err(ContractError::relay(format!(
            "insufficient fee: expected {} {}, got {}",
            quote.total, quote.denom, attached
        )));
    }
    Ok(attached)
}
