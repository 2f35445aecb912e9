use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use common::RelayMessage;

pub use common::GatewayQueryMsg as QueryMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin who can change the fixed fee
    pub admin: String,
    /// Native denom fees are paid in
    pub fee_denom: String,
    /// Flat fee charged per submission
    pub global_fixed_native_fee: Uint128,
}

/// Superset of `common::GatewayExecuteMsg`; the `Send` variant is wire-compatible.
#[cw_serde]
pub enum ExecuteMsg {
    /// Submit a message for relay
    Send(RelayMessage),
    /// Admin: change the flat per-submission fee
    SetGlobalFixedNativeFee { fee: Uint128 },
    /// Admin: stop or resume accepting submissions
    SetPaused { paused: bool },
}
