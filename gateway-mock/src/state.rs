use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use common::RelayMessage;

pub const CONTRACT_NAME: &str = "crates.io:gateway-mock";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub fee_denom: String,
    /// Charged on top of the submission's execution fee
    pub global_fixed_native_fee: Uint128,
    /// Paused gateways quote fees but refuse submissions
    pub paused: bool,
}

#[cw_serde]
pub struct Submission {
    pub sender: Addr,
    pub message: RelayMessage,
    pub funds: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const NONCE: Item<u64> = Item::new("nonce");

/// nonce => accepted submission
pub const SUBMISSIONS: Map<u64, Submission> = Map::new("submissions");
