//! Messaging gateway interface.
//!
//! The gateway accepts a fee-bearing `Send` carrying a [`RelayMessage`] and
//! later delivers its payload to the destination bridge. The bridge only
//! depends on the shape of these messages; any contract honouring them can
//! act as the gateway.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

/// Auto-execution parameters handed to the gateway for one outbound transfer.
///
/// Field order is part of the external contract: relayers and indexers read
/// the gateway's `Log` event as the tuple
/// `(execution_fee, flags, fallback_address, payload)`.
#[cw_serde]
pub struct RelayMessage {
    /// Fee paid to the executor on the destination chain
    pub execution_fee: Uint128,
    /// Bitset of `flags::*` positions
    pub flags: u32,
    /// Lower-cased `0x`-hex address receiving funds if the destination call fails
    pub fallback_address: String,
    /// ABI-encoded call executed on the destination chain
    pub payload: Binary,
}

#[cw_serde]
pub enum GatewayExecuteMsg {
    /// Submit a message for relay. Native funds attached must cover
    /// the gateway's fixed fee plus `execution_fee`.
    Send(RelayMessage),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum GatewayQueryMsg {
    /// Flat native fee charged by the gateway per submission
    #[returns(GlobalFeeResponse)]
    GlobalFixedNativeFee {},

    /// A previously accepted submission
    #[returns(Option<SubmissionResponse>)]
    Submission { nonce: u64 },
}

#[cw_serde]
pub struct GlobalFeeResponse {
    pub fee: Uint128,
    pub denom: String,
}

#[cw_serde]
pub struct SubmissionResponse {
    pub nonce: u64,
    pub sender: String,
    pub message: RelayMessage,
    pub funds: Uint128,
}

/// Bit positions understood by the gateway in [`RelayMessage::flags`].
pub mod flags {
    /// Revert the destination transaction if the external call fails
    pub const REVERT_IF_EXTERNAL_FAIL: u32 = 1;
    /// Call the receiver through a proxy that exposes the original sender
    pub const PROXY_WITH_SENDER: u32 = 2;

    /// Set the bit at `position`.
    pub const fn set(flags: u32, position: u32) -> u32 {
        flags | (1 << position)
    }

    /// Whether the bit at `position` is set.
    pub const fn get(flags: u32, position: u32) -> bool {
        (flags >> position) & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::flags;

    #[test]
    fn test_flag_positions() {
        let value = flags::set(
            flags::set(0, flags::REVERT_IF_EXTERNAL_FAIL),
            flags::PROXY_WITH_SENDER,
        );
        assert_eq!(value, 0b0110);
        assert!(flags::get(value, flags::REVERT_IF_EXTERNAL_FAIL));
        assert!(flags::get(value, flags::PROXY_WITH_SENDER));
        assert!(!flags::get(value, 0));
    }
}
