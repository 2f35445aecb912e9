//! Destination-chain (EVM) address handling
//!
//! The destination token, destination bridge and every outbound recipient are
//! 20-byte EVM addresses supplied as `0x`-prefixed hex. They are parsed once,
//! checked against the zero address where required, and always rendered back
//! in lower case so emitted relay messages are byte-stable regardless of the
//! checksum casing the caller used.

use cosmwasm_std::{StdError, StdResult};

/// A 20-byte EVM address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvmAddress([u8; 20]);

impl EvmAddress {
    pub const ZERO: EvmAddress = EvmAddress([0u8; 20]);

    /// Parse a hex address, with or without `0x`, in any letter case.
    pub fn parse(addr: &str) -> StdResult<Self> {
        parse_evm_address(addr).map(Self)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Left-pad to a 32-byte ABI word.
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }

    /// Lower-case `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        encode_evm_address(&self.0)
    }
}

/// Parse a 0x-prefixed hex EVM address to 20 bytes
pub fn parse_evm_address(addr: &str) -> StdResult<[u8; 20]> {
    let hex_str = addr.strip_prefix("0x").unwrap_or(addr);

    if hex_str.len() != 40 {
        return Err(StdError::generic_err(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes =
        hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode 20 bytes to EVM hex string with 0x prefix
pub fn encode_evm_address(bytes: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(bytes))
}
