//! Relay payload encoding
//!
//! The gateway delivers `payload` verbatim to the destination bridge, which
//! executes it as a contract call. It must therefore be the exact Solidity
//! calldata of
//!
//! ```solidity
//! function finalizeInboundTransfer(address recipient, bytes sourceTx, uint256 amount);
//! ```
//!
//! # Byte Layout
//! - Bytes 0-3:     selector, `keccak256(signature)[0..4]`
//! - Bytes 4-35:    recipient (address, left-padded)
//! - Bytes 36-67:   offset of `sourceTx` data, always 0x60
//! - Bytes 68-99:   amount (uint256, big-endian, left-padded)
//! - Bytes 100-131: length of `sourceTx`
//! - Bytes 132-:    `sourceTx` bytes, right-padded to a 32-byte boundary
//!
//! Outbound transfers leave `sourceTx` empty; the destination side fills in
//! its own reference when it later calls back.

use cosmwasm_std::{Binary, StdError, StdResult, Uint128};
use tiny_keccak::{Hasher, Keccak};

use crate::address_codec::EvmAddress;

/// Canonical signature of the destination-side finalize call
pub const FINALIZE_SIGNATURE: &str = "finalizeInboundTransfer(address,bytes,uint256)";

const WORD: usize = 32;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// First four bytes of the keccak256 of a function signature.
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Encode the finalize call carried by an outbound relay message.
pub fn encode_finalize_payload(recipient: &EvmAddress, source_tx: &[u8], amount: Uint128) -> Binary {
    let padded_len = ((source_tx.len() + WORD - 1) / WORD) * WORD;
    let mut data = Vec::with_capacity(4 + 4 * WORD + padded_len);

    data.extend_from_slice(&function_selector(FINALIZE_SIGNATURE));

    // Head: recipient, offset to bytes, amount
    data.extend_from_slice(&recipient.to_word());
    data.extend_from_slice(&uint_word(3 * WORD as u128));
    data.extend_from_slice(&uint_word(amount.u128()));

    // Tail: bytes length + data
    data.extend_from_slice(&uint_word(source_tx.len() as u128));
    data.extend_from_slice(source_tx);
    data.resize(data.len() + (padded_len - source_tx.len()), 0);

    Binary::from(data)
}

/// uint256 word, big-endian, left-padded
fn uint_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Render bytes as `0x`-prefixed lower-case hex (for attributes/logging)
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse `0x`-prefixed (or bare) hex into bytes
pub fn parse_hex(input: &str) -> StdResult<Vec<u8>> {
    let hex_str = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder() -> EvmAddress {
        EvmAddress::parse("0x90F79bf6EB2c4f870365E785982E1f101E93b906").unwrap()
    }

    #[test]
    fn test_keccak256_empty() {
        // keccak256("") is a well-known constant
        assert_eq!(
            to_hex(&keccak256(b"")),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_known_selector() {
        // ERC20 transfer(address,uint256)
        assert_eq!(function_selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_payload_with_empty_source_tx() {
        let payload = encode_finalize_payload(&holder(), &[], Uint128::new(100));
        let bytes = payload.as_slice();

        assert_eq!(bytes.len(), 4 + 4 * 32);
        assert_eq!(&bytes[..4], &function_selector(FINALIZE_SIGNATURE));
        assert_eq!(&bytes[4..36], &holder().to_word());
        // offset 0x60
        assert_eq!(bytes[67], 0x60);
        assert_eq!(&bytes[36..67], &[0u8; 31]);
        // amount 100
        assert_eq!(bytes[99], 100);
        assert_eq!(&bytes[68..99], &[0u8; 31]);
        // empty bytes: length word is zero and no data follows
        assert_eq!(&bytes[100..132], &[0u8; 32]);
    }

    #[test]
    fn test_payload_pads_source_tx() {
        let source_tx = parse_hex(
            "0x117ddadadc7b8d342cf48513fef06a2cba15dfb9c488dc51aefc998abcefb52b",
        )
        .unwrap();
        let payload = encode_finalize_payload(&holder(), &source_tx[..5], Uint128::new(7));
        let bytes = payload.as_slice();

        assert_eq!(bytes.len(), 4 + 5 * 32);
        assert_eq!(bytes[131], 5);
        assert_eq!(&bytes[132..137], &source_tx[..5]);
        assert_eq!(&bytes[137..], &[0u8; 27]);
    }

    #[test]
    fn test_hex_helpers() {
        assert_eq!(parse_hex("0xdead").unwrap(), vec![0xde, 0xad]);
        assert_eq!(parse_hex("beef").unwrap(), vec![0xbe, 0xef]);
        assert!(parse_hex("0xzz").is_err());
        assert_eq!(to_hex(&[0x01, 0xab]), "0x01ab");
    }
}
