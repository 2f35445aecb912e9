//! Error types for the NFT bridge contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    /// Construction-time only; the whole deployment fails.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: {account} is missing role {role}")]
    Unauthorized { account: String, role: String },

    #[error("Unknown role: {role}")]
    UnknownRole { role: String },

    #[error("Cannot remove the last holder of {role}")]
    CannotRemoveLastAdmin { role: String },

    // ========================================================================
    // Custody Errors
    // ========================================================================

    #[error("Custody transfer failed for unit {amount}: {reason}")]
    CustodyTransferFailed { amount: String, reason: String },

    // ========================================================================
    // Relay Errors
    // ========================================================================

    #[error("Relay send failed: {reason}")]
    RelaySendFailed { reason: String },

    // ========================================================================
    // Replay Errors
    // ========================================================================

    #[error("Source transaction already finalized: {source_tx}")]
    AlreadyFinalized { source_tx: String },

    #[error("Invalid source transaction reference: {reason}")]
    InvalidSourceTx { reason: String },
}

impl ContractError {
    pub(crate) fn custody(amount: impl ToString, reason: impl Into<String>) -> Self {
        ContractError::CustodyTransferFailed {
            amount: amount.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn relay(reason: impl Into<String>) -> Self {
        ContractError::RelaySendFailed {
            reason: reason.into(),
        }
    }
}
