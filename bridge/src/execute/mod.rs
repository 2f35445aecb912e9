//! Execute handlers for the NFT bridge contract.
//!
//! - `outgoing` - OutboundTransfer (lock + relay)
//! - `finalize` - FinalizeInboundTransfer (replay guard + release)
//! - `admin` - role management and fee policy

mod admin;
mod finalize;
mod outgoing;

pub use admin::*;
pub use finalize::*;
pub use outgoing::*;
