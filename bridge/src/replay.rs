//! Replay guard
//!
//! Destination-chain transaction references are applied at most once.
//! The record is written inside the finalize handler, before the release
//! message is dispatched, so a re-entrant finalize for the same reference
//! observes it.

use cosmwasm_std::{StdResult, Storage};

use crate::state::{FinalizationRecord, FINALIZED};

/// Test-and-set in one step. Returns `true` if `source_tx` had not been seen
/// and is now recorded, `false` if it was already finalized (nothing written).
pub fn mark_and_check(
    storage: &mut dyn Storage,
    source_tx: &[u8],
    record: &FinalizationRecord,
) -> StdResult<bool> {
    if FINALIZED.has(storage, source_tx) {
        return Ok(false);
    }
    FINALIZED.save(storage, source_tx, record)?;
    Ok(true)
}

pub fn is_finalized(storage: &dyn Storage, source_tx: &[u8]) -> bool {
    FINALIZED.has(storage, source_tx)
}

pub fn load(storage: &dyn Storage, source_tx: &[u8]) -> StdResult<Option<FinalizationRecord>> {
    FINALIZED.may_load(storage, source_tx)
}
