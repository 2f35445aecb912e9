//! Role registry
//!
//! A permission table keyed by `(role, account)`. Privileged handlers call
//! [`ensure_role`] before touching any other state. Membership counts are
//! kept per role so the last `DEFAULT_ADMIN_ROLE` holder cannot be removed,
//! which would leave the registry ungovernable.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use common::roles::is_known_role;
use common::DEFAULT_ADMIN_ROLE;

use crate::error::ContractError;
use crate::state::{ROLE_COUNTS, ROLE_MEMBERS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn ensure_known(role: &str) -> Result<(), ContractError> {
    if !is_known_role(role) {
        return Err(ContractError::UnknownRole {
            role: role.to_string(),
        });
    }
    Ok(())
}

pub fn has_role(storage: &dyn Storage, role: &str, account: &Addr) -> StdResult<bool> {
    Ok(ROLE_MEMBERS
        .may_load(storage, (role, account))?
        .unwrap_or(false))
}

/// Fail with `Unauthorized` unless `account` holds `role`.
pub fn ensure_role(storage: &dyn Storage, role: &str, account: &Addr) -> Result<(), ContractError> {
    if !has_role(storage, role, account)? {
        return Err(ContractError::Unauthorized {
            account: account.to_string(),
            role: role.to_string(),
        });
    }
    Ok(())
}

/// Add `account` to `role`. Returns `false` if it was already a member.
pub fn grant(storage: &mut dyn Storage, role: &str, account: &Addr) -> StdResult<bool> {
    if has_role(storage, role, account)? {
        return Ok(false);
    }
    ROLE_MEMBERS.save(storage, (role, account), &true)?;
    let count = ROLE_COUNTS.may_load(storage, role)?.unwrap_or(0);
    ROLE_COUNTS.save(storage, role, &(count + 1))?;
    Ok(true)
}

/// Remove `account` from `role`. Returns `false` if it was not a member.
pub fn revoke(storage: &mut dyn Storage, role: &str, account: &Addr) -> Result<bool, ContractError> {
    if !has_role(storage, role, account)? {
        return Ok(false);
    }
    let count = ROLE_COUNTS.may_load(storage, role)?.unwrap_or(0);
    if role == DEFAULT_ADMIN_ROLE && count <= 1 {
        return Err(ContractError::CannotRemoveLastAdmin {
            role: role.to_string(),
        });
    }
    ROLE_MEMBERS.remove(storage, (role, account));
    ROLE_COUNTS.save(storage, role, &count.saturating_sub(1))?;
    Ok(true)
}

/// Members of `role` in address order, paginated.
pub fn members(
    storage: &dyn Storage,
    role: &str,
    start_after: Option<Addr>,
    limit: Option<u32>,
) -> StdResult<Vec<Addr>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_ref().map(Bound::exclusive);

    ROLE_MEMBERS
        .prefix(role)
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(addr, _)| addr))
        .collect()
}
