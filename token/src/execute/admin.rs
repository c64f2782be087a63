//! Administrative operations handlers
//!
//! This module handles:
//! - Bridge supply cap updates
//! - Role grants and revocations
//! - Ownership transfer (propose/accept/cancel with timelock)

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{
    PendingOwner, BRIDGES, OWNER, OWNER_TIMELOCK_DURATION, PENDING_OWNER, ROLES,
};

// ============================================================================
// Bridge Caps
// ============================================================================

/// Overwrite a bridge's supply cap.
///
/// Issuance is never force-adjusted: a cap below current issuance simply
/// blocks further minting until redemptions bring issuance back under it.
pub fn execute_update_bridge_cap(
    deps: DepsMut,
    info: MessageInfo,
    bridge: String,
    cap: Uint128,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }

    let bridge_addr = deps.api.addr_validate(&bridge)?;
    let mut supply = BRIDGES
        .may_load(deps.storage, &bridge_addr)?
        .unwrap_or_default();
    supply.cap = cap;
    BRIDGES.save(deps.storage, &bridge_addr, &supply)?;

    Ok(Response::new()
        .add_attribute("action", "update_bridge_cap")
        .add_attribute("bridge", bridge_addr)
        .add_attribute("cap", cap)
        .add_attribute("issued", supply.issued))
}

// ============================================================================
// Roles
// ============================================================================

/// Grant a role to an account.
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
    account: String,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }

    let account_addr = deps.api.addr_validate(&account)?;
    ROLES.save(deps.storage, (role.as_str(), &account_addr), &true)?;

    Ok(Response::new()
        .add_attribute("action", "grant_role")
        .add_attribute("role", role)
        .add_attribute("account", account_addr))
}

/// Revoke a role from an account.
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
    account: String,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }

    let account_addr = deps.api.addr_validate(&account)?;
    ROLES.remove(deps.storage, (role.as_str(), &account_addr));

    Ok(Response::new()
        .add_attribute("action", "revoke_role")
        .add_attribute("role", role)
        .add_attribute("account", account_addr))
}

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Propose a new owner (starts timelock).
pub fn execute_propose_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }

    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    let pending = PendingOwner {
        new_address: new_owner_addr.clone(),
        execute_after: env.block.time.plus_seconds(OWNER_TIMELOCK_DURATION),
    };
    PENDING_OWNER.save(deps.storage, &pending)?;

    Ok(Response::new()
        .add_attribute("action", "propose_owner")
        .add_attribute("new_owner", new_owner_addr)
        .add_attribute("execute_after", pending.execute_after.seconds().to_string()))
}

/// Accept pending owner role (after timelock).
pub fn execute_accept_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending.new_address {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    if env.block.time < pending.execute_after {
        let remaining = pending.execute_after.seconds() - env.block.time.seconds();
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: remaining,
        });
    }

    OWNER.save(deps.storage, &pending.new_address)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_owner")
        .add_attribute("new_owner", pending.new_address))
}

/// Cancel pending ownership proposal.
pub fn execute_cancel_owner_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }

    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "cancel_owner_proposal"))
}
