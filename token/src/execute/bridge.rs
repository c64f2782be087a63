//! Generic bridge pathway handlers
//!
//! Any caller may mint, but every identity is bounded by its supply record:
//! `issued + amount <= cap` or the mint fails. Never-configured identities
//! hold a zero cap, so authorization is implicit in capacity - the owner
//! authorizes a bridge purely by granting it a non-zero cap.
//!
//! Issuance accounting is settled BEFORE the base ledger moves, so no
//! external code triggered by a balance change can observe stale issuance.

use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::state::BRIDGES;

use super::mint_base;

/// Mint against the caller's bridge capacity.
///
/// A zero amount is permitted; it leaves the supply record untouched but
/// still emits the transfer attributes.
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let mut supply = BRIDGES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();

    // Overflow on issued + amount can only breach the cap, so it reports as
    // a capacity failure rather than wrapping or panicking.
    let issued = match supply.issued.checked_add(amount) {
        Ok(total) if total <= supply.cap => total,
        _ => {
            return Err(ContractError::SupplyCapExceeded {
                bridge: info.sender.to_string(),
                cap: supply.cap,
                issued: supply.issued,
                requested: amount,
            })
        }
    };
    supply.issued = issued;
    BRIDGES.save(deps.storage, &info.sender, &supply)?;

    mint_base(deps.storage, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("bridge", info.sender)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

/// Burn the caller's own balance, settling the caller's issuance first.
pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    settle_redemption(deps.storage, &info.sender, amount)?;
    Ok(cw20_base::contract::execute_burn(deps, env, info, amount)?)
}

/// Burn from a delegating account. The allowance deduction and balance debit
/// are the base ledger's; its failures propagate unchanged.
pub fn execute_burn_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    settle_redemption(deps.storage, &info.sender, amount)?;
    Ok(cw20_base::allowances::execute_burn_from(
        deps, env, info, owner, amount,
    )?)
}

/// Settle a redemption against the caller's supply record.
///
/// Only active records (non-zero cap or outstanding issuance) take part:
/// plain holders burn through the base ledger alone. A bridge whose cap was
/// zeroed while issuance is outstanding still settles here, which is what
/// lets redemptions bring it back under a reduced cap.
fn settle_redemption(
    storage: &mut dyn Storage,
    bridge: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let Some(mut supply) = BRIDGES.may_load(storage, bridge)? else {
        return Ok(());
    };
    if !supply.is_active() {
        return Ok(());
    }

    supply.issued =
        supply
            .issued
            .checked_sub(amount)
            .map_err(|_| ContractError::BurnExceedsIssued {
                bridge: bridge.to_string(),
                issued: supply.issued,
                requested: amount,
            })?;
    BRIDGES.save(storage, bridge, &supply)?;
    Ok(())
}
