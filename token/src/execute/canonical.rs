//! Canonical bridge pathway handlers
//!
//! These routes are hard-wired to fixed identities: deposits require the
//! depositor role (held by the child-chain manager), gateway mint/burn
//! require the gateway identity exactly. Canonical transports are singular
//! and trusted, so they mutate the base ledger directly and never consume
//! the capacity ledger.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CANONICAL_BRIDGES, DEPOSITOR_ROLE, ROLES};

use super::{burn_base, mint_base};

/// Mint deposited value to `recipient`.
///
/// The amount arrives in the child-chain manager's origin encoding:
/// a 32-byte big-endian unsigned integer.
pub fn execute_deposit(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    deposit_data: Binary,
) -> Result<Response, ContractError> {
    let granted = ROLES
        .may_load(deps.storage, (DEPOSITOR_ROLE, &info.sender))?
        .unwrap_or(false);
    if !granted {
        return Err(ContractError::MissingRole {
            account: info.sender.to_string(),
            role: DEPOSITOR_ROLE.to_string(),
        });
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let amount = decode_deposit_amount(&deposit_data)?;

    mint_base(deps.storage, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("depositor", info.sender)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

/// Burn the caller's own balance to exit back to the origin network.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    burn_base(deps.storage, &info.sender, amount)?;

    Ok(Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount))
}

/// Mint bridged value to `recipient`. Gateway only.
pub fn execute_bridge_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let canonical = CANONICAL_BRIDGES.load(deps.storage)?;
    if info.sender != canonical.gateway {
        return Err(ContractError::OnlyGateway);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    mint_base(deps.storage, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "bridge_mint")
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

/// Burn bridged value from `owner`. Gateway only; the gateway is a trusted
/// transport, so no allowance is required.
pub fn execute_bridge_burn(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let canonical = CANONICAL_BRIDGES.load(deps.storage)?;
    if info.sender != canonical.gateway {
        return Err(ContractError::OnlyGateway);
    }

    let owner_addr = deps.api.addr_validate(&owner)?;
    burn_base(deps.storage, &owner_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "bridge_burn")
        .add_attribute("from", owner_addr)
        .add_attribute("amount", amount))
}

/// Decode a 32-byte big-endian amount. The high 16 bytes must be zero to fit
/// the host's 128-bit amounts.
fn decode_deposit_amount(data: &Binary) -> Result<Uint128, ContractError> {
    if data.len() != 32 {
        return Err(ContractError::InvalidDepositData {
            reason: format!("expected 32 bytes, got {}", data.len()),
        });
    }
    if data[0..16].iter().any(|b| *b != 0) {
        return Err(ContractError::InvalidDepositData {
            reason: "amount exceeds 128 bits".to_string(),
        });
    }
    let mut raw = [0u8; 16];
    raw.copy_from_slice(&data[16..32]);
    Ok(Uint128::new(u128::from_be_bytes(raw)))
}
