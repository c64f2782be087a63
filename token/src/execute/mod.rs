//! Execute message handlers
//!
//! Handlers are grouped by pathway:
//! - `bridge` - generic pathway (capacity-gated mint, issuance-settling burns)
//! - `canonical` - child-chain and gateway pathways
//! - `admin` - caps, roles and ownership transfer

mod admin;
mod bridge;
mod canonical;

pub use admin::{
    execute_accept_owner, execute_cancel_owner_proposal, execute_grant_role,
    execute_propose_owner, execute_revoke_role, execute_update_bridge_cap,
};
pub use bridge::{execute_burn, execute_burn_from, execute_mint};
pub use canonical::{
    execute_bridge_burn, execute_bridge_mint, execute_deposit, execute_withdraw,
};

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw20_base::state::{BALANCES, TOKEN_INFO};

use crate::error::ContractError;

/// Credit `recipient` on the base ledger and grow total supply.
///
/// The contract is its own cw20, so credits happen in-storage rather than
/// through a mint message to an external token contract. Must run after all
/// authorization and capacity checks.
pub(crate) fn mint_base(
    storage: &mut dyn Storage,
    recipient: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    TOKEN_INFO.update(storage, |mut info| -> StdResult<_> {
        info.total_supply = info.total_supply.checked_add(amount)?;
        Ok(info)
    })?;
    BALANCES.update(storage, recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

/// Debit `owner` on the base ledger and shrink total supply.
///
/// An insufficient balance surfaces as the base ledger's overflow error,
/// unchanged.
pub(crate) fn burn_base(
    storage: &mut dyn Storage,
    owner: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    BALANCES.update(storage, owner, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_sub(amount)?)
    })?;
    TOKEN_INFO.update(storage, |mut info| -> StdResult<_> {
        info.total_supply = info.total_supply.checked_sub(amount)?;
        Ok(info)
    })?;
    Ok(())
}
