//! Pegged Token Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers per pathway
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;
use cw20_base::msg::InstantiateMsg as Cw20InstantiateMsg;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_owner, execute_bridge_burn, execute_bridge_mint, execute_burn,
    execute_burn_from, execute_cancel_owner_proposal, execute_deposit, execute_grant_role,
    execute_mint, execute_propose_owner, execute_revoke_role, execute_update_bridge_cap,
    execute_withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_bridge, query_bridges, query_canonical_bridges, query_has_role, query_origin_token,
    query_owner, query_pending_owner, query_role_members, query_supported_protocols,
    query_supports_capability, query_supports_protocol,
};
use crate::state::{
    CanonicalBridges, CANONICAL_BRIDGES, CONTRACT_NAME, CONTRACT_VERSION, DEPOSITOR_ROLE,
    ORIGIN_TOKEN, OWNER, ROLES,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&msg.owner)?;
    let origin_token = validate_origin_token(&msg.origin_token)?;

    if msg.child_chain_manager.is_empty() {
        return Err(ContractError::ZeroAddress {
            field: "child_chain_manager".to_string(),
        });
    }
    if msg.gateway.is_empty() {
        return Err(ContractError::ZeroAddress {
            field: "gateway".to_string(),
        });
    }
    let child_chain_manager = deps.api.addr_validate(&msg.child_chain_manager)?;
    let gateway = deps.api.addr_validate(&msg.gateway)?;

    // Base token bookkeeping lives in cw20-base. No single minter is
    // configured: minting is governed by the bridge capacity ledger.
    cw20_base::contract::instantiate(
        deps.branch(),
        env,
        info,
        Cw20InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            initial_balances: msg.initial_balances,
            mint: None,
            marketing: None,
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    OWNER.save(deps.storage, &owner)?;
    ORIGIN_TOKEN.save(deps.storage, &origin_token)?;
    CANONICAL_BRIDGES.save(
        deps.storage,
        &CanonicalBridges {
            child_chain_manager: child_chain_manager.clone(),
            gateway: gateway.clone(),
        },
    )?;

    // The child-chain manager deposits through the role table
    ROLES.save(deps.storage, (DEPOSITOR_ROLE, &child_chain_manager), &true)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("origin_token", origin_token)
        .add_attribute("child_chain_manager", child_chain_manager)
        .add_attribute("gateway", gateway))
}

/// Origin-network token references are 20-byte EVM-style hex addresses
fn validate_origin_token(input: &str) -> Result<String, ContractError> {
    if input.is_empty() {
        return Err(ContractError::ZeroAddress {
            field: "origin_token".to_string(),
        });
    }
    let hex_part = input
        .strip_prefix("0x")
        .ok_or_else(|| StdError::generic_err("origin_token must be 0x-prefixed hex"))?;
    let bytes = hex::decode(hex_part)
        .map_err(|_| StdError::generic_err("origin_token is not valid hex"))?;
    if bytes.len() != 20 {
        return Err(StdError::generic_err("origin_token must be 20 bytes").into());
    }
    if bytes.iter().all(|b| *b == 0) {
        return Err(ContractError::ZeroAddress {
            field: "origin_token".to_string(),
        });
    }
    Ok(format!("0x{}", hex_part.to_lowercase()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Base token surface (cw20-base collaborator)
        ExecuteMsg::Transfer { recipient, amount } => Ok(cw20_base::contract::execute_transfer(
            deps, env, info, recipient, amount,
        )?),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(cw20_base::contract::execute_send(
            deps, env, info, contract, amount, msg,
        )?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(cw20_base::allowances::execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(cw20_base::allowances::execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(cw20_base::allowances::execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => Ok(cw20_base::allowances::execute_send_from(
            deps, env, info, owner, contract, amount, msg,
        )?),

        // Generic bridge pathway
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { amount } => execute_burn(deps, env, info, amount),
        ExecuteMsg::BurnFrom { owner, amount } => execute_burn_from(deps, env, info, owner, amount),

        // Canonical child-chain pathway
        ExecuteMsg::Deposit {
            recipient,
            deposit_data,
        } => execute_deposit(deps, info, recipient, deposit_data),
        ExecuteMsg::Withdraw { amount } => execute_withdraw(deps, info, amount),

        // Canonical gateway pathway
        ExecuteMsg::BridgeMint { recipient, amount } => {
            execute_bridge_mint(deps, info, recipient, amount)
        }
        ExecuteMsg::BridgeBurn { owner, amount } => execute_bridge_burn(deps, info, owner, amount),

        // Administration
        ExecuteMsg::UpdateBridgeCap { bridge, cap } => {
            execute_update_bridge_cap(deps, info, bridge, cap)
        }
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
        ExecuteMsg::ProposeOwner { new_owner } => execute_propose_owner(deps, env, info, new_owner),
        ExecuteMsg::AcceptOwner {} => execute_accept_owner(deps, env, info),
        ExecuteMsg::CancelOwnerProposal {} => execute_cancel_owner_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Base token queries (cw20-base collaborator)
        QueryMsg::Balance { address } => {
            to_json_binary(&cw20_base::contract::query_balance(deps, address)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&cw20_base::contract::query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => to_json_binary(
            &cw20_base::allowances::query_allowance(deps, owner, spender)?,
        ),

        // Bridge ledger & registry
        QueryMsg::Bridge { bridge } => to_json_binary(&query_bridge(deps, bridge)?),
        QueryMsg::Bridges { start_after, limit } => {
            to_json_binary(&query_bridges(deps, start_after, limit)?)
        }
        QueryMsg::OriginToken {} => to_json_binary(&query_origin_token(deps)?),
        QueryMsg::CanonicalBridges {} => to_json_binary(&query_canonical_bridges(deps)?),
        QueryMsg::HasRole { account, role } => to_json_binary(&query_has_role(deps, account, role)?),
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),

        // Capability advertisement
        QueryMsg::SupportsCapability { fingerprint } => {
            to_json_binary(&query_supports_capability(fingerprint)?)
        }
        QueryMsg::SupportsProtocol { protocol } => {
            to_json_binary(&query_supports_protocol(protocol)?)
        }
        QueryMsg::SupportedProtocols {} => to_json_binary(&query_supported_protocols()?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
