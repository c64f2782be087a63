//! Query handlers for the pegged token contract
//!
//! Base token queries (balance, token info, allowance) are answered by
//! cw20-base directly from the contract dispatch; this module covers the
//! bridge ledger, the identity registry and capability advertisement.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use common::{Protocol, ALL_PROTOCOLS};

use crate::msg::{
    BridgeSupplyResponse, BridgesResponse, CanonicalBridgesResponse, HasRoleResponse,
    OriginTokenResponse, OwnerResponse, PendingOwnerResponse, ProtocolInfo, RoleMembersResponse,
    SupportedProtocolsResponse, SupportsCapabilityResponse, SupportsProtocolResponse,
};
use crate::state::{BRIDGES, CANONICAL_BRIDGES, ORIGIN_TOKEN, OWNER, PENDING_OWNER, ROLES};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Bridge Ledger Queries
// ============================================================================

/// Query a bridge's supply record. Never-configured identities report the
/// implicit default record (zero cap, zero issuance).
pub fn query_bridge(deps: Deps, bridge: String) -> StdResult<BridgeSupplyResponse> {
    let bridge_addr = deps.api.addr_validate(&bridge)?;
    let supply = BRIDGES
        .may_load(deps.storage, &bridge_addr)?
        .unwrap_or_default();
    Ok(BridgeSupplyResponse {
        bridge: bridge_addr.to_string(),
        cap: supply.cap,
        issued: supply.issued,
    })
}

/// Query paginated list of configured bridge records.
pub fn query_bridges(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BridgesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let bridges: Vec<BridgeSupplyResponse> = BRIDGES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (addr, supply) = item?;
            Ok(BridgeSupplyResponse {
                bridge: addr.to_string(),
                cap: supply.cap,
                issued: supply.issued,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BridgesResponse { bridges })
}

// ============================================================================
// Registry Queries
// ============================================================================

/// Query the origin-network reference of the pegged asset.
pub fn query_origin_token(deps: Deps) -> StdResult<OriginTokenResponse> {
    let origin_token = ORIGIN_TOKEN.load(deps.storage)?;
    Ok(OriginTokenResponse { origin_token })
}

/// Query the two canonical bridge identities.
pub fn query_canonical_bridges(deps: Deps) -> StdResult<CanonicalBridgesResponse> {
    let canonical = CANONICAL_BRIDGES.load(deps.storage)?;
    Ok(CanonicalBridgesResponse {
        child_chain_manager: canonical.child_chain_manager.to_string(),
        gateway: canonical.gateway.to_string(),
    })
}

/// Query whether `account` holds `role`.
pub fn query_has_role(deps: Deps, account: String, role: String) -> StdResult<HasRoleResponse> {
    let account_addr = deps.api.addr_validate(&account)?;
    let has_role = ROLES
        .may_load(deps.storage, (role.as_str(), &account_addr))?
        .unwrap_or(false);
    Ok(HasRoleResponse { has_role })
}

/// Query paginated list of a role's members.
pub fn query_role_members(
    deps: Deps,
    role: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let members: Vec<String> = ROLES
        .prefix(role.as_str())
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (addr, _) = item?;
            Ok(addr.to_string())
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RoleMembersResponse { members })
}

/// Query the contract owner.
pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let owner = OWNER.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: owner.to_string(),
    })
}

/// Query the pending ownership transfer, if any.
pub fn query_pending_owner(deps: Deps) -> StdResult<PendingOwnerResponse> {
    let pending = PENDING_OWNER.may_load(deps.storage)?;
    Ok(PendingOwnerResponse {
        pending_owner: pending.as_ref().map(|p| p.new_address.to_string()),
        execute_after: pending.map(|p| p.execute_after.seconds()),
    })
}

// ============================================================================
// Capability Advertisement
// ============================================================================

/// Answer whether the contract exposes the function group with this 4-byte
/// fingerprint. True for exactly the advertised group fingerprints.
pub fn query_supports_capability(fingerprint: Binary) -> StdResult<SupportsCapabilityResponse> {
    if fingerprint.len() != 4 {
        return Err(StdError::generic_err("fingerprint must be exactly 4 bytes"));
    }
    let mut probe = [0u8; 4];
    probe.copy_from_slice(&fingerprint);

    let supported = ALL_PROTOCOLS
        .iter()
        .any(|protocol| protocol.fingerprint() == probe);
    Ok(SupportsCapabilityResponse { supported })
}

/// Answer whether the contract speaks the named protocol.
pub fn query_supports_protocol(protocol: String) -> StdResult<SupportsProtocolResponse> {
    Ok(SupportsProtocolResponse {
        supported: Protocol::from_name(&protocol).is_some(),
    })
}

/// Enumerate every advertised protocol with its fingerprint.
pub fn query_supported_protocols() -> StdResult<SupportedProtocolsResponse> {
    let protocols = ALL_PROTOCOLS
        .iter()
        .map(|protocol| ProtocolInfo {
            protocol: protocol.name().to_string(),
            fingerprint: Binary::from(protocol.fingerprint().to_vec()),
        })
        .collect();
    Ok(SupportedProtocolsResponse { protocols })
}
