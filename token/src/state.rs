//! State definitions for the pegged token contract
//!
//! Base balances, allowances and token metadata live in cw20-base's storage;
//! this module holds only the bridge-authorization state layered on top.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Structures
// ============================================================================

/// Per-bridge supply accounting for the generic pathway
#[cw_serde]
#[derive(Default)]
pub struct BridgeSupply {
    /// Ceiling on this bridge's net issuance
    pub cap: Uint128,
    /// Amount minted minus amount redeemed by this bridge
    pub issued: Uint128,
}

impl BridgeSupply {
    /// A record takes part in redemption accounting once it has a cap or
    /// outstanding issuance; plain holders never grow an active record.
    pub fn is_active(&self) -> bool {
        !self.cap.is_zero() || !self.issued.is_zero()
    }
}

/// The two canonical bridge identities, set once at instantiation
#[cw_serde]
pub struct CanonicalBridges {
    /// Child-chain manager; deposits through the role table
    pub child_chain_manager: Addr,
    /// Gateway; sole caller of the bridge mint/burn pathway
    pub gateway: Addr,
}

/// Pending ownership transfer proposal
#[cw_serde]
pub struct PendingOwner {
    /// Proposed new owner address
    pub new_address: Addr,
    /// Block time from which the transfer can be accepted
    pub execute_after: Timestamp,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:peg-token";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Role gating the canonical child-chain deposit pathway
pub const DEPOSITOR_ROLE: &str = "depositor";

/// 7 days in seconds for the ownership transfer timelock
pub const OWNER_TIMELOCK_DURATION: u64 = 604_800;

// ============================================================================
// Storage
// ============================================================================

/// Contract owner (cap and role administration)
pub const OWNER: Item<Addr> = Item::new("owner");

/// Pending ownership transfer (if any)
pub const PENDING_OWNER: Item<PendingOwner> = Item::new("pending_owner");

/// Origin-network address of the pegged asset (0x-prefixed hex, write-once)
pub const ORIGIN_TOKEN: Item<String> = Item::new("origin_token");

/// Canonical bridge identities (write-once)
pub const CANONICAL_BRIDGES: Item<CanonicalBridges> = Item::new("canonical_bridges");

/// Per-bridge supply records; created on first cap assignment, never deleted
/// Key: bridge address, Value: BridgeSupply
pub const BRIDGES: Map<&Addr, BridgeSupply> = Map::new("bridges");

/// Role grants
/// Key: (role, account), Value: whether granted
pub const ROLES: Map<(&str, &Addr), bool> = Map::new("roles");
