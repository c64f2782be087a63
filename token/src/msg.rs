//! Message types for the pegged token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Expiration, TokenInfoResponse};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// The three bridge identities are fixed here for the contract's lifetime;
/// no execute message can change them afterwards.
#[cw_serde]
pub struct InstantiateMsg {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Token decimals
    pub decimals: u8,
    /// Optional pre-funded balances
    pub initial_balances: Vec<Cw20Coin>,
    /// Owner administering bridge caps and roles
    pub owner: String,
    /// Origin-network address of the pegged asset (0x-prefixed, 20 bytes)
    pub origin_token: String,
    /// Canonical child-chain manager (receives the depositor role)
    pub child_chain_manager: String,
    /// Canonical gateway
    pub gateway: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Base Token Surface (cw20-base)
    // ========================================================================
    /// Transfer tokens to another account
    Transfer { recipient: String, amount: Uint128 },

    /// Transfer tokens to a contract and trigger its receive hook
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    /// Allow a spender to draw from the caller's balance
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    /// Shrink a spender's allowance
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    /// Transfer from a delegating account (requires allowance)
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    /// Send from a delegating account (requires allowance)
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    // ========================================================================
    // Generic Bridge Pathway (capacity-gated)
    // ========================================================================
    /// Mint against the caller's bridge capacity
    ///
    /// Authorization: any caller; fails once the caller's net issuance would
    /// exceed its cap (never-configured callers hold cap zero)
    Mint { recipient: String, amount: Uint128 },

    /// Burn the caller's own balance, settling the caller's issuance when it
    /// has an active bridge record
    Burn { amount: Uint128 },

    /// Burn from a delegating account (requires allowance), settling the
    /// caller's issuance when it has an active bridge record
    BurnFrom { owner: String, amount: Uint128 },

    // ========================================================================
    // Canonical Child-Chain Pathway
    // ========================================================================
    /// Mint deposited value to `recipient`
    ///
    /// Authorization: depositor role. `deposit_data` carries the amount in
    /// the origin encoding: 32 bytes, big-endian.
    Deposit {
        recipient: String,
        deposit_data: Binary,
    },

    /// Burn the caller's own balance to exit to the origin network
    ///
    /// Authorization: any holder
    Withdraw { amount: Uint128 },

    // ========================================================================
    // Canonical Gateway Pathway
    // ========================================================================
    /// Mint bridged value to `recipient`
    ///
    /// Authorization: gateway only
    BridgeMint { recipient: String, amount: Uint128 },

    /// Burn bridged value from `owner` (no allowance; the gateway is trusted)
    ///
    /// Authorization: gateway only
    BridgeBurn { owner: String, amount: Uint128 },

    // ========================================================================
    // Administration
    // ========================================================================
    /// Overwrite a bridge's supply cap; never touches its issuance
    ///
    /// Authorization: owner only
    UpdateBridgeCap { bridge: String, cap: Uint128 },

    /// Grant a role to an account
    ///
    /// Authorization: owner only
    GrantRole { role: String, account: String },

    /// Revoke a role from an account
    ///
    /// Authorization: owner only
    RevokeRole { role: String, account: String },

    /// Propose a new owner (starts the 7-day timelock)
    ///
    /// Authorization: owner only
    ProposeOwner { new_owner: String },

    /// Accept a pending ownership transfer (after the timelock)
    ///
    /// Authorization: pending owner only
    AcceptOwner {},

    /// Cancel a pending ownership transfer
    ///
    /// Authorization: owner only
    CancelOwnerProposal {},
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // Base token queries (cw20-base)
    /// Balance of an account
    #[returns(BalanceResponse)]
    Balance { address: String },
    /// Token metadata and total supply
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// Allowance granted by `owner` to `spender`
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    // Bridge ledger & registry
    /// Supply record of a bridge identity (zeros if never configured)
    #[returns(BridgeSupplyResponse)]
    Bridge { bridge: String },
    /// Paginated list of configured bridge records
    #[returns(BridgesResponse)]
    Bridges {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Origin-network reference of the pegged asset
    #[returns(OriginTokenResponse)]
    OriginToken {},
    /// The two canonical bridge identities
    #[returns(CanonicalBridgesResponse)]
    CanonicalBridges {},
    /// Whether `account` holds `role`
    #[returns(HasRoleResponse)]
    HasRole { account: String, role: String },
    /// Paginated list of a role's members
    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Contract owner
    #[returns(OwnerResponse)]
    Owner {},
    /// Pending ownership transfer, if any
    #[returns(PendingOwnerResponse)]
    PendingOwner {},

    // Capability advertisement
    /// Whether the contract exposes the function group with this 4-byte
    /// fingerprint
    #[returns(SupportsCapabilityResponse)]
    SupportsCapability { fingerprint: Binary },
    /// Whether the contract speaks the named protocol
    #[returns(SupportsProtocolResponse)]
    SupportsProtocol { protocol: String },
    /// All advertised protocols with their fingerprints
    #[returns(SupportedProtocolsResponse)]
    SupportedProtocols {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct BridgeSupplyResponse {
    pub bridge: String,
    pub cap: Uint128,
    pub issued: Uint128,
}

#[cw_serde]
pub struct BridgesResponse {
    pub bridges: Vec<BridgeSupplyResponse>,
}

#[cw_serde]
pub struct OriginTokenResponse {
    pub origin_token: String,
}

#[cw_serde]
pub struct CanonicalBridgesResponse {
    pub child_chain_manager: String,
    pub gateway: String,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub members: Vec<String>,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: String,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub pending_owner: Option<String>,
    /// Block time (seconds) from which the transfer can be accepted
    pub execute_after: Option<u64>,
}

#[cw_serde]
pub struct SupportsCapabilityResponse {
    pub supported: bool,
}

#[cw_serde]
pub struct SupportsProtocolResponse {
    pub supported: bool,
}

#[cw_serde]
pub struct ProtocolInfo {
    pub protocol: String,
    pub fingerprint: Binary,
}

#[cw_serde]
pub struct SupportedProtocolsResponse {
    pub protocols: Vec<ProtocolInfo>,
}
