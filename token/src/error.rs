//! Error types for the pegged token contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Base-ledger failures (allowances, balances) propagate unchanged
    #[error("{0}")]
    Base(#[from] cw20_base::ContractError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Missing role {role} for {account}")]
    MissingRole { account: String, role: String },

    #[error("Unauthorized: only the canonical gateway can perform this action")]
    OnlyGateway,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    // ========================================================================
    // Capacity Ledger Errors
    // ========================================================================

    #[error("Supply cap exceeded for bridge {bridge}: cap {cap}, issued {issued}, requested {requested}")]
    SupplyCapExceeded {
        bridge: String,
        cap: Uint128,
        issued: Uint128,
        requested: Uint128,
    },

    #[error("Burn exceeds issued supply for bridge {bridge}: issued {issued}, requested {requested}")]
    BurnExceedsIssued {
        bridge: String,
        issued: Uint128,
        requested: Uint128,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Zero address not allowed for {field}")]
    ZeroAddress { field: String },

    #[error("Invalid deposit data: {reason}")]
    InvalidDepositData { reason: String },

    // ========================================================================
    // Ownership Transfer Errors
    // ========================================================================

    #[error("No pending ownership transfer")]
    NoPendingOwner,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },
}
