//! Common - Shared Primitives for the Pegged Token Contract
//!
//! This package provides the capability fingerprint scheme used by the
//! contract's protocol-discovery queries. Off-chain callers probing a
//! deployed instance must compute the exact same fingerprints, which is why
//! this lives in a shared package rather than inside the contract crate.

pub mod capability;

pub use capability::{
    group_fingerprint, keccak256, selector, selector_hex, Protocol, Selector, ALL_PROTOCOLS,
    SIG_BRIDGE_BURN, SIG_BRIDGE_MINT, SIG_BURN, SIG_BURN_FROM, SIG_DEPOSIT, SIG_MINT,
    SIG_ORIGIN_TOKEN, SIG_SUPPORTS_CAPABILITY, SIG_WITHDRAW,
};
