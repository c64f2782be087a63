//! Pegged Token Contract - One Asset, Several Bridge Transports
//!
//! This contract is the local representation of an asset locked on an origin
//! network. Several independent bridge transports mint and burn it, each
//! through its own pathway:
//!
//! # Generic Pathway (Mint / Burn / BurnFrom)
//! Open to any caller, bounded by a per-identity supply cap. A bridge's net
//! issuance (`issued`) may never exceed its owner-configured `cap`; since
//! never-configured identities hold a zero cap, granting a non-zero cap IS
//! the authorization.
//!
//! # Canonical Child-Chain Pathway (Deposit / Withdraw)
//! Deposits are gated by the `depositor` role (granted to the child-chain
//! manager at instantiation); withdrawals burn the caller's own balance.
//!
//! # Canonical Gateway Pathway (BridgeMint / BridgeBurn)
//! Hard-wired to the gateway identity fixed at instantiation.
//!
//! Canonical pathways represent single trusted transports and bypass the
//! capacity ledger; they mutate the base ledger directly. Base balances and
//! allowances are cw20-base. Callers can discover which bridging protocols
//! an instance speaks through 4-byte capability fingerprints (see the
//! `common` package).

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
