//! Capability fingerprints for protocol discovery
//!
//! Every advertised operation has a canonical signature string; its
//! fingerprint is the first 4 bytes of the keccak-256 hash of that string.
//! A protocol group's fingerprint is the bitwise XOR of its members'
//! fingerprints, so a caller can probe a whole function group in one query.
//!
//! The contract answers `SupportsCapability` for exactly the group
//! fingerprints enumerated by [`ALL_PROTOCOLS`], and additionally exposes
//! the groups as named tags (`SupportsProtocol` / `SupportedProtocols`) so
//! callers are not forced through the fingerprint arithmetic.

use tiny_keccak::{Hasher, Keccak};

/// A 4-byte operation or protocol-group fingerprint
pub type Selector = [u8; 4];

// ============================================================================
// Canonical operation signatures
// ============================================================================

/// Baseline discovery query every instance answers for
pub const SIG_SUPPORTS_CAPABILITY: &str = "supports_capability(bytes4)";

/// Generic pathway: capacity-gated mint
pub const SIG_MINT: &str = "mint(addr,uint128)";
/// Generic pathway: self redemption
pub const SIG_BURN: &str = "burn(uint128)";
/// Generic pathway: delegated redemption
pub const SIG_BURN_FROM: &str = "burn_from(addr,uint128)";

/// Origin-network reference of the pegged asset
pub const SIG_ORIGIN_TOKEN: &str = "origin_token()";

/// Canonical child-chain pathway: role-gated deposit
pub const SIG_DEPOSIT: &str = "deposit(addr,bytes)";
/// Canonical child-chain pathway: self withdrawal
pub const SIG_WITHDRAW: &str = "withdraw(uint128)";

/// Canonical gateway pathway: gateway-only mint
pub const SIG_BRIDGE_MINT: &str = "bridge_mint(addr,uint128)";
/// Canonical gateway pathway: gateway-only burn
pub const SIG_BRIDGE_BURN: &str = "bridge_burn(addr,uint128)";

// ============================================================================
// Protocol groups
// ============================================================================

/// A named group of operations forming one bridging protocol surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    /// The discovery query itself
    CapabilityProbe,
    /// Lock/mint bridging, first revision (mint + self burn)
    LockMintV1,
    /// Lock/mint bridging, second revision (adds delegated burn)
    LockMintV2,
    /// Origin-peg surface (peg reference + mint + burn)
    OriginPeg,
    /// Canonical gateway surface (peg reference + gateway mint/burn)
    CanonicalGateway,
    /// Canonical child-chain surface (deposit + withdraw)
    CanonicalChildChain,
}

/// Every protocol group the contract advertises
pub const ALL_PROTOCOLS: [Protocol; 6] = [
    Protocol::CapabilityProbe,
    Protocol::LockMintV1,
    Protocol::LockMintV2,
    Protocol::OriginPeg,
    Protocol::CanonicalGateway,
    Protocol::CanonicalChildChain,
];

impl Protocol {
    /// Stable tag used in queries and responses
    pub const fn name(&self) -> &'static str {
        match self {
            Protocol::CapabilityProbe => "capability_probe",
            Protocol::LockMintV1 => "lock_mint_v1",
            Protocol::LockMintV2 => "lock_mint_v2",
            Protocol::OriginPeg => "origin_peg",
            Protocol::CanonicalGateway => "canonical_gateway",
            Protocol::CanonicalChildChain => "canonical_child_chain",
        }
    }

    /// Canonical signatures of the group's member operations
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            Protocol::CapabilityProbe => &[SIG_SUPPORTS_CAPABILITY],
            Protocol::LockMintV1 => &[SIG_MINT, SIG_BURN],
            Protocol::LockMintV2 => &[SIG_MINT, SIG_BURN, SIG_BURN_FROM],
            Protocol::OriginPeg => &[SIG_ORIGIN_TOKEN, SIG_MINT, SIG_BURN],
            Protocol::CanonicalGateway => &[SIG_ORIGIN_TOKEN, SIG_BRIDGE_MINT, SIG_BRIDGE_BURN],
            Protocol::CanonicalChildChain => &[SIG_DEPOSIT, SIG_WITHDRAW],
        }
    }

    /// XOR-combined fingerprint of the group's members
    pub fn fingerprint(&self) -> Selector {
        group_fingerprint(self.members())
    }

    /// Resolve a tag back to its protocol, if known
    pub fn from_name(name: &str) -> Option<Protocol> {
        ALL_PROTOCOLS.into_iter().find(|p| p.name() == name)
    }
}

// ============================================================================
// Fingerprint computation
// ============================================================================

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Fingerprint of a single operation: keccak-256 of its canonical signature,
/// truncated to the first 4 bytes
pub fn selector(signature: &str) -> Selector {
    let digest = keccak256(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&digest[0..4]);
    out
}

/// XOR-fold the selectors of a set of signatures into a group fingerprint
pub fn group_fingerprint(signatures: &[&str]) -> Selector {
    let mut acc = [0u8; 4];
    for signature in signatures {
        let sel = selector(signature);
        for (a, b) in acc.iter_mut().zip(sel.iter()) {
            *a ^= b;
        }
    }
    acc
}

/// Render a selector as 0x-prefixed hex (for attributes/diagnostics)
pub fn selector_hex(sel: &Selector) -> String {
    let mut out = String::with_capacity(10);
    out.push_str("0x");
    for byte in sel {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}
