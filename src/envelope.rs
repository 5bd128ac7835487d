// The composite envelope: the one structured value that actually gets signed

use alloy_primitives::{B256, U256};
use alloy_sol_types::{Eip712Domain, SolStruct, sol};
use std::borrow::Cow;

/// Domain name of the composite envelope.
pub const COMPOSITE_DOMAIN_NAME: &str = "EIP-XXXX";

/// Domain version of the composite envelope.
pub const COMPOSITE_DOMAIN_VERSION: &str = "1.0.0";

sol! {
    /// Envelope struct whose only payload is the Merkle root of the batch.
    #[derive(Debug)]
    struct CompositeMessage {
        bytes32 merkleRoot;
    }
}

/// The envelope's EIP-712 domain for a given chain.
///
/// Name, version and chain id only; no verifying contract, no salt. Together
/// with [`CompositeMessage`]'s type string this is a versioned wire contract:
/// the on-chain verifier reconstructs the identical domain, and any change
/// here silently breaks every signature unless mirrored there.
#[must_use]
pub fn composite_domain(chain_id: u64) -> Eip712Domain {
    Eip712Domain::new(
        Some(Cow::Borrowed(COMPOSITE_DOMAIN_NAME)),
        Some(Cow::Borrowed(COMPOSITE_DOMAIN_VERSION)),
        Some(U256::from(chain_id)),
        None,
        None,
    )
}

/// Digest that gets signed for a batch committed to by `merkle_root`.
///
/// Constructed fresh on both the signing and the verification path; the two
/// constructions must be byte-identical for the same root and chain id.
#[must_use]
pub fn signing_digest(chain_id: u64, merkle_root: B256) -> B256 {
    let envelope = CompositeMessage {
        merkleRoot: merkle_root,
    };
    envelope.eip712_signing_hash(&composite_domain(chain_id))
}
