//! Composite EIP-712 Signature Library
//!
//! This library lets one secp256k1 private key authenticate an arbitrary
//! batch of otherwise-unrelated EIP-712 typed-data messages with a single
//! 65-byte signature. A verifier holding one message plus a short Merkle
//! proof confirms that message was part of the signed batch without seeing
//! the other messages.
//!
//! # Overview
//!
//! Signing hashes every message to a 32-byte leaf, builds a binary Merkle
//! tree over the leaves with a sorted-pair keccak256 combine rule, wraps the
//! tree's root in a fixed `CompositeMessage` envelope, and signs that
//! envelope's EIP-712 digest. Verification inverts the flow: recompute the
//! root from a leaf and its proof, rebuild the identical envelope, recover
//! the signer, and compare addresses.
//!
//! The sorted-pair rule (`keccak256(min(a,b) || max(a,b))`) makes proof
//! elements position-free, and a companion on-chain verifier applies the
//! same rule, so signatures produced here validate in both environments.
//!
//! # Example
//!
//! ```no_run
//! use composite_eip712::{sign_composite, verify_composite_signature, TypedData};
//! use composite_eip712::verifier::address_from_key;
//! use k256::ecdsa::SigningKey;
//!
//! # fn messages() -> Vec<TypedData> { vec![] }
//! let key = SigningKey::random(&mut rand::thread_rng());
//! let messages: Vec<TypedData> = messages();
//!
//! // One signature over the whole batch.
//! let signed = sign_composite(1, &key, &messages)?;
//!
//! // Each message carries its own proof of inclusion.
//! for (message, proof) in messages.iter().zip(&signed.proofs) {
//!     let ok = verify_composite_signature(
//!         1,
//!         &signed.signature,
//!         signed.merkle_root,
//!         proof,
//!         message,
//!         address_from_key(key.verifying_key()),
//!     )?;
//!     assert!(ok);
//! }
//! # Ok::<(), composite_eip712::CompositeError>(())
//! ```
//!
//! # Features
//!
//! - One constant-size signature for any batch size
//! - Per-message inclusion proofs of `O(log n)` digests
//! - Proofs reveal nothing about sibling messages beyond their digests
//! - Byte-compatible with the companion on-chain verifier
//! - Pure, synchronous API; safe to call concurrently

pub mod aggregator;
pub mod envelope;
pub mod error;
pub mod leaf;
pub mod signer;
pub mod types;
pub mod verifier;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types and functions for convenience
pub use aggregator::{build_proof, build_proofs, build_root, combine, compute_root};
pub use envelope::{
    COMPOSITE_DOMAIN_NAME, COMPOSITE_DOMAIN_VERSION, CompositeMessage, composite_domain,
    signing_digest,
};
pub use error::CompositeError;
pub use leaf::hash_message;
pub use signer::sign_composite;
pub use types::{CompositeSignature, MerkleProof, SignatureBytes};
pub use verifier::{
    MAX_PROOF_LEN, address_from_key, recover_composite_signer, recover_envelope_signer,
    verify_composite_signature,
};

// Re-exports of the external primitives the API surface is built from
pub use alloy_dyn_abi::TypedData;
pub use alloy_primitives::{Address, B256};
