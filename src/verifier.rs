// Composite verification: recompute the root, recover the signer

use alloy_dyn_abi::TypedData;
use alloy_primitives::{Address, B256, keccak256};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::aggregator;
use crate::envelope;
use crate::error::CompositeError;
use crate::leaf;
use crate::types::SignatureBytes;

/// Maximum accepted proof length, enough for a tree of 2^64 leaves.
///
/// Verifiers process untrusted proofs; the bound keeps an adversarial input
/// from driving an unbounded hash loop.
pub const MAX_PROOF_LEN: usize = 64;

/// Recovers the signer of a composite signature for one included message.
///
/// Recomputes the Merkle root from the message's leaf and `proof`; when the
/// recomputed root matches `merkle_root`, reconstructs the composite envelope
/// for `merkle_root` and recovers the address that signed it.
///
/// Negative outcomes are values, not errors: `Ok(None)` means the proof does
/// not bind this message to `merkle_root`, or point recovery failed. Errors
/// are reserved for structurally invalid input. A caller that expects a
/// particular signer must still compare the recovered address;
/// [`verify_composite_signature`] does both steps.
///
/// # Errors
///
/// * [`CompositeError::ProofTooLong`] - proof exceeds [`MAX_PROOF_LEN`]
/// * [`CompositeError::MessageHash`] - malformed message schema or payload
/// * [`CompositeError::MalformedSignature`] - signature encoding is not a
///   canonical `r || s || v` (see [`recover_envelope_signer`])
pub fn recover_composite_signer(
    chain_id: u64,
    signature: &SignatureBytes,
    merkle_root: B256,
    proof: &[B256],
    message: &TypedData,
) -> Result<Option<Address>, CompositeError> {
    if proof.len() > MAX_PROOF_LEN {
        return Err(CompositeError::ProofTooLong {
            len: proof.len(),
            max: MAX_PROOF_LEN,
        });
    }

    let leaf = leaf::hash_message(message)?;
    if aggregator::compute_root(leaf, proof) != merkle_root {
        return Ok(None);
    }

    recover_envelope_signer(chain_id, signature, merkle_root)
}

/// Verifies that `message` was part of the batch signed by `expected_signer`.
///
/// Composition of [`recover_composite_signer`] and an address comparison.
/// Addresses compare as raw bytes, which makes the comparison independent of
/// any hex-string casing the caller started from.
///
/// # Errors
///
/// Same structural errors as [`recover_composite_signer`]; a wrong proof,
/// wrong root, or wrong signer is `Ok(false)`, never an error.
pub fn verify_composite_signature(
    chain_id: u64,
    signature: &SignatureBytes,
    merkle_root: B256,
    proof: &[B256],
    message: &TypedData,
    expected_signer: Address,
) -> Result<bool, CompositeError> {
    let recovered = recover_composite_signer(chain_id, signature, merkle_root, proof, message)?;
    Ok(recovered == Some(expected_signer))
}

/// Recovers the envelope signer from a signature and a Merkle root alone.
///
/// Lower-level primitive for callers that already trust the root's binding
/// to a message (the on-chain verifier exposes the same operation). The
/// envelope is reconstructed exactly as on the signing path.
///
/// `Ok(None)` indicates point recovery failed for a well-formed signature.
///
/// # Errors
///
/// [`CompositeError::MalformedSignature`] when the signature is structurally
/// invalid: recovery byte outside `{27, 28}`, `r` or `s` not a valid nonzero
/// scalar, or an upper-half `s` value.
pub fn recover_envelope_signer(
    chain_id: u64,
    signature: &SignatureBytes,
    merkle_root: B256,
) -> Result<Option<Address>, CompositeError> {
    let digest = envelope::signing_digest(chain_id, merkle_root);

    let recovery_id = match signature.v() {
        27 => RecoveryId::new(false, false),
        28 => RecoveryId::new(true, false),
        v => {
            return Err(CompositeError::MalformedSignature {
                message: format!("recovery byte must be 27 or 28, got {}", v),
            });
        }
    };

    let sig = Signature::from_slice(&signature.as_bytes()[..64]).map_err(|e| {
        CompositeError::MalformedSignature {
            message: e.to_string(),
        }
    })?;
    if sig.normalize_s().is_some() {
        return Err(CompositeError::MalformedSignature {
            message: "upper-half s value".to_string(),
        });
    }

    let Ok(key) = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id) else {
        return Ok(None);
    };
    Ok(Some(address_from_key(&key)))
}

/// Ethereum address of a secp256k1 public key.
///
/// `keccak256` of the uncompressed point without its `0x04` tag, truncated to
/// the low 20 bytes.
#[must_use]
pub fn address_from_key(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&digest[12..])
}
