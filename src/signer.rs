// Composite signing: one key, one signature, an arbitrary batch of messages

use alloy_dyn_abi::TypedData;
use k256::ecdsa::{RecoveryId, SigningKey};

use crate::aggregator;
use crate::envelope;
use crate::error::CompositeError;
use crate::leaf;
use crate::types::{CompositeSignature, SignatureBytes};

/// Signs a batch of EIP-712 typed-data messages with a single signature.
///
/// Each message is hashed to a leaf in input order, a Merkle tree is built
/// over the leaves, and the tree's root is wrapped in the composite envelope
/// and signed. The messages themselves are never signed individually; only
/// the root is, so the signature stays 65 bytes regardless of batch size.
///
/// Returns the signature, the root, and one inclusion proof per message,
/// index-aligned with the input: `proofs[i]` proves `messages[i]`.
///
/// # Arguments
///
/// * `chain_id` - Chain id bound into the envelope's domain
/// * `key` - secp256k1 signing key
/// * `messages` - Ordered batch of typed-data messages, each with its own
///   domain and type schema
///
/// # Errors
///
/// * [`CompositeError::EmptyMessageList`] - `messages` is empty
/// * [`CompositeError::MessageHash`] - a message's schema or payload was
///   rejected by the typed-data encoder
/// * [`CompositeError::Signing`] - the ECDSA primitive failed
///
/// # Examples
///
/// ```no_run
/// use composite_eip712::{sign_composite, verify_composite_signature, TypedData};
/// use composite_eip712::verifier::address_from_key;
/// use k256::ecdsa::SigningKey;
///
/// # fn messages() -> Vec<TypedData> { vec![] }
/// let key = SigningKey::random(&mut rand::thread_rng());
/// let messages = messages();
///
/// let signed = sign_composite(1, &key, &messages)?;
///
/// // Any single message verifies against the one signature.
/// let ok = verify_composite_signature(
///     1,
///     &signed.signature,
///     signed.merkle_root,
///     &signed.proofs[0],
///     &messages[0],
///     address_from_key(key.verifying_key()),
/// )?;
/// assert!(ok);
/// # Ok::<(), composite_eip712::CompositeError>(())
/// ```
pub fn sign_composite(
    chain_id: u64,
    key: &SigningKey,
    messages: &[TypedData],
) -> Result<CompositeSignature, CompositeError> {
    if messages.is_empty() {
        return Err(CompositeError::EmptyMessageList);
    }

    let leaves = messages
        .iter()
        .map(leaf::hash_message)
        .collect::<Result<Vec<_>, _>>()?;

    let merkle_root = aggregator::build_root(&leaves)?;
    let proofs = aggregator::build_proofs(&leaves)?;

    let digest = envelope::signing_digest(chain_id, merkle_root);
    let (mut sig, mut recovery_id) = key
        .sign_prehash_recoverable(digest.as_slice())
        .map_err(|e| CompositeError::Signing {
            message: e.to_string(),
        })?;

    // Ethereum accepts lower-half s only; flip the recovery id along with s.
    if let Some(normalized) = sig.normalize_s() {
        sig = normalized;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }

    let mut bytes = [0u8; SignatureBytes::LENGTH];
    bytes[..64].copy_from_slice(&sig.to_bytes());
    bytes[64] = 27 + recovery_id.to_byte();

    Ok(CompositeSignature {
        signature: SignatureBytes(bytes),
        merkle_root,
        proofs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::compute_root;
    use crate::test_support::{test_key, transfer_message};

    #[test]
    fn test_sign_returns_aligned_proofs() {
        let key = test_key(1);
        let messages: Vec<TypedData> = (0..4).map(|i| transfer_message(i + 1)).collect();

        let signed = sign_composite(1, &key, &messages).expect("Signing should succeed");

        assert_eq!(signed.proofs.len(), messages.len());
        for (message, proof) in messages.iter().zip(&signed.proofs) {
            let leaf = leaf::hash_message(message).unwrap();
            assert_eq!(compute_root(leaf, proof), signed.merkle_root);
        }
    }

    #[test]
    fn test_sign_single_message() {
        let key = test_key(1);
        let messages = vec![transfer_message(1)];

        let signed = sign_composite(1, &key, &messages).expect("Signing should succeed");

        assert_eq!(
            signed.merkle_root,
            leaf::hash_message(&messages[0]).unwrap()
        );
        assert_eq!(signed.proofs.len(), 1);
        assert!(signed.proofs[0].is_empty());
    }

    #[test]
    fn test_sign_empty_batch() {
        let key = test_key(1);
        let result = sign_composite(1, &key, &[]);
        assert!(matches!(result, Err(CompositeError::EmptyMessageList)));
    }

    #[test]
    fn test_signature_is_deterministic() {
        // RFC 6979 nonces: same key, same batch, same bytes.
        let key = test_key(1);
        let messages: Vec<TypedData> = (0..3).map(|i| transfer_message(i + 1)).collect();

        let first = sign_composite(1, &key, &messages).unwrap();
        let second = sign_composite(1, &key, &messages).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_recovery_byte_is_canonical() {
        let key = test_key(2);
        let messages = vec![transfer_message(9)];
        let signed = sign_composite(1, &key, &messages).unwrap();
        assert!(matches!(signed.signature.v(), 27 | 28));
    }

    #[test]
    fn test_malformed_message_aborts_signing() {
        let key = test_key(1);
        let mut message = transfer_message(1);
        message.primary_type = "Missing".to_string();

        let result = sign_composite(1, &key, &[message]);
        assert!(matches!(result, Err(CompositeError::MessageHash { .. })));
    }
}
