// Data model for composite signatures and Merkle proofs

use alloy_primitives::B256;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::CompositeError;

/// Ordered sibling digests from a leaf up to the root, one per tree level.
///
/// Serialized as a JSON array of `0x`-prefixed 32-byte hex strings. An empty
/// proof is valid and corresponds to a single-message batch whose root equals
/// the leaf itself.
pub type MerkleProof = Vec<B256>;

/// 65-byte recoverable ECDSA signature in Ethereum's `r || s || v` layout.
///
/// `r` and `s` are 32-byte big-endian scalars; `v` is the recovery byte and
/// is always `27` or `28` for signatures produced by this crate. Rendered as
/// a `0x`-prefixed 130-character hex string.
///
/// # Examples
///
/// ```
/// use composite_eip712::SignatureBytes;
///
/// let hex = format!("0x{}", "11".repeat(65));
/// let sig = SignatureBytes::from_hex(&hex).expect("well-formed hex");
/// assert_eq!(sig.to_string(), hex);
/// assert_eq!(sig.v(), 0x11);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SignatureBytes(pub [u8; 65]);

impl SignatureBytes {
    /// Encoded signature length in bytes.
    pub const LENGTH: usize = 65;

    /// Parses a signature from a hex string, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CompositeError::MalformedSignature`] if the string is not
    /// valid hex or does not decode to exactly 65 bytes. No scalar-range or
    /// recovery-byte validation happens here; that is deferred to
    /// verification, where a structurally invalid signature is rejected.
    pub fn from_hex(s: &str) -> Result<Self, CompositeError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| CompositeError::MalformedSignature {
            message: format!("invalid hex: {}", e),
        })?;
        if bytes.len() != Self::LENGTH {
            return Err(CompositeError::MalformedSignature {
                message: format!("expected {} bytes, got {}", Self::LENGTH, bytes.len()),
            });
        }
        let mut buf = [0u8; Self::LENGTH];
        buf.copy_from_slice(&bytes);
        Ok(Self(buf))
    }

    /// Raw `r || s || v` bytes.
    pub const fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }

    /// The `r` scalar bytes.
    pub fn r(&self) -> &[u8] {
        &self.0[..32]
    }

    /// The `s` scalar bytes.
    pub fn s(&self) -> &[u8] {
        &self.0[32..64]
    }

    /// The recovery byte.
    pub const fn v(&self) -> u8 {
        self.0[64]
    }
}

impl fmt::Display for SignatureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for SignatureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignatureBytes(0x{})", hex::encode(self.0))
    }
}

impl From<[u8; 65]> for SignatureBytes {
    fn from(bytes: [u8; 65]) -> Self {
        Self(bytes)
    }
}

impl Serialize for SignatureBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SignatureBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

/// Result of signing a batch of typed-data messages.
///
/// Contains the single recoverable signature over the composite envelope, the
/// Merkle root the envelope commits to, and one inclusion proof per input
/// message. `proofs[i]` proves the message at input index `i`; the alignment
/// is part of the contract and survives serialization.
///
/// # Examples
///
/// ```no_run
/// use composite_eip712::{sign_composite, TypedData};
/// use k256::ecdsa::SigningKey;
///
/// # let key: SigningKey = unimplemented!();
/// # let messages: Vec<TypedData> = vec![];
/// let signed = sign_composite(1, &key, &messages)?;
///
/// assert_eq!(signed.proofs.len(), messages.len());
/// println!("root: {}", signed.merkle_root);
/// println!("signature: {}", signed.signature);
/// # Ok::<(), composite_eip712::CompositeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeSignature {
    /// Recoverable ECDSA signature over the composite envelope
    pub signature: SignatureBytes,
    /// Merkle root over the batch's leaf digests
    pub merkle_root: B256,
    /// Per-message inclusion proofs, index-aligned with the input batch
    pub proofs: Vec<MerkleProof>,
}
