// Leaf derivation: one typed-data message to one 32-byte digest

use alloy_dyn_abi::TypedData;
use alloy_primitives::B256;

use crate::error::CompositeError;

/// Hashes one EIP-712 typed-data message into its leaf digest.
///
/// The leaf is the message's standard signing hash,
/// `keccak256("\x19\x01" || domainSeparator || hashStruct(message))`, computed
/// by the typed-data encoder under the message's own domain. The encoder only
/// walks types reachable from `primaryType`, so an `EIP712Domain` entry in the
/// message's type map is never folded into the struct hash a second time; the
/// composite layer adds no separator of its own at the leaf level.
///
/// Deterministic: the same message always yields the same leaf.
///
/// # Errors
///
/// Returns [`CompositeError::MessageHash`] when the encoder rejects the
/// message, e.g. a `primaryType` missing from the type map or a payload field
/// that does not coerce to its declared type.
pub fn hash_message(message: &TypedData) -> Result<B256, CompositeError> {
    message
        .eip712_signing_hash()
        .map_err(|e| CompositeError::MessageHash {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;
    use serde_json::json;

    fn mail_message() -> TypedData {
        // The canonical eth_signTypedData example message.
        serde_json::from_value(json!({
            "types": {
                "EIP712Domain": [
                    { "name": "name", "type": "string" },
                    { "name": "version", "type": "string" },
                    { "name": "chainId", "type": "uint256" },
                    { "name": "verifyingContract", "type": "address" }
                ],
                "Person": [
                    { "name": "name", "type": "string" },
                    { "name": "wallet", "type": "address" }
                ],
                "Mail": [
                    { "name": "from", "type": "Person" },
                    { "name": "to", "type": "Person" },
                    { "name": "contents", "type": "string" }
                ]
            },
            "primaryType": "Mail",
            "domain": {
                "name": "Ether Mail",
                "version": "1",
                "chainId": 1,
                "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"
            },
            "message": {
                "from": {
                    "name": "Cow",
                    "wallet": "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826"
                },
                "to": {
                    "name": "Bob",
                    "wallet": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB"
                },
                "contents": "Hello, Bob!"
            }
        }))
        .expect("example message should deserialize")
    }

    #[test]
    fn test_known_vector_mail_message() {
        let leaf = hash_message(&mail_message()).expect("hashing should succeed");
        assert_eq!(
            leaf,
            b256!("be609aee343fb3c4b28e1df9e632fca64fcfaede20f02e86244efddf30957bd2")
        );
    }

    #[test]
    fn test_hash_is_deterministic() {
        let message = mail_message();
        assert_eq!(
            hash_message(&message).unwrap(),
            hash_message(&message).unwrap()
        );
    }

    #[test]
    fn test_distinct_messages_yield_distinct_leaves() {
        let first = mail_message();
        let mut altered = mail_message();
        altered.message["contents"] = json!("Goodbye, Bob!");
        assert_ne!(
            hash_message(&first).unwrap(),
            hash_message(&altered).unwrap()
        );
    }

    #[test]
    fn test_unknown_primary_type_is_rejected() {
        let mut message = mail_message();
        message.primary_type = "Missing".to_string();
        let result = hash_message(&message);
        assert!(matches!(result, Err(CompositeError::MessageHash { .. })));
    }
}
