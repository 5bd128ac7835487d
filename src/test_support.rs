// Shared fixtures for unit tests

use alloy_dyn_abi::TypedData;
use k256::ecdsa::SigningKey;
use serde_json::json;

/// Deterministic signing key; `tag` must be nonzero.
pub(crate) fn test_key(tag: u8) -> SigningKey {
    let mut bytes = [0u8; 32];
    bytes[31] = tag;
    SigningKey::from_slice(&bytes).expect("test scalar is a valid nonzero key")
}

/// A `Transfer` typed-data message whose payload varies with `amount`.
pub(crate) fn transfer_message(amount: u64) -> TypedData {
    serde_json::from_value(json!({
        "types": {
            "EIP712Domain": [
                { "name": "name", "type": "string" },
                { "name": "version", "type": "string" },
                { "name": "chainId", "type": "uint256" },
                { "name": "verifyingContract", "type": "address" }
            ],
            "Transfer": [
                { "name": "amount", "type": "uint256" },
                { "name": "recipient", "type": "address" }
            ]
        },
        "primaryType": "Transfer",
        "domain": {
            "name": "Ether Mail",
            "version": "1",
            "chainId": 1,
            "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"
        },
        "message": {
            "amount": amount.to_string(),
            "recipient": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB"
        }
    }))
    .expect("fixture message should deserialize")
}
