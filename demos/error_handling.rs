//! Error handling example
//!
//! This example demonstrates the error scenarios of composite signing and
//! verification, and the distinction between structural errors and ordinary
//! negative verification results.
//!
//! Run with: `cargo run --example error_handling`

use composite_eip712::{
    B256, CompositeError, SignatureBytes, TypedData, aggregator, sign_composite,
    verifier::{address_from_key, recover_composite_signer, verify_composite_signature},
};
use k256::ecdsa::SigningKey;
use serde_json::json;

fn main() {
    println!("=== Error Handling Example ===\n");

    // Scenario 1: signing an empty batch
    println!("1. Testing empty message list error...");
    test_empty_message_list();
    println!();

    // Scenario 2: requesting a proof for an out-of-range index
    println!("2. Testing out-of-range leaf index error...");
    test_leaf_index_out_of_range();
    println!();

    // Scenario 3: malformed signature encoding
    println!("3. Testing malformed signature error...");
    test_malformed_signature();
    println!();

    // Scenario 4: a tampered proof is a negative result, not an error
    println!("4. Testing tampered proof outcome...");
    test_tampered_proof();
    println!();

    println!("=== All Error Scenarios Tested ===");
}

fn demo_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

fn demo_message(amount: &str) -> TypedData {
    serde_json::from_value(json!({
        "types": {
            "EIP712Domain": [
                { "name": "name", "type": "string" },
                { "name": "version", "type": "string" },
                { "name": "chainId", "type": "uint256" }
            ],
            "Transfer": [
                { "name": "amount", "type": "uint256" },
                { "name": "recipient", "type": "address" }
            ]
        },
        "primaryType": "Transfer",
        "domain": { "name": "Ether Mail", "version": "1", "chainId": 1 },
        "message": {
            "amount": amount,
            "recipient": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB"
        }
    }))
    .expect("message should deserialize")
}

/// Scenario 1: empty message list
fn test_empty_message_list() {
    match sign_composite(1, &demo_key(), &[]) {
        Ok(_) => println!("   ✗ Expected error but got success"),
        Err(CompositeError::EmptyMessageList) => {
            println!("   ✓ Correctly rejected empty message list");
            println!("     Error: at least one message required");
        }
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }
}

/// Scenario 2: proof requested for a leaf index outside the batch
fn test_leaf_index_out_of_range() {
    let leaves = vec![B256::ZERO, B256::repeat_byte(1)];

    match aggregator::build_proof(&leaves, 5) {
        Ok(_) => println!("   ✗ Expected error but got success"),
        Err(CompositeError::LeafIndexOutOfRange { index, leaf_count }) => {
            println!(
                "   ✓ Correctly rejected index {} for {} leaves",
                index, leaf_count
            );
        }
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }
}

/// Scenario 3: malformed signature encoding is an error, never `false`
fn test_malformed_signature() {
    let key = demo_key();
    let messages = vec![demo_message("1"), demo_message("2")];
    let signed = sign_composite(1, &key, &messages).expect("Signing failed");

    // Corrupt the recovery byte.
    let mut bad = *signed.signature.as_bytes();
    bad[64] = 99;

    let result = verify_composite_signature(
        1,
        &SignatureBytes(bad),
        signed.merkle_root,
        &signed.proofs[0],
        &messages[0],
        address_from_key(key.verifying_key()),
    );
    match result {
        Err(CompositeError::MalformedSignature { message }) => {
            println!("   ✓ Correctly rejected malformed signature");
            println!("     Error: {}", message);
        }
        other => println!("   ✗ Unexpected result: {:?}", other),
    }
}

/// Scenario 4: a tampered proof yields `None`, not an error
fn test_tampered_proof() {
    let key = demo_key();
    let messages = vec![demo_message("1"), demo_message("2")];
    let signed = sign_composite(1, &key, &messages).expect("Signing failed");

    let mut proof = signed.proofs[0].clone();
    let mut element = proof[0].0;
    element[0] ^= 0x01;
    proof[0] = B256::from(element);

    let result = recover_composite_signer(
        1,
        &signed.signature,
        signed.merkle_root,
        &proof,
        &messages[0],
    );
    match result {
        Ok(None) => {
            println!("   ✓ Tampered proof produced a negative result, not an error");
        }
        other => println!("   ✗ Unexpected result: {:?}", other),
    }
}
