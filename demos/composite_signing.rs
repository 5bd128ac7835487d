//! Composite signing walkthrough
//!
//! Signs a batch of four typed-data messages with one signature, then
//! verifies each message independently against that signature using only the
//! message, its Merkle proof, the root, and the signer's address.
//!
//! Run with: `cargo run --example composite_signing`

use composite_eip712::{
    TypedData, sign_composite, verifier::address_from_key, verify_composite_signature,
};
use k256::ecdsa::SigningKey;
use serde_json::json;

fn mail_message() -> TypedData {
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
    .expect("message should deserialize")
}

fn transfer_message(wei: &str) -> TypedData {
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
            "amount": wei,
            "recipient": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB"
        }
    }))
    .expect("message should deserialize")
}

fn main() {
    println!("=== Composite Signing Example ===\n");

    let key = SigningKey::random(&mut rand::thread_rng());
    let signer = address_from_key(key.verifying_key());
    let chain_id = 1;

    let messages = vec![
        mail_message(),
        transfer_message("1000000000000000000"),
        transfer_message("2000000000000000000"),
        transfer_message("3000000000000000000"),
    ];

    println!("Signer:    {}", signer);
    println!("Messages:  {}\n", messages.len());

    let signed = sign_composite(chain_id, &key, &messages).expect("Signing failed");

    println!("Signature: {}", signed.signature);
    println!("Root:      {}", signed.merkle_root);
    for (i, proof) in signed.proofs.iter().enumerate() {
        println!("Proof {}:   {} sibling digest(s)", i, proof.len());
    }
    println!();

    for (i, (message, proof)) in messages.iter().zip(&signed.proofs).enumerate() {
        let ok = verify_composite_signature(
            chain_id,
            &signed.signature,
            signed.merkle_root,
            proof,
            message,
            signer,
        )
        .expect("Verification failed");
        assert!(ok, "message {} did not verify", i);
        println!("✓ message {} verified against the composite signature", i);
    }

    println!("\nAll messages recovered");
}
