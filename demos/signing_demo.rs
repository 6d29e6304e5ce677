//! # Signing Example
//!
//! Demonstrates signing, the textual signature form and verification
//! against any public key representation.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example signing_demo
//! ```

use ecrypto::{sign, signature_from_string, verify, KeyPair};

fn main() {
    println!("=== ecrypto: Signing Example ===\n");

    // Step 1: Generate a signing key pair
    println!("Step 1: Generating key pair...");
    let keypair = KeyPair::generate().expect("Failed to generate key pair");
    println!("  Public key: {}", keypair.public_key().to_hex());
    println!();

    // Step 2: Sign a message
    println!("Step 2: Signing a message...");
    let message = b"This message was sent by me and has not been tampered with.";
    println!("  Message: \"{}\"", String::from_utf8_lossy(message));

    let signature = sign(&keypair, message).expect("Failed to sign");
    println!("  Signature length: {} bytes", signature.len());
    println!("  Recovery id: {:?}", signature.recovery_id());
    println!();

    // Step 3: Text form
    println!("Step 3: Text form (URL-safe base64, unpadded)...");
    let text = signature.to_string();
    println!("  {}", text);
    let parsed = signature_from_string(&text).expect("Failed to parse signature");
    if parsed == signature {
        println!("  [OK] Parsed signature matches");
    } else {
        println!("  [FAILED] Parsed signature differs!");
    }
    println!();

    // Step 4: Verify with the serialized public key
    println!("Step 4: Verifying...");
    let public_bytes = keypair.marshal_public_key();
    match verify(&public_bytes, message, &parsed) {
        Ok(()) => println!("  [OK] Signature is valid!"),
        Err(e) => println!("  [FAILED] Signature verification failed: {}", e),
    }
    println!();

    // Step 5: Forgery detection
    println!("Step 5: Forgery detection...");
    let tampered_message = b"This message was MODIFIED by an attacker!";
    match verify(&keypair, tampered_message, &signature) {
        Ok(()) => println!("  [FAILED] Tampered message was accepted!"),
        Err(_) => println!("  [OK] Tampered message detected - signature invalid!"),
    }

    let wrong_keypair = KeyPair::generate().expect("Failed to generate key pair");
    match verify(&wrong_keypair, message, &signature) {
        Ok(()) => println!("  [FAILED] Wrong public key was accepted!"),
        Err(_) => println!("  [OK] Wrong public key detected - signature invalid!"),
    }
    println!();

    // Step 6: Signatures are deterministic
    println!("Step 6: Signing multiple messages...");
    let messages = ["Transfer approved", "Key rotated", "Session closed"];
    for (i, msg) in messages.iter().enumerate() {
        let first = sign(&keypair, msg.as_bytes()).expect("Failed to sign");
        let second = sign(&keypair, msg.as_bytes()).expect("Failed to sign");
        let valid = verify(&keypair, msg.as_bytes(), &first).is_ok();
        println!("  Message {}: \"{}\"", i + 1, msg);
        println!("    Signature: {}...", &first.to_string()[..16]);
        println!("    Deterministic: {}", if first == second { "[OK]" } else { "[FAILED]" });
        println!("    Valid: {}", if valid { "[OK]" } else { "[FAILED]" });
    }
    println!();

    println!("=== Example Complete ===");
}
