//! # Encryption Example
//!
//! Demonstrates public-key encryption to a recipient and decryption with
//! any representation of the recipient's private key.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example encryption_demo
//! ```

use ecrypto::{decrypt, encrypt, unmarshal_public_key, KeyPair};

fn main() {
    println!("=== ecrypto: Encryption Example ===\n");

    // Step 1: Bob creates a key pair and publishes his public key
    println!("Step 1: Bob generates a key pair...");
    let bob = KeyPair::generate().expect("Failed to generate key pair");
    let published = bob.marshal_public_key();
    println!("  Bob's public key: {}", hex::encode(published));
    println!();

    // Step 2: Alice encrypts to the published bytes
    println!("Step 2: Alice encrypts a message...");
    let message = b"Meet me at the usual place at 5pm";
    println!("  Message: \"{}\"", String::from_utf8_lossy(message));

    let ciphertext = encrypt(&published, message).expect("Failed to encrypt");
    println!("  Ciphertext: {} bytes", ciphertext.len());
    println!("  Overhead:   {} bytes", ciphertext.len() - message.len());
    println!();

    // Step 3: Bob decrypts with each private key representation
    println!("Step 3: Bob decrypts...");
    let private_bytes = bob.marshal_private_key().expect("Bob holds his private key");

    let results = [
        ("KeyPair", decrypt(&bob, &ciphertext)),
        ("PrivateKey", decrypt(bob.private_key().expect("present"), &ciphertext)),
        ("raw bytes", decrypt(&*private_bytes, &ciphertext)),
    ];
    for (label, result) in &results {
        match result {
            Ok(plaintext) if plaintext == message => println!("  [OK] {} decrypts", label),
            Ok(_) => println!("  [FAILED] {} produced the wrong plaintext!", label),
            Err(e) => println!("  [FAILED] {}: {}", label, e),
        }
    }
    println!();

    // Step 4: Encryption is randomized
    println!("Step 4: Same message, same key...");
    let public = unmarshal_public_key(&published).expect("Failed to unmarshal");
    let again = encrypt(&public, message).expect("Failed to encrypt");
    if again != ciphertext {
        println!("  [OK] Ciphertexts differ");
    } else {
        println!("  [FAILED] Ciphertexts are identical!");
    }
    println!();

    // Step 5: Eve cannot decrypt, and tampering is detected
    println!("Step 5: Wrong key and tampering...");
    let eve = KeyPair::generate().expect("Failed to generate key pair");
    match decrypt(&eve, &ciphertext) {
        Ok(_) => println!("  [FAILED] Eve decrypted the message!"),
        Err(e) => println!("  [OK] Eve rejected: {}", e),
    }

    let mut tampered = ciphertext.clone();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x01;
    match decrypt(&bob, &tampered) {
        Ok(_) => println!("  [FAILED] Tampered ciphertext was accepted!"),
        Err(e) => println!("  [OK] Tampering detected: {}", e),
    }
    println!();

    println!("=== Example Complete ===");
}
