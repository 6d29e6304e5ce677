//! # Key Pair Example
//!
//! Demonstrates generating a key pair, marshalling both halves and
//! persisting the private key to disk.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example keypair_demo
//! ```

use ecrypto::{load_key_pair, unmarshal_public_key, KeyPair};

fn main() {
    println!("=== ecrypto: Key Pair Example ===\n");

    // Step 1: Generate a key pair
    println!("Step 1: Generating a secp256k1 key pair...");
    let keypair = KeyPair::generate().expect("Failed to generate key pair");
    println!("  Public key (hex): {}", keypair.public_key().to_hex());
    println!();

    // Step 2: Marshal both halves
    println!("Step 2: Marshalling keys...");
    let private_bytes = keypair
        .marshal_private_key()
        .expect("Generated pairs always hold a private key");
    let public_bytes = keypair.marshal_public_key();
    println!("  Private key: {} bytes (never print these)", private_bytes.len());
    println!("  Public key:  {} bytes, prefix 0x{:02x}", public_bytes.len(), public_bytes[0]);
    println!();

    // Step 3: Rebuild from the marshalled forms
    println!("Step 3: Unmarshalling...");
    let restored = KeyPair::unmarshal_private_key(&private_bytes[..])
        .expect("Failed to unmarshal private key");
    let public = unmarshal_public_key(&public_bytes).expect("Failed to unmarshal public key");

    if restored.public_key() == keypair.public_key() && &public == keypair.public_key() {
        println!("  [OK] Restored keys match the original");
    } else {
        println!("  [FAILED] Restored keys differ!");
    }
    println!();

    // Step 4: Persist to a file and load it back
    println!("Step 4: Saving to disk...");
    let path = std::env::temp_dir().join(format!("ecrypto-demo-{}.key", std::process::id()));
    keypair.save_to_file(&path).expect("Failed to save key pair");
    println!("  Saved to {}", path.display());

    let loaded = load_key_pair(&path).expect("Failed to load key pair");
    if loaded == keypair {
        println!("  [OK] Loaded key pair matches the original");
    } else {
        println!("  [FAILED] Loaded key pair differs!");
    }
    let _ = std::fs::remove_file(&path);
    println!();

    // Step 5: Rejecting malformed input
    println!("Step 5: Malformed input...");
    match unmarshal_public_key(&[0u8; 33]) {
        Ok(_) => println!("  [FAILED] All-zero public key was accepted!"),
        Err(e) => println!("  [OK] Rejected all-zero public key: {}", e),
    }
    match KeyPair::unmarshal_private_key(&[0u8; 32]) {
        Ok(_) => println!("  [FAILED] Zero scalar was accepted!"),
        Err(e) => println!("  [OK] Rejected zero scalar: {}", e),
    }
    println!();

    println!("=== Example Complete ===");
}
