//! Configured Dispenser
//!
//! This example loads denominations from configuration instead of code.
//!
//! Key concepts:
//! - Denominations as runtime configuration
//! - JSON and binary encodings of the same config
//! - Every invalid entry reported in one pass
//!
//! Run with: cargo run --example configured_dispenser

use dispenser::config::DispenserConfig;
use dispenser::denominations;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ATM_CONFIG: &str = r#"{
    "version": 1,
    "currency": "INR",
    "denominations": [2000, 500, 200, 100, 50]
}"#;

const BROKEN_CONFIG: &str = r#"{
    "version": 1,
    "denominations": [100, 0, 500, 500]
}"#;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dispenser=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Configured Dispenser Example ===\n");

    // Example 1: Load from JSON
    println!("Example 1: Dispenser from JSON config");
    let config = match DispenserConfig::from_json(ATM_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            println!("  Failed to load config: {err}");
            return;
        }
    };
    let atm = match config.clone().into_dispenser() {
        Ok(atm) => atm,
        Err(err) => {
            println!("  Failed to build dispenser: {err}");
            return;
        }
    };
    println!("  Denominations: {}", atm.denominations());
    println!("  Withdrawing 3750 (impossible with 2000/500/100 alone):");
    println!("{}\n", atm.dispense(3750).report());

    // Example 2: Binary encoding
    println!("Example 2: Binary encoding");
    match config.to_bytes() {
        Ok(bytes) => println!("  Encoded config in {} bytes\n", bytes.len()),
        Err(err) => println!("  Encoding failed: {err}\n"),
    }

    // Example 3: Every violation at once
    println!("Example 3: Invalid config");
    if let Err(err) = DispenserConfig::from_json(BROKEN_CONFIG) {
        println!("  {err}\n");
    }

    // Example 4: Inline set via macro
    println!("Example 4: denominations! macro");
    match denominations![50, 20, 10] {
        Ok(set) => println!("  Built set {set}"),
        Err(err) => println!("  {err}"),
    }

    println!("\n=== Example Complete ===");
}
