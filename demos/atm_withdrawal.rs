//! ATM Withdrawal
//!
//! This example walks two withdrawals through the classic 2000 / 500 / 100
//! dispenser.
//!
//! Key concepts:
//! - Greedy decomposition, largest note first
//! - A shortfall is a normal outcome, not an error
//! - Rendering is separate from the pure plan
//!
//! Run with: cargo run --example atm_withdrawal
//! Set RUST_LOG=dispenser=debug to see the structured log lines.

use dispenser::Dispenser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dispenser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== ATM Withdrawal Example ===\n");

    let atm = Dispenser::standard();
    println!("Loaded denominations: {}\n", atm.denominations());

    for amount in [3800, 3850] {
        println!("Processing withdrawal for ${amount}:");
        match atm.withdraw(amount) {
            Ok(plan) => {
                println!("{}", plan.report());
                println!(
                    "  Notes handed out: {}, total {}\n",
                    plan.note_count(),
                    plan.dispensed_total()
                );
            }
            Err(err) => println!("  Rejected: {err}\n"),
        }
    }

    println!("Processing withdrawal for $-100:");
    if let Err(err) = atm.withdraw(-100) {
        println!("  Rejected: {err}");
    }

    println!("\n=== Example Complete ===");
}
