//! Example: Compute a link budget from command-line RF parameters.
//!
//! Usage: cargo run --example budget -- <freq_ghz> <distance_km> [tx_power_dbm]

use linkplan_budget::{compute, format_db, BudgetInputs};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <freq_ghz> <distance_km> [tx_power_dbm]", args[0]);
        eprintln!("Example: {} 5.8 10 20", args[0]);
        std::process::exit(1);
    }

    let mut inputs = BudgetInputs {
        frequency_ghz: args[1].parse().expect("Invalid frequency"),
        distance_km: args[2].parse().expect("Invalid distance"),
        ..BudgetInputs::default()
    };
    if let Some(p) = args.get(3) {
        inputs.tx_power_dbm = p.parse().expect("Invalid TX power");
    }

    match compute(&inputs) {
        Ok(result) => {
            println!("FSPL:        {} dB", format_db(result.fspl_db));
            println!("EIRP:        {} dBm", format_db(result.eirp_dbm));
            println!("RX power:    {} dBm", format_db(result.rx_power_dbm));
            println!("Fade margin: {} dB", format_db(result.fade_margin_db));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
