//! Example: Analyze line-of-sight clearance over a terrain CSV.
//!
//! Usage: cargo run --example analyze_path -- <profile.csv> [freq_ghz] [tx_height_m] [rx_height_m]

use linkplan_clearance::{compute, render_summary, LinkParams, Profile};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <profile.csv> [freq_ghz] [tx_height_m] [rx_height_m]", args[0]);
        eprintln!("Example: {} path.csv 5.8 20 20", args[0]);
        std::process::exit(1);
    }

    let text = fs::read_to_string(&args[1]).expect("Failed to read profile CSV");

    let mut params = LinkParams::default();
    if let Some(f) = args.get(2) {
        params.frequency_ghz = f.parse().expect("Invalid frequency");
    }
    if let Some(h) = args.get(3) {
        params.tx_height_m = h.parse().expect("Invalid TX height");
    }
    if let Some(h) = args.get(4) {
        params.rx_height_m = h.parse().expect("Invalid RX height");
    }

    let profile = match Profile::parse(&text) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if profile.skipped_rows() > 0 {
        eprintln!("Note: skipped {} malformed rows", profile.skipped_rows());
    }

    match compute(&profile, &params) {
        Ok(result) => {
            print!("{}", render_summary(&result, &params));
            let obstructions = result.obstruction_points();
            if !obstructions.is_empty() {
                println!("Obstructions:");
                for (distance, elevation) in obstructions {
                    println!("  {:.1} m from TX at {:.1} m elevation", distance, elevation);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
