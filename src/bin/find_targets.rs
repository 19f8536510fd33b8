//! Search for dice pools whose reach probability hits a target exactly.
//!
//! Enumerates pools of 1..=max-dice dice from the catalog, then scans tiers
//! in ascending size, stopping at the first size with any exact match.
//!
//! Output: one console block per match, plus optional CSV/JSON export.

use std::path::Path;
use std::time::Instant;

use dicetarget::constants::{DIE_CATALOG, MAX_TOTAL_DICE};
use dicetarget::report::{print_matches, write_matches_csv, write_matches_json};
use dicetarget::search::find_matching_pools;
use dicetarget::types::TargetProbability;

struct Args {
    probability: TargetProbability,
    max_dice: usize,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut probability = TargetProbability::new(2, 9).unwrap();
    let mut max_dice = MAX_TOTAL_DICE;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--probability" => {
                i += 1;
                if i < args.len() {
                    probability = TargetProbability::parse(&args[i]).unwrap_or_else(|| {
                        eprintln!(
                            "Invalid --probability value: {} (expected p/q or a decimal in (0, 1])",
                            args[i]
                        );
                        std::process::exit(1);
                    });
                }
            }
            "--max-dice" => {
                i += 1;
                if i < args.len() {
                    max_dice = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --max-dice value: {}", args[i]);
                        std::process::exit(1);
                    });
                    if max_dice == 0 || max_dice > MAX_TOTAL_DICE {
                        eprintln!(
                            "--max-dice must be in 1..={} to keep the exact arithmetic in range",
                            MAX_TOTAL_DICE
                        );
                        std::process::exit(1);
                    }
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Usage: find_targets [--probability P] [--max-dice N] [--output DIR]");
                println!();
                println!("Find dice pools with an exact-probability target roll.");
                println!("  --probability P  Target probability as p/q or decimal (default: 2/9)");
                println!(
                    "  --max-dice N     Largest pool size to scan (default: {})",
                    MAX_TOTAL_DICE
                );
                println!("  --output DIR     Write matches.csv and matches.json to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        probability,
        max_dice,
        output,
    }
}

fn main() {
    let args = parse_args();

    // Configure rayon
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .unwrap();

    let catalog = DIE_CATALOG
        .iter()
        .map(|d| format!("d{}", d))
        .collect::<Vec<_>>()
        .join(", ");

    println!("═══════════════════════════════════════════════════════════════════");
    println!("  Dice Pool Search: Exact Target Probability");
    println!("═══════════════════════════════════════════════════════════════════");
    println!("  Catalog:     {}", catalog);
    println!("  Probability: {}", args.probability);
    println!("  Max dice:    {}", args.max_dice);
    println!("  Threads:     {}", num_threads);
    println!();

    let t0 = Instant::now();
    let outcome = find_matching_pools(args.probability, args.max_dice);
    println!(
        "\nScanned {} of {} pools in {:.2}s",
        outcome.pools_evaluated,
        outcome.pools_enumerated,
        t0.elapsed().as_secs_f64()
    );

    print_matches(&outcome.matches);

    if let Some(ref output_dir) = args.output {
        std::fs::create_dir_all(output_dir).unwrap_or_else(|e| {
            eprintln!("Failed to create output directory: {}", e);
            std::process::exit(1);
        });

        let csv_path = Path::new(output_dir).join("matches.csv");
        write_matches_csv(&csv_path, &outcome.matches).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {}", csv_path.display(), e);
            std::process::exit(1);
        });
        println!("  Wrote {}", csv_path.display());

        let json_path = Path::new(output_dir).join("matches.json");
        write_matches_json(&json_path, &outcome.matches).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {}", json_path.display(), e);
            std::process::exit(1);
        });
        println!("  Wrote {}", json_path.display());
    }
}
