//! Samples a weighted population in a loop and reports empirical percentages
//! against the statistical ones.
mod weighted;

use clap::Parser;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use weighted::WeightedRandom;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file describing the population to draw from
    #[arg()]
    config_file: Option<String>,

    /// Number of draws to tally
    #[arg(short, long, default_value_t = 1_000_000)]
    draws: usize,

    /// Seed for the random generator, for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Deserialize)]
struct PopulationSettings {
    entries: Vec<EntrySettings>,
}

#[derive(Debug, Deserialize, Clone)]
struct EntrySettings {
    name: String,
    weight: i64,
}

fn default_population() -> Vec<EntrySettings> {
    [("apple", 50), ("banana", 20), ("cherry", 15), ("durian", 15)]
        .into_iter()
        .map(|(name, weight)| EntrySettings {
            name: name.to_string(),
            weight,
        })
        .collect()
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let entries = match &args.config_file {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("Couldn't read population file");
            let settings: PopulationSettings =
                serde_json::from_str(&raw).expect("Couldn't parse population file");
            settings.entries
        }
        None => default_population(),
    };

    let mut random = match args.seed {
        Some(seed) => WeightedRandom::from_seed(seed),
        None => WeightedRandom::new(),
    };
    let (names, weights): (Vec<String>, Vec<i64>) = entries
        .iter()
        .map(|entry| (entry.name.clone(), entry.weight))
        .unzip();
    random
        .insert_batch(names, &weights)
        .expect("Couldn't populate the container");
    log::info!(
        "Drawing {} samples from {} items (total weight {})",
        args.draws,
        random.len(),
        random.total_weight()
    );

    let mut tallies: HashMap<String, usize> = HashMap::new();
    for _ in 0..args.draws {
        let name = random.sample().expect("Drew from an empty container");
        *tallies.entry(name.clone()).or_insert(0) += 1;
    }

    println!(
        "{:<12} {:>10} {:>10} {:>10}",
        "item", "draws", "actual", "expected"
    );
    for entry in &entries {
        let count = tallies.get(&entry.name).copied().unwrap_or(0);
        let expected = random
            .percentage_of(&entry.name)
            .expect("Item missing from the container");
        println!(
            "{:<12} {:>10} {:>9.2}% {:>9.2}%",
            entry.name,
            count,
            100.0 * count as f64 / args.draws as f64,
            100.0 * expected
        );
    }
}
