//! Benchmarks the weighted random container by timing repeated draws
mod weighted;

use clap::Parser;
use std::time::Instant;
use weighted::WeightedRandom;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[arg(short, long, default_value_t = 1_000_000)]
    draws: usize,
    #[arg(short = 'w', long, default_value_t = 1_000)]
    distinct_weights: i64,
    #[arg(short, long, default_value_t = 10)]
    items_per_weight: usize,
    #[arg(short, long, default_value_t = 10)]
    episodes: usize,
}

fn run_benchmark(distinct_weights: i64, items_per_weight: usize, draws: usize) -> f64 {
    let mut random = WeightedRandom::from_seed(0);
    let mut next_id: u64 = 0;
    for weight in 1..=distinct_weights {
        for _ in 0..items_per_weight {
            random
                .insert(next_id, weight)
                .expect("Couldn't populate the container");
            next_id += 1;
        }
    }
    let start = Instant::now();
    for _ in 0..draws {
        random.sample().expect("Drew from an empty container");
    }
    let elapsed = start.elapsed();
    let draws_per_second = draws as f64 / elapsed.as_secs_f64();
    println!(
        "{} draws in {:.2} seconds ({:.2} draws per second)",
        draws,
        &elapsed.as_secs_f64(),
        draws_per_second
    );
    elapsed.as_secs_f64()
}

fn main() {
    let args = Args::parse();
    println!(
        "===\nDraws: {}, Episodes: {}, Distinct weights: {}, Items per weight: {}",
        args.draws, args.episodes, args.distinct_weights, args.items_per_weight
    );
    println!("---");
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let durations: Vec<f64> = (0..args.episodes)
        .map(|_| run_benchmark(args.distinct_weights, args.items_per_weight, args.draws))
        .collect();
    let total: f64 = durations.iter().sum();
    println!("---");
    println!(
        "Average: {:.2} seconds ({:.2} draws per second)",
        total / durations.len() as f64,
        args.draws as f64 * durations.len() as f64 / total
    );
}
