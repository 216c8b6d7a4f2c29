use std::collections::HashMap;
use test_env_log::test;
use weighted_random_rs::weighted::WeightedRandom;

fn tally(random: &mut WeightedRandom<&'static str>, draws: usize) -> HashMap<&'static str, usize> {
    let mut tallies = HashMap::new();
    for _ in 0..draws {
        *tallies.entry(*random.sample().unwrap()).or_insert(0) += 1;
    }
    tallies
}

#[test]
fn test_million_draws_match_statistical_percentages() {
    let mut random = WeightedRandom::from_seed(2017);
    random
        .insert_batch(
            vec!["apple", "banana", "cherry", "durian"],
            &[50, 20, 15, 15],
        )
        .unwrap();
    let draws = 1_000_000;
    let tallies = tally(&mut random, draws);
    for item in ["apple", "banana", "cherry", "durian"] {
        let expected = random.percentage_of(&item).unwrap();
        let frequency = *tallies.get(item).unwrap_or(&0) as f64 / draws as f64;
        assert!(
            (frequency - expected).abs() < 0.01,
            "{} drawn at {} (expected {})",
            item,
            frequency,
            expected
        );
    }
}

#[test]
fn test_multi_item_bucket_gets_share_per_item() {
    // Two items share the largest weight; the bucket's share must be the
    // weight counted once per item, not once per bucket.
    let mut random = WeightedRandom::from_seed(404);
    random
        .insert_batch(vec!["a", "b", "c"], &[10, 10, 5])
        .unwrap();
    let draws = 500_000;
    let tallies = tally(&mut random, draws);
    for (item, expected) in [("a", 0.4), ("b", 0.4), ("c", 0.2)] {
        let frequency = *tallies.get(item).unwrap_or(&0) as f64 / draws as f64;
        assert!(
            (frequency - expected).abs() < 0.01,
            "{} drawn at {} (expected {})",
            item,
            frequency,
            expected
        );
    }
}
