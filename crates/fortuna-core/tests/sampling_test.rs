//! Scripted-generator tests for the collection helpers and the facade.

use fortuna_core::collections::{self, SamplingStrategy};
use fortuna_core::numeric;
use fortuna_core::{RandomError, RandomUtility, StdRandom};
use fortuna_test_support::{MockRng, SequenceRng};

fn one_to_ten() -> Vec<i32> {
    (1..=10).collect()
}

#[test]
fn test_sample_three_of_ten_gives_distinct_members() {
    let items = one_to_ten();
    let mut utility = RandomUtility::seeded(1);

    for sample in [
        utility.sample_small_k(&items, 3).unwrap(),
        utility.sample_large_k(&items, 3).unwrap(),
    ] {
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().all(|v| items.contains(v)));
        assert_ne!(sample[0], sample[1]);
        assert_ne!(sample[0], sample[2]);
        assert_ne!(sample[1], sample[2]);
    }
}

#[test]
fn test_different_seeds_give_different_subsets() {
    let items = one_to_ten();
    let samples: Vec<Vec<i32>> = (0..8)
        .map(|seed| {
            let mut sample = RandomUtility::seeded(seed).sample_small_k(&items, 3).unwrap();
            sample.sort_unstable();
            sample
        })
        .collect();

    assert!(
        samples.iter().any(|s| *s != samples[0]),
        "eight seeds produced the same subset"
    );
}

#[test]
fn test_small_k_returns_elements_in_draw_order() {
    let mut rng = SequenceRng::new(vec![9, 0, 9, 4]);
    let sample = collections::sample_small_k(&one_to_ten(), 3, &mut rng).unwrap();
    assert_eq!(sample, vec![10, 1, 5]);
    assert_eq!(rng.draws(), 4);
}

#[test]
fn test_large_k_draws_exactly_k_times() {
    let mut rng = SequenceRng::new(vec![3, 3, 3, 3]);
    let sample = collections::sample_large_k(&one_to_ten(), 4, &mut rng).unwrap();
    // Each pick at position 3 is refilled by the last remaining value.
    assert_eq!(sample, vec![4, 10, 9, 8]);
    assert_eq!(rng.draws(), 4);
}

#[test]
fn test_large_k_full_length_with_mock_rng() {
    let mut rng = MockRng;
    let sample = collections::sample_large_k(&one_to_ten(), 10, &mut rng).unwrap();
    assert_eq!(sample, vec![1, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
}

#[test]
fn test_oversized_k_leaves_source_untouched() {
    let items = one_to_ten();
    let mut rng = SequenceRng::new(vec![]);
    for strategy in [SamplingStrategy::SmallK, SamplingStrategy::LargeK] {
        let err = collections::sample(&items, 11, strategy, &mut rng).unwrap_err();
        assert!(matches!(err, RandomError::InvalidArgument(ref msg) if msg.contains("k must not exceed")));
    }
    assert_eq!(rng.draws(), 0);
    assert_eq!(items, one_to_ten());
}

#[test]
fn test_get_random_uses_drawn_index() {
    let items = ["north", "east", "south", "west"];
    let mut rng = SequenceRng::new(vec![2]);
    assert_eq!(*collections::get_random(&items, &mut rng).unwrap(), "south");
}

#[test]
fn test_get_random_single_and_empty() {
    let mut utility = RandomUtility::new(MockRng);
    assert_eq!(*utility.get_random(&[42]).unwrap(), 42);

    let empty: Vec<i32> = Vec::new();
    assert_eq!(
        utility.get_random(&empty),
        Err(RandomError::EmptyCollection)
    );
}

#[test]
fn test_shuffle_with_mock_rng_rotates() {
    // Always swapping with position 0 moves the first element to the back.
    let mut items = vec![1, 2, 3, 4];
    collections::shuffle(&mut items, &mut MockRng);
    assert_eq!(items, vec![2, 3, 4, 1]);
}

#[test]
fn test_numeric_draws_with_scripted_values() {
    let mut rng = SequenceRng::new(vec![0, 1, 49, 50]).with_floats(vec![0.5, 0.75]);
    assert!(numeric::coin(&mut rng));
    assert!(!numeric::coin(&mut rng));
    // Offsets 49 and 50 roll 50 and 51.
    assert!(numeric::percent_chance(&mut rng, 50));
    assert!(!numeric::percent_chance(&mut rng, 50));

    let double = numeric::next_double_between(&mut rng, 0.0, 10.0).unwrap();
    assert!((double - 5.0).abs() < f64::EPSILON);
    let float = numeric::next_float(&mut rng);
    assert!((float - 0.75).abs() < f32::EPSILON);
}

#[test]
fn test_mock_rng_yields_lower_bounds() {
    let mut utility = RandomUtility::new(MockRng);
    assert_eq!(utility.next_int(-3, 3), Ok(-3));
    assert_eq!(utility.next_int_below(7), Ok(0));
    assert!(utility.coin());
    assert!(utility.percent_chance(1));
    assert!(!utility.percent_chance(0));
    assert!(utility.next_double().abs() < f64::EPSILON);
}

#[test]
fn test_recommended_strategy_sample() {
    let items: Vec<u16> = (0..100).collect();
    let mut rng = StdRandom::seeded(55);
    for k in [0, 10, 50, 51, 99, 100] {
        let strategy = SamplingStrategy::recommended(k, items.len());
        let sample = collections::sample(&items, k, strategy, &mut rng).unwrap();
        assert_eq!(sample.len(), k);
    }
}
