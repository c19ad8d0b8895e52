//! Sharing one generator across threads through `SharedRng`.

use std::sync::Arc;
use std::thread;

use fortuna_core::collections;
use fortuna_core::rng::{self, with_shared};
use fortuna_core::{RandomError, StdRandom};
use fortuna_test_support::SequenceRng;

#[test]
fn test_threads_share_one_generator() {
    let shared = rng::share(StdRandom::seeded(21));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                (0..250)
                    .map(|_| with_shared(&shared, |rng| rng.next_u32_range(1, 6)))
                    .collect::<Result<Vec<u32>, RandomError>>()
            })
        })
        .collect();

    let mut total = 0;
    for handle in handles {
        let rolls = handle.join().unwrap().unwrap();
        assert!(rolls.iter().all(|r| (1..=6).contains(r)));
        total += rolls.len();
    }
    assert_eq!(total, 1_000);
}

#[test]
fn test_with_shared_runs_collection_helpers() {
    let shared = rng::share(SequenceRng::new(vec![1, 0]));
    let items = ['x', 'y', 'z'];

    let sample = with_shared(&shared, |rng| collections::sample_small_k(&items, 2, rng))
        .unwrap()
        .unwrap();
    assert_eq!(sample, vec!['y', 'x']);
}
