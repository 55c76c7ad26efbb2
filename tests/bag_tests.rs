use std::collections::HashMap;

use gridfall::game::{Bag, PieceType};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sixteen_draws_contain_each_type_exactly_twice() {
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut bag = Bag::new();
        let mut counts: HashMap<PieceType, usize> = HashMap::new();
        for _ in 0..16 {
            *counts.entry(bag.next(&mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 8);
        for kind in PieceType::ALL {
            assert_eq!(counts[&kind], 2, "seed {seed}, kind {:?}", kind);
        }
    }
}

#[test]
fn refills_when_fewer_than_three_remain() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut bag = Bag::new();
    assert!(bag.is_empty());

    bag.next(&mut rng);
    assert_eq!(bag.len(), 7);

    // draw down to two remaining; the next draw tops the queue back up
    for _ in 0..5 {
        bag.next(&mut rng);
    }
    assert_eq!(bag.len(), 2);
    bag.next(&mut rng);
    assert_eq!(bag.len(), 9);
}

#[test]
fn same_seed_yields_same_sequence() {
    let mut a = Bag::new();
    let mut b = Bag::new();
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    for _ in 0..24 {
        assert_eq!(a.next(&mut rng_a), b.next(&mut rng_b));
    }
}
