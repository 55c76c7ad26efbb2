use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::PieceType;

/// Upcoming piece types. Whenever fewer than 3 remain, a freshly shuffled
/// permutation of all 8 types is appended, bounding how far apart repeats of
/// the same type can land.
#[derive(Clone, Debug, Default)]
pub struct Bag {
    queue: VecDeque<PieceType>,
}

impl Bag {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn next(&mut self, rng: &mut impl Rng) -> PieceType {
        if self.queue.len() < 3 {
            let mut bag = PieceType::ALL;
            bag.shuffle(rng);
            self.queue.extend(bag);
        }
        self.queue.pop_front().unwrap_or(PieceType::I)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
