//! Seedable random choice of words.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

/// Uniform random choice over word lists.
///
/// The same seed always yields the same sequence of picks, which keeps
/// automated runs reproducible.
#[derive(Debug, Clone)]
pub struct WordPicker {
    rng: ChaCha8Rng,
}

impl WordPicker {
    /// Creates a picker from `seed`, or from a fresh random seed.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        info!(seed, "Word picker seeded");
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Chooses one element, or `None` if `items` is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_picks() {
        let items = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let mut first = WordPicker::new(Some(7));
        let mut second = WordPicker::new(Some(7));
        for _ in 0..20 {
            assert_eq!(first.choose(&items), second.choose(&items));
        }
    }

    #[test]
    fn test_choose_empty() {
        let mut picker = WordPicker::new(Some(1));
        let empty: [&str; 0] = [];
        assert!(picker.choose(&empty).is_none());
    }
}
