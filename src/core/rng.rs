//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same shuffle
//! - **Replayable**: the seed is kept, so any game can be dealt again
//! - **Entropy seeding**: `from_entropy` for interactive new games
//!
//! ```
//! use set_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing deck shuffles.
///
/// Uses ChaCha8 for speed while keeping good statistical quality, so a
/// shuffled deck is a uniform permutation.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    ///
    /// The chosen seed is still recorded, so the game can be replayed
    /// from `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u8> {
        let mut ids: Vec<u8> = (0..81).collect();
        rng.shuffle(&mut ids);
        ids
    }

    #[test]
    fn test_same_seed_same_deck_order() {
        assert_eq!(shuffled(&mut GameRng::new(42)), shuffled(&mut GameRng::new(42)));
        assert_ne!(shuffled(&mut GameRng::new(1)), shuffled(&mut GameRng::new(2)));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut ids = shuffled(&mut GameRng::new(42));
        assert_ne!(ids, (0..81).collect::<Vec<u8>>());
        ids.sort_unstable();
        assert_eq!(ids, (0..81).collect::<Vec<u8>>());
    }

    #[test]
    fn test_from_entropy_replays_from_seed() {
        let mut rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        assert_eq!(shuffled(&mut rng), shuffled(&mut replay));
        assert_eq!(replay.seed(), rng.seed());
    }

    #[test]
    fn test_successive_shuffles_differ() {
        let mut rng = GameRng::new(7);
        assert_ne!(shuffled(&mut rng), shuffled(&mut rng));
    }
}
