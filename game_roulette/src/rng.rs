use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The single source of randomness of a game session.
///
/// All chamber reloads, shuffles and item drops draw from the same `GameRng`, which makes a
/// session fully reproducible from its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl GameRng {
    /// Creates a new `GameRng` from a fixed `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a new `GameRng` with a random seed. The drawn seed is still available through
    /// [`seed`] so the session can be replayed.
    ///
    /// [`seed`]: Self::seed
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed this `GameRng` was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a uniform value in the inclusive range `low..=high`.
    pub fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        if low >= high {
            return low;
        }

        self.rng.gen_range(low..=high)
    }

    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }
}
