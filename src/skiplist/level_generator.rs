use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

use crate::errs::Error;

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist for this level
    /// generator.
    fn total(&self) -> usize;
    /// Generate the number of levels a new node occupies, in the range
    /// `[1, total]`.
    ///
    /// This must never return `0` or a count that is `> self.total()`.
    fn random(&mut self) -> usize;
}

/// A level generator which will produce geometrically distributed numbers.
///
/// Starting from a single level, the generator keeps flipping a coin which
/// lands on "promote" with probability `p`, adding a level per promotion. It
/// stops on the first failed flip or once `total` is reached, so
/// `P(count = k) = (1 - p) * p^(k - 1)` for `k < total` and the remaining mass
/// sits at `total`.
#[derive(Debug)]
pub struct GeometricalLevelGenerator {
    total: usize,
    p: f64,
    rng: SmallRng, // Fast generator
}

impl GeometricalLevelGenerator {
    /// Create a new GeometricalLevelGenerator with `total` number of levels,
    /// and `p` as the probability that a given node is present in the next
    /// level. The generator is seeded once from OS entropy.
    ///
    /// `p` must be between 0 and 1 and `total` must be greater or equal to 1,
    /// otherwise construction fails.
    pub fn new(total: usize, p: f64) -> Result<Self, Error> {
        Self::with_rng(total, p, SmallRng::from_entropy())
    }

    /// Same as [`GeometricalLevelGenerator::new`], but the sequence of levels
    /// is fully determined by `seed`.
    pub fn with_seed(total: usize, p: f64, seed: u64) -> Result<Self, Error> {
        Self::with_rng(total, p, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(total: usize, p: f64, rng: SmallRng) -> Result<Self, Error> {
        if total == 0 {
            return Err(Error::InvalidMaxHeight(total));
        }
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::InvalidProbability(p));
        }
        Ok(GeometricalLevelGenerator { total, p, rng })
    }
}

impl LevelGenerator for GeometricalLevelGenerator {
    fn random(&mut self) -> usize {
        let mut h = 1;
        while h < self.total && self.rng.gen_bool(self.p) {
            h += 1;
        }
        h
    }

    fn total(&self) -> usize {
        self.total
    }
}
