use getset::CopyGetters;

use crate::errs::Error;

/// The default max height fits dictionaries of a few hundred thousand words,
/// which is `log2` of the expected word count with some headroom.
pub const DEFAULT_MAX_HEIGHT: usize = 20;

/// The chance a node is promoted to the next level.
pub const PROMOTION_PROBABILITY: f64 = 0.5;

/// How dictionaries are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Config {
    max_height: usize,
    /// Fixes the shape of the skiplist when set, otherwise heights are drawn
    /// from OS entropy.
    seed: Option<u64>,
}

impl Config {
    pub fn new(max_height: usize) -> Result<Self, Error> {
        if max_height == 0 {
            return Err(Error::InvalidMaxHeight(max_height));
        }
        Ok(Config {
            max_height,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_height: DEFAULT_MAX_HEIGHT,
            seed: None,
        }
    }
}
