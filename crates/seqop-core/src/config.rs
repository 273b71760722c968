//! Operator configuration that callers can serialize/deserialize.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_INSERTION_THRESHOLD: usize = 12;
pub const DEFAULT_STABLE_BLOCK_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeqConfig {
    /// Optional seed for deterministic shuffles.
    pub seed: Option<u64>,

    /// Ranges shorter than this are insertion-sorted by the unstable sort.
    pub insertion_threshold: usize,

    /// Width of the insertion-sorted blocks the stable sort starts from.
    pub stable_block_size: usize,
}

impl Default for SeqConfig {
    fn default() -> Self {
        Self {
            seed: None,
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
            stable_block_size: DEFAULT_STABLE_BLOCK_SIZE,
        }
    }
}

impl SeqConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQOP_SEED`: shuffle seed
    /// - `SEQOP_INSERTION_THRESHOLD`: insertion-sort cutoff for the unstable sort
    /// - `SEQOP_STABLE_BLOCK_SIZE`: block width for the stable sort
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQOP_SEED") {
            if let Ok(v) = s.parse::<u64>() {
                cfg.seed = Some(v);
            }
        }

        if let Ok(s) = std::env::var("SEQOP_INSERTION_THRESHOLD") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.insertion_threshold = v;
            }
        }

        if let Ok(s) = std::env::var("SEQOP_STABLE_BLOCK_SIZE") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.stable_block_size = v;
            }
        }

        cfg
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.insertion_threshold == 0 {
            return Err(Error::Config("insertion_threshold must be at least 1".into()));
        }
        if self.stable_block_size == 0 {
            return Err(Error::Config("stable_block_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Random source for shuffling: seeded when `seed` is set, OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
