use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::CYCLES_PER_FRAME;

/// Knobs for a Chip-8 session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Instructions executed per 60Hz frame
    pub cycles_per_frame: usize,
    /// Seed for `Cxkk`; taken from the wall clock when unset
    pub seed: Option<u64>,
}

impl Config {
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cycles_per_frame: CYCLES_PER_FRAME,
            seed: None,
        }
    }
}
