// src/generators/password.rs
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*";

pub const PASSWORD_LENGTH: usize = 12;

// Guaranteed picks from each pool before the free picks
const PER_POOL_QUOTA: usize = 2;
const POOLS: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS];

/// Generates 12-character passwords with at least two characters from every pool.
///
/// The generator owns its random source so one instance can be reused for a
/// whole batch. Tests inject a seeded `StdRng` through [`PasswordGenerator::with_rng`].
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> String {
        let mut chars: Vec<u8> = Vec::with_capacity(PASSWORD_LENGTH);

        for pool in POOLS {
            for _ in 0..PER_POOL_QUOTA {
                chars.push(pick(&mut self.rng, pool));
            }
        }

        let all: Vec<u8> = POOLS.concat();
        while chars.len() < PASSWORD_LENGTH {
            chars.push(pick(&mut self.rng, &all));
        }

        chars.shuffle(&mut self.rng);

        chars.into_iter().map(char::from).collect()
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &[u8]) -> u8 {
    pool[rng.gen_range(0..pool.len())]
}
