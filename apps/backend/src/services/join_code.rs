//! Join code generation for games.
//!
//! Codes draw from uppercase letters and digits with the look-alike characters
//! `0 O 1 I L 5 S 8 B` removed, so they survive being read aloud or retyped.

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ALPHABET: &[u8] = b"ACDEFGHJKMNPQRTUVWXYZ234679";

/// Shared code generator. Seed it for reproducible codes in tests.
#[derive(Debug)]
pub struct JoinCodes {
    rng: Mutex<ChaCha8Rng>,
}

impl JoinCodes {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn next_code(&self, length: usize) -> String {
        let mut rng = self.rng.lock();
        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for JoinCodes {
    fn default() -> Self {
        Self::new()
    }
}
