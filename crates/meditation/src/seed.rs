//! Seeded randomness and stable text hashing.
//!
//! A seed string is hashed with SHA-256 and the digest keys a ChaCha8 stream, so the
//! same seed yields the same draws on every platform and in every process. Without a
//! seed the stream is keyed from OS entropy.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

pub type MeditationRng = ChaCha8Rng;

fn sha256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Build the RNG for one meditation. Empty seeds count as absent.
pub fn rng_for(seed: Option<&str>) -> MeditationRng {
    match seed.filter(|s| !s.is_empty()) {
        Some(seed) => ChaCha8Rng::from_seed(sha256(seed.as_bytes())),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// First eight bytes of SHA-256(text), big-endian.
pub fn stable_hash(text: &str) -> u64 {
    let digest = sha256(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}

/// Pick an index into a list of `len` entries from the hash of `text`.
pub fn select_index(text: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (stable_hash(text) % len as u64) as usize
}
