//! Seeded derivation of noise offsets.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Half-open range each offset component is drawn from.
pub const OFFSET_RANGE: std::ops::Range<f64> = -1000.0..1000.0;

/// Derive a noise-space offset from `seed`.
///
/// The same seed always yields the same offset on every platform, so a seeded
/// grid can be regenerated exactly.
pub fn random_offset(seed: u64) -> DVec2 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let x = rng.random_range(OFFSET_RANGE);
    let y = rng.random_range(OFFSET_RANGE);
    DVec2::new(x, y)
}
