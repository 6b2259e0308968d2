//! Bounded coherent noise sources.

use noise::{NoiseFn, Perlin};

/// A pure 2D scalar field with values in `[0, 1]`.
///
/// Implementations must be deterministic: equal inputs always produce equal
/// outputs. Samplers share fields across worker threads, hence `Send + Sync`.
pub trait NoiseField: Send + Sync {
    /// Sample the field at `(x, y)`. Defined for every real input.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Gradient (Perlin) noise remapped from `[-1, 1]` to `[0, 1]`.
#[derive(Clone, Debug)]
pub struct PerlinField {
    perlin: Perlin,
    seed: u32,
}

impl PerlinField {
    /// Create a field whose permutation table is derived from `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            seed,
        }
    }

    /// The seed this field was built with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PerlinField {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseField for PerlinField {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let raw = self.perlin.get([x, y]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_over_wide_domain() {
        let field = PerlinField::new(7);
        for i in -200..200 {
            for j in -50..50 {
                let x = i as f64 * 0.37 + 1000.0;
                let y = j as f64 * 1.13 - 500.0;
                let v = field.sample(x, y);
                assert!((0.0..=1.0).contains(&v), "sample {v} out of range at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = PerlinField::new(3);
        let b = PerlinField::new(3);
        for i in 0..100 {
            let x = i as f64 * 0.173;
            assert_eq!(a.sample(x, -x).to_bits(), b.sample(x, -x).to_bits());
        }
    }

    #[test]
    fn test_lattice_points_sit_at_midpoint() {
        let field = PerlinField::default();
        assert!((field.sample(0.0, 0.0) - 0.5).abs() < 1e-12);
        assert!((field.sample(4.0, -9.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_smooth_between_neighbouring_inputs() {
        let field = PerlinField::new(11);
        let step = 1e-3;
        for i in 0..5_000 {
            let x = i as f64 * step;
            let delta = (field.sample(x + step, 0.3) - field.sample(x, 0.3)).abs();
            assert!(delta < 0.01, "jump of {delta} at x={x}");
        }
    }
}
