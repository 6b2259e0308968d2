//! Multi-octave fractal (1/f) heightmap sampler.
//!
//! Each octave doubles the sampling frequency and halves its weight, and the
//! weighted sum is divided by the total weight so the result stays within the
//! bounds of the underlying [`NoiseField`].

use glam::DVec2;

use crate::error::TerrainError;
use crate::noise_field::{NoiseField, PerlinField};

/// Parameters for the fractal sum.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightmapParams {
    /// Frequency of the first octave, applied to normalised grid coordinates.
    pub frequency: f64,
    /// Number of octaves to sum. Must be at least 1.
    pub octaves: u32,
    /// Offset added to every sample position after frequency scaling.
    pub offset: DVec2,
}

impl Default for HeightmapParams {
    fn default() -> Self {
        Self {
            frequency: 4.0,
            octaves: 2,
            offset: DVec2::ZERO,
        }
    }
}

/// Sum of the octave weights `1/2^o` for `o` in `0..octaves`.
pub fn octave_weight_sum(octaves: u32) -> f64 {
    (0..octaves).map(|o| 1.0 / 2f64.powi(o as i32)).sum()
}

/// Produces a normalised height coefficient for normalised grid coordinates.
pub struct HeightmapSampler<N: NoiseField = PerlinField> {
    noise: N,
    params: HeightmapParams,
}

impl<N: NoiseField> HeightmapSampler<N> {
    /// Create a sampler over `noise`.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::ZeroOctaves`] if `params.octaves == 0` and
    /// [`TerrainError::NonFiniteFrequency`] for a NaN or infinite frequency.
    pub fn new(noise: N, params: HeightmapParams) -> Result<Self, TerrainError> {
        if params.octaves == 0 {
            return Err(TerrainError::ZeroOctaves);
        }
        if !params.frequency.is_finite() {
            return Err(TerrainError::NonFiniteFrequency(params.frequency));
        }
        if octave_weight_sum(params.octaves) <= 0.0 {
            return Err(TerrainError::DegenerateNormalizer);
        }
        Ok(Self { noise, params })
    }

    /// Height coefficient at `(nx, ny)`.
    ///
    /// Lies in `[0, 1]` whenever the noise field does; the sum is not
    /// re-clamped here.
    pub fn height_coefficient(&self, nx: f64, ny: f64) -> f64 {
        let HeightmapParams {
            frequency,
            octaves,
            offset,
        } = self.params;

        let mut sum = 0.0;
        let mut normalizer = 0.0;
        for octave in 0..octaves {
            let w = 2f64.powi(octave as i32);
            let x = frequency * w * nx + offset.x;
            let y = frequency * w * ny + offset.y;
            sum += self.noise.sample(x, y) / w;
            normalizer += 1.0 / w;
        }
        sum / normalizer
    }

    /// The parameters this sampler was built with.
    pub fn params(&self) -> &HeightmapParams {
        &self.params
    }

    /// The underlying noise field.
    pub fn noise(&self) -> &N {
        &self.noise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    struct Constant(f64);

    impl NoiseField for Constant {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    /// 1.0 left of `x = 1.5`, 0.0 from there on.
    struct Step;

    impl NoiseField for Step {
        fn sample(&self, x: f64, _y: f64) -> f64 {
            if x < 1.5 { 1.0 } else { 0.0 }
        }
    }

    #[test]
    fn test_zero_octaves_rejected() {
        let result = HeightmapSampler::new(
            PerlinField::default(),
            HeightmapParams {
                octaves: 0,
                ..Default::default()
            },
        );
        assert_eq!(result.err(), Some(TerrainError::ZeroOctaves));
    }

    #[test]
    fn test_non_finite_frequency_rejected() {
        let result = HeightmapSampler::new(
            PerlinField::default(),
            HeightmapParams {
                frequency: f64::NAN,
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(TerrainError::NonFiniteFrequency(_))));
    }

    #[test]
    fn test_weight_sum() {
        assert!((octave_weight_sum(1) - 1.0).abs() < EPSILON);
        assert!((octave_weight_sum(3) - 1.75).abs() < EPSILON);
        assert_eq!(octave_weight_sum(0), 0.0);
    }

    #[test]
    fn test_constant_field_is_preserved() {
        for octaves in 1..8 {
            let sampler = HeightmapSampler::new(
                Constant(0.37),
                HeightmapParams {
                    octaves,
                    ..Default::default()
                },
            )
            .unwrap();
            let h = sampler.height_coefficient(0.3, 0.9);
            assert!((h - 0.37).abs() < EPSILON, "{octaves} octaves gave {h}");
        }
    }

    #[test]
    fn test_octave_weighting() {
        // Octave 0 samples x = 1.0 (value 1), octave 1 samples x = 2.0 (value 0).
        // Weighted: (1/1 + 0/2) / (1 + 1/2) = 2/3.
        let sampler = HeightmapSampler::new(
            Step,
            HeightmapParams {
                frequency: 1.0,
                octaves: 2,
                offset: DVec2::ZERO,
            },
        )
        .unwrap();
        let h = sampler.height_coefficient(1.0, 0.0);
        assert!((h - 2.0 / 3.0).abs() < EPSILON, "got {h}");
    }

    #[test]
    fn test_offset_shifts_sample_position() {
        let sampler = HeightmapSampler::new(
            Step,
            HeightmapParams {
                frequency: 1.0,
                octaves: 1,
                offset: DVec2::new(1.0, 0.0),
            },
        )
        .unwrap();
        // x = 1.0 * 1.0 + 1.0 = 2.0, past the step.
        assert_eq!(sampler.height_coefficient(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_coefficient_in_unit_range() {
        for octaves in 1..=6 {
            let sampler = HeightmapSampler::new(
                PerlinField::new(5),
                HeightmapParams {
                    frequency: 4.0,
                    octaves,
                    offset: DVec2::new(-321.5, 88.25),
                },
            )
            .unwrap();
            for i in -40..40 {
                for j in -40..40 {
                    let nx = i as f64 / 13.0;
                    let ny = j as f64 / 7.0;
                    let h = sampler.height_coefficient(nx, ny);
                    assert!((0.0..=1.0).contains(&h), "{h} at ({nx}, {ny})");
                }
            }
        }
    }

    #[test]
    fn test_determinism_same_inputs() {
        let params = HeightmapParams {
            frequency: 3.0,
            octaves: 4,
            offset: DVec2::new(12.0, -7.0),
        };
        let a = HeightmapSampler::new(PerlinField::new(9), params.clone()).unwrap();
        let b = HeightmapSampler::new(PerlinField::new(9), params).unwrap();
        for i in 0..50 {
            let nx = i as f64 / 50.0;
            assert_eq!(
                a.height_coefficient(nx, 1.0 - nx).to_bits(),
                b.height_coefficient(nx, 1.0 - nx).to_bits()
            );
        }
    }

    #[test]
    fn test_more_octaves_adds_detail() {
        let make = |octaves| {
            HeightmapSampler::new(
                PerlinField::new(21),
                HeightmapParams {
                    frequency: 2.0,
                    octaves,
                    offset: DVec2::new(0.5, 0.25),
                },
            )
            .unwrap()
        };
        let coarse = make(1);
        let fine = make(6);
        let step = 0.01;
        let (mut diff_coarse, mut diff_fine) = (0.0, 0.0);
        for i in 0..1000 {
            let x = i as f64 * step;
            diff_coarse += (coarse.height_coefficient(x + step, 0.1)
                - coarse.height_coefficient(x, 0.1))
            .abs();
            diff_fine +=
                (fine.height_coefficient(x + step, 0.1) - fine.height_coefficient(x, 0.1)).abs();
        }
        assert!(
            diff_fine > diff_coarse,
            "6 octaves should vary more than 1: {diff_fine} vs {diff_coarse}"
        );
    }
}
